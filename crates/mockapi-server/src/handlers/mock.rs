//! Mock entity handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use mockapi_core::{MockOrder, MockUser, PaymentPlaceholders};
use tracing::instrument;

use crate::error::{AppError, PAYMENT_NOT_FOUND};
use crate::state::AppState;

/// Handler for GET /mock/user.
pub async fn mock_user() -> Json<MockUser> {
    Json(MockUser::generate())
}

/// Handler for GET /mock/order/{status}.
///
/// The status code follows the label; unknown labels are echoed with 200.
#[instrument(skip_all, fields(status = %status))]
pub async fn mock_order(Path(status): Path<String>) -> (StatusCode, Json<MockOrder>) {
    let order = MockOrder::new(status);
    let code = StatusCode::from_u16(order.outcome().status_code()).unwrap_or(StatusCode::OK);

    (code, Json(order))
}

/// Handler for GET /mock/payment.
///
/// Reads the payment template file and substitutes `{{timestamp}}` and
/// `{{uuid}}`. The result is returned as JSON without being parsed.
#[instrument(skip_all)]
pub async fn mock_payment(State(state): State<AppState>) -> Result<Response, AppError> {
    let path = state.payment_template_path();

    let template = match tokio::fs::read_to_string(&path).await {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Payment template missing");
            return Err(AppError::NotFound(PAYMENT_NOT_FOUND.to_string()));
        },
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Failed to read payment template");
            return Err(AppError::Internal(
                "Payment template could not be read".to_string(),
            ));
        },
    };

    let body = PaymentPlaceholders::now().apply(&template);

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
