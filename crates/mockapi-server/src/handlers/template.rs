//! Template CRUD handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::header,
    response::{IntoResponse, Response},
};
use mockapi_core::Template;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;

/// Body of POST /template.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateCreate {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Handler for POST /template. Creates or overwrites the named template.
///
/// Any string is accepted as a name; only the body shape is validated.
#[instrument(skip_all)]
pub async fn create_template(
    State(state): State<AppState>,
    payload: Result<Json<TemplateCreate>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(payload) = payload?;
    let template = Template::new(payload.name, payload.content);

    state.templates().upsert(&template).await?;

    tracing::info!(name = template.name(), "Template stored");

    Ok(Json(MessageResponse {
        message: "Template created".to_string(),
    }))
}

/// Handler for GET /template/{name}. Returns the raw content as text.
#[instrument(skip_all, fields(name = %name))]
pub async fn get_template(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, AppError> {
    let template = state.templates().get(&name).await?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        template.into_content(),
    )
        .into_response())
}
