#![allow(dead_code)]

/// Returns a payment template fixture with both placeholder tokens.
pub fn payment_template() -> &'static str {
    r#"{
        "payment_id": "{{uuid}}",
        "amount": 150000,
        "currency": "IDR",
        "status": "paid",
        "created_at": {{timestamp}}
    }"#
}
