//! Fraud DTOs

use serde::Deserialize;
use validator::Validate;

use super::not_blank;

#[derive(Debug, Deserialize, Validate)]
pub struct FraudRequest {
    #[validate(custom(function = "not_blank"), length(max = 1000000))]
    pub text: String,
    pub claimed_amount: Option<i64>,
    pub estimated_amount: Option<i64>,
}
