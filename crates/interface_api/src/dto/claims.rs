//! Claims DTOs

use serde::Deserialize;
use validator::Validate;

use super::not_blank;

#[derive(Debug, Deserialize, Validate)]
pub struct ClaimTextRequest {
    #[validate(custom(function = "not_blank"), length(max = 1000000))]
    pub text: String,
}
