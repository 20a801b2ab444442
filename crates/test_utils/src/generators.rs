//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating claim-like text with known
//! properties.

use proptest::prelude::*;

/// Strategy for text that contains no phrase from any analyzer table and no
/// 3+ digit number.
///
/// The alphabet is limited to letters that no configured phrase is built
/// from alone, so no substring of the output can ever match.
pub fn keyword_free_text_strategy() -> impl Strategy<Value = String> {
    "[qwxyzkvj ]{0,80}"
}

/// Strategy for plausible claim amounts
pub fn amount_strategy() -> impl Strategy<Value = i64> {
    100i64..10_000_000i64
}

/// Strategy for an optional amount, `None` about a third of the time
pub fn optional_amount_strategy() -> impl Strategy<Value = Option<i64>> {
    prop_oneof![
        1 => Just(None),
        2 => amount_strategy().prop_map(Some),
    ]
}
