//! Policy rules.
//!
//! Each rule checks one independent aspect of a password and reports a
//! [`RuleOutcome`]. Only the breach rule performs I/O; a [`LookupError`]
//! from it is an infrastructure fault, not a policy failure.

mod breach;
mod case_mix;
mod digit;
mod length;
mod special;

pub use breach::BreachRule;
pub use case_mix::CaseMixRule;
pub use digit::DigitRule;
pub use length::LengthRule;
pub use special::SpecialCharRule;

use secrecy::SecretString;

use crate::breach::LookupError;

/// Outcome of a single rule evaluation. No partial or unknown state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    Pass,
    Fail(String),
}

/// Result type for rule evaluation.
/// - `Ok(RuleOutcome::Pass)` - rule passed
/// - `Ok(RuleOutcome::Fail(reason))` - rule failed with a reason
/// - `Err(LookupError)` - infrastructure fault, aborts the pipeline
pub type RuleResult = Result<RuleOutcome, LookupError>;

/// One policy check over a password.
///
/// Rules evaluate independently of each other; evaluation order only
/// affects the order in which failure reasons accumulate.
pub trait Rule: Send + Sync {
    fn name(&self) -> &'static str;

    fn evaluate(&self, password: &SecretString) -> RuleResult;
}
