//! Digit rule - checks for at least one decimal digit.

use secrecy::{ExposeSecret, SecretString};

use super::{Rule, RuleOutcome, RuleResult};

/// Fails when the password contains no ASCII digit.
#[derive(Default)]
pub struct DigitRule;

impl Rule for DigitRule {
    fn name(&self) -> &'static str {
        "digit"
    }

    fn evaluate(&self, password: &SecretString) -> RuleResult {
        if !password.expose_secret().chars().any(|c| c.is_ascii_digit()) {
            return Ok(RuleOutcome::Fail(
                "Password must contain at least one digit!".to_string(),
            ));
        }
        Ok(RuleOutcome::Pass)
    }
}
