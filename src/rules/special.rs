//! Special-character rule - checks for at least one non-alphanumeric character.

use secrecy::{ExposeSecret, SecretString};

use super::{Rule, RuleOutcome, RuleResult};

/// Fails unless the password contains at least one character that is
/// neither alphabetic nor numeric.
#[derive(Default)]
pub struct SpecialCharRule;

impl Rule for SpecialCharRule {
    fn name(&self) -> &'static str {
        "special_char"
    }

    fn evaluate(&self, password: &SecretString) -> RuleResult {
        if !password
            .expose_secret()
            .chars()
            .any(|c| !c.is_alphanumeric())
        {
            return Ok(RuleOutcome::Fail(
                "Password must contain at least one special character!".to_string(),
            ));
        }
        Ok(RuleOutcome::Pass)
    }
}
