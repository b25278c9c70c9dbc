//! Case-mix rule - checks for both lower and upper case letters.

use secrecy::{ExposeSecret, SecretString};

use super::{Rule, RuleOutcome, RuleResult};

/// Fails unless the password contains at least one uppercase and at least
/// one lowercase letter.
#[derive(Default)]
pub struct CaseMixRule;

impl Rule for CaseMixRule {
    fn name(&self) -> &'static str {
        "case_mix"
    }

    fn evaluate(&self, password: &SecretString) -> RuleResult {
        let pwd = password.expose_secret();
        let has_upper = pwd.chars().any(|c| c.is_uppercase());
        let has_lower = pwd.chars().any(|c| c.is_lowercase());

        if !(has_upper && has_lower) {
            return Ok(RuleOutcome::Fail(
                "Password must contain lower and upper case letters!".to_string(),
            ));
        }
        Ok(RuleOutcome::Pass)
    }
}
