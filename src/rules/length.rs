//! Length rule - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

use super::{Rule, RuleOutcome, RuleResult};

const DEFAULT_MIN_LENGTH: usize = 8;

/// Fails when the password has fewer than `min_length` characters.
pub struct LengthRule {
    min_length: usize,
}

impl LengthRule {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }
}

impl Default for LengthRule {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LENGTH)
    }
}

impl Rule for LengthRule {
    fn name(&self) -> &'static str {
        "length"
    }

    fn evaluate(&self, password: &SecretString) -> RuleResult {
        if password.expose_secret().chars().count() < self.min_length {
            return Ok(RuleOutcome::Fail("Password is too short!".to_string()));
        }
        Ok(RuleOutcome::Pass)
    }
}
