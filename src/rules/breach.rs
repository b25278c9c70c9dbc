//! Breach rule - checks the password against the leaked-password database.

use secrecy::SecretString;

use super::{Rule, RuleOutcome, RuleResult};
use crate::breach::{BreachLookupClient, BreachSource};

/// Fails when the password appears in the breach database.
///
/// Unlike the local rules this one performs network I/O through its
/// [`BreachLookupClient`]; a lookup failure propagates as an error and is
/// never reported as a pass.
pub struct BreachRule<S> {
    client: BreachLookupClient<S>,
}

impl<S: BreachSource> BreachRule<S> {
    pub fn new(client: BreachLookupClient<S>) -> Self {
        Self { client }
    }
}

impl<S: BreachSource> Rule for BreachRule<S> {
    fn name(&self) -> &'static str {
        "breach"
    }

    fn evaluate(&self, password: &SecretString) -> RuleResult {
        if self.client.lookup(password)? {
            return Ok(RuleOutcome::Fail(
                "Password is in the leaked passwords database!".to_string(),
            ));
        }
        Ok(RuleOutcome::Pass)
    }
}
