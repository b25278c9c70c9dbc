//! Validation pipeline - runs the ordered rule chain over one password.

use secrecy::SecretString;

use crate::breach::{BreachLookupClient, BreachSource, LookupError};
use crate::rules::{
    BreachRule, CaseMixRule, DigitRule, LengthRule, Rule, RuleOutcome, SpecialCharRule,
};

/// Final classification of one password.
///
/// `Unsafe` carries the failure reasons in rule-evaluation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Safe,
    Unsafe(Vec<String>),
}

impl Verdict {
    pub fn is_safe(&self) -> bool {
        matches!(self, Verdict::Safe)
    }

    pub fn reasons(&self) -> &[String] {
        match self {
            Verdict::Safe => &[],
            Verdict::Unsafe(reasons) => reasons,
        }
    }
}

/// Ordered chain of policy rules.
///
/// Every rule is evaluated even after a failure, so the verdict carries all
/// applicable reasons; only a [`LookupError`] from the breach rule aborts
/// the chain early.
pub struct ValidationPipeline {
    rules: Vec<Box<dyn Rule>>,
}

impl ValidationPipeline {
    /// Builds the canonical chain: length (min 8), digit, case mix, special
    /// character, breach lookup.
    pub fn new<S: BreachSource + 'static>(client: BreachLookupClient<S>) -> Self {
        Self::with_rules(vec![
            Box::new(LengthRule::default()),
            Box::new(DigitRule),
            Box::new(CaseMixRule),
            Box::new(SpecialCharRule),
            Box::new(BreachRule::new(client)),
        ])
    }

    /// Builds a pipeline from a custom rule chain.
    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Checks one password against every rule in order.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] when the breach lookup fails; an
    /// infrastructure fault never folds into the verdict.
    pub fn check(&self, password: &SecretString) -> Result<Verdict, LookupError> {
        let mut reasons = Vec::new();

        for rule in &self.rules {
            match rule.evaluate(password) {
                Ok(RuleOutcome::Pass) => {}
                Ok(RuleOutcome::Fail(reason)) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("rule {} failed: {}", rule.name(), reason);
                    reasons.push(reason);
                }
                Err(err) => {
                    #[cfg(feature = "tracing")]
                    tracing::error!("rule {} aborted the check: {}", rule.name(), err);
                    return Err(err);
                }
            }
        }

        if reasons.is_empty() {
            Ok(Verdict::Safe)
        } else {
            Ok(Verdict::Unsafe(reasons))
        }
    }
}
