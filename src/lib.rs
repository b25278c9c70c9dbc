//! Password policy validation with breach database lookup
//!
//! This library checks passwords against a fixed-order chain of policy
//! rules plus a k-anonymity lookup in a remote breach database, and can
//! persist per-password verdicts to a tab-separated results file.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_AUDIT_API_BASE`: Custom base URL for the breach range-query
//!   endpoint (default: `https://api.pwnedpasswords.com`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_audit::{BreachLookupClient, HttpBreachSource, ValidationPipeline};
//! use secrecy::SecretString;
//!
//! # fn main() -> Result<(), pwd_audit::LookupError> {
//! let source = HttpBreachSource::new()?;
//! let pipeline = ValidationPipeline::new(BreachLookupClient::new(source));
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let verdict = pipeline.check(&password)?;
//!
//! println!("Safe: {}", verdict.is_safe());
//! for reason in verdict.reasons() {
//!     println!("  - {}", reason);
//! }
//! # Ok(())
//! # }
//! ```

// Internal modules
mod breach;
mod digest;
mod pipeline;
mod report;
mod rules;

// Public API
pub use breach::{
    BreachLookupClient, BreachRecord, BreachSource, HttpBreachSource, LookupError, api_base,
};
pub use digest::Digest;
pub use pipeline::{ValidationPipeline, Verdict};
pub use report::{BatchError, BatchSummary, CheckRecord, check_file, count_unsafe};
pub use rules::{
    BreachRule, CaseMixRule, DigitRule, LengthRule, Rule, RuleOutcome, RuleResult, SpecialCharRule,
};
