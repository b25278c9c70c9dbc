//! Breach database lookup client.
//!
//! Implements the k-anonymity range-query protocol: only the 5-character
//! digest prefix is ever sent over the wire, and the full suffix set for
//! that prefix is compared locally. Results are memoized per exact password
//! value for the lifetime of the client.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::digest::Digest;

const DEFAULT_API_BASE: &str = "https://api.pwnedpasswords.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Infrastructure failure during a breach lookup.
///
/// Distinct from a "not breached" result: the pipeline must never coerce
/// one of these into a verdict.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("network error during breach lookup: {0}")]
    Network(#[from] reqwest::Error),
    #[error("breach range query returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed range response: {0}")]
    MalformedResponse(String),
}

/// One suffix:count entry from a range-query response, scoped to the
/// queried prefix. The count is carried but not semantically used beyond
/// presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreachRecord {
    pub suffix: String,
    pub count: u64,
}

/// Transport seam for the range-query endpoint.
///
/// `prefix` is the 5-character uppercase hex digest prefix; the returned
/// body is the raw newline-delimited `SUFFIX:COUNT` text.
pub trait BreachSource: Send + Sync {
    fn fetch_range(&self, prefix: &str) -> Result<String, LookupError>;
}

/// Returns the range-query API base URL.
///
/// Priority:
/// 1. Environment variable `PWD_AUDIT_API_BASE`
/// 2. Default `https://api.pwnedpasswords.com`
pub fn api_base() -> String {
    std::env::var("PWD_AUDIT_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
}

/// HTTP transport: `GET {base}/range/{prefix}` with a bounded timeout.
pub struct HttpBreachSource {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpBreachSource {
    /// Builds a source against the configured API base (see [`api_base`]).
    pub fn new() -> Result<Self, LookupError> {
        Self::with_base_url(api_base())
    }

    /// Builds a source against an explicit base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, LookupError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

impl BreachSource for HttpBreachSource {
    fn fetch_range(&self, prefix: &str) -> Result<String, LookupError> {
        let url = format!("{}/range/{}", self.base_url, prefix);
        let response = self.client.get(&url).send()?;

        let status = response.status();
        if !status.is_success() {
            #[cfg(feature = "tracing")]
            tracing::error!("breach range query failed: {} -> {}", url, status);
            return Err(LookupError::Status(status));
        }

        Ok(response.text()?)
    }
}

/// Cached breach membership lookup over a [`BreachSource`].
///
/// `true` from [`lookup`](Self::lookup) means the password's digest suffix
/// appeared in the range response, i.e. the password is breached. The cache
/// is keyed by exact password value and never evicted, so identical
/// passwords hit the network at most once per client lifetime.
pub struct BreachLookupClient<S> {
    source: S,
    cache: Mutex<HashMap<String, bool>>,
}

impl<S: BreachSource> BreachLookupClient<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Checks whether a password appears in the breach database.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] on transport failure, non-success status, or
    /// a malformed response body. An error is never a "not breached".
    pub fn lookup(&self, password: &SecretString) -> Result<bool, LookupError> {
        let pwd = password.expose_secret();

        if let Some(&cached) = self.cache.lock().unwrap().get(pwd) {
            #[cfg(feature = "tracing")]
            tracing::debug!("breach lookup cache hit");
            return Ok(cached);
        }

        let digest = Digest::derive(password);
        let body = self.source.fetch_range(digest.prefix())?;
        let records = parse_range_response(&body)?;
        let breached = records.iter().any(|r| r.suffix == digest.suffix());

        self.cache
            .lock()
            .unwrap()
            .insert(pwd.to_string(), breached);

        Ok(breached)
    }
}

/// Parses a newline-delimited `SUFFIX:COUNT` range response body.
///
/// Blank lines are skipped; trailing `\r` is tolerated. Anything else that
/// does not fit the shape is a [`LookupError::MalformedResponse`].
fn parse_range_response(body: &str) -> Result<Vec<BreachRecord>, LookupError> {
    let mut records = Vec::new();

    for line in body.lines() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        let Some((suffix, count)) = line.split_once(':') else {
            return Err(LookupError::MalformedResponse(format!(
                "line without ':' separator: {line:?}"
            )));
        };

        if suffix.len() != 35 || !suffix.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(LookupError::MalformedResponse(format!(
                "invalid suffix field: {suffix:?}"
            )));
        }

        let count = count.parse::<u64>().map_err(|_| {
            LookupError::MalformedResponse(format!("invalid count field: {count:?}"))
        })?;

        records.push(BreachRecord {
            suffix: suffix.to_string(),
            count,
        });
    }

    Ok(records)
}


#[cfg(test)]
mod http_tests {
    use super::*;
    use serial_test::serial;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn set_env(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value) };
    }

    fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key) };
    }

    // SHA1("Password123") = B2E98AD6F6EB8508DD6A14CFA704BAD7F05F6FB1
    const PASSWORD123_PREFIX: &str = "B2E98";
    const PASSWORD123_SUFFIX: &str = "AD6F6EB8508DD6A14CFA704BAD7F05F6FB1";

    #[test]
    #[serial]
    fn test_api_base_default() {
        remove_env("PWD_AUDIT_API_BASE");
        assert_eq!(api_base(), "https://api.pwnedpasswords.com");
    }

    #[test]
    #[serial]
    fn test_api_base_from_env() {
        set_env("PWD_AUDIT_API_BASE", "http://localhost:9999");
        assert_eq!(api_base(), "http://localhost:9999");
        remove_env("PWD_AUDIT_API_BASE");
    }

    #[test]
    fn test_http_source_breached() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", format!("/range/{PASSWORD123_PREFIX}").as_str())
            .with_status(200)
            .with_body(format!(
                "0018A45C4D1DEF81644B54AB7F969B88D65:3\r\n{PASSWORD123_SUFFIX}:12345\r\n"
            ))
            .create();

        let source = HttpBreachSource::with_base_url(server.url()).unwrap();
        let client = BreachLookupClient::new(source);
        assert!(client.lookup(&secret("Password123")).unwrap());
        mock.assert();
    }

    #[test]
    fn test_http_source_not_breached() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", format!("/range/{PASSWORD123_PREFIX}").as_str())
            .with_status(200)
            .with_body("0018A45C4D1DEF81644B54AB7F969B88D65:3\r\n")
            .create();

        let source = HttpBreachSource::with_base_url(server.url()).unwrap();
        let client = BreachLookupClient::new(source);
        assert!(!client.lookup(&secret("Password123")).unwrap());
    }

    #[test]
    fn test_http_source_cache_skips_second_request() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", format!("/range/{PASSWORD123_PREFIX}").as_str())
            .with_status(200)
            .with_body(format!("{PASSWORD123_SUFFIX}:12345\r\n"))
            .expect(1)
            .create();

        let source = HttpBreachSource::with_base_url(server.url()).unwrap();
        let client = BreachLookupClient::new(source);
        assert!(client.lookup(&secret("Password123")).unwrap());
        assert!(client.lookup(&secret("Password123")).unwrap());
        mock.assert();
    }

    #[test]
    fn test_http_source_error_status() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", format!("/range/{PASSWORD123_PREFIX}").as_str())
            .with_status(503)
            .create();

        let source = HttpBreachSource::with_base_url(server.url()).unwrap();
        let client = BreachLookupClient::new(source);
        let result = client.lookup(&secret("Password123"));
        assert!(matches!(result, Err(LookupError::Status(s)) if s.as_u16() == 503));
    }

    #[test]
    fn test_http_source_transport_failure() {
        // Nothing listens here; the connection attempt itself fails.
        let source = HttpBreachSource::with_base_url("http://127.0.0.1:1").unwrap();
        let client = BreachLookupClient::new(source);
        let result = client.lookup(&secret("Password123"));
        assert!(matches!(result, Err(LookupError::Network(_))));
    }
}
