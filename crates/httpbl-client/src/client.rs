//! Main http:BL client implementation.

use crate::config::PolicyConfig;
use crate::resolver::{DnsResolver, Resolve};
use httpbl_core::{codec, HttpblError, Response, Result};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::debug;

/// The production http:BL root zone
const DEFAULT_ROOT: &str = "dnsbl.httpbl.org";

/// Main http:BL reputation client
///
/// Cloning is cheap; all state is immutable and shared, so a single client
/// may be used concurrently from many tasks.
#[derive(Clone)]
pub struct HttpblClient {
    inner: Arc<ClientInner>,
}

impl std::fmt::Debug for HttpblClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpblClient")
            .field("root", &self.inner.root)
            .field("policy", &self.inner.policy)
            .field("debug", &self.inner.debug)
            .finish_non_exhaustive()
    }
}

struct ClientInner {
    resolver: Box<dyn Resolve>,
    api_key: String,
    root: String,
    policy: PolicyConfig,
    debug: bool,
}

impl HttpblClient {
    /// Create a new client with the given API key using default settings
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        HttpblClientBuilder::new(api_key).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> HttpblClientBuilder {
        HttpblClientBuilder::new(api_key)
    }

    /// Look up the reputation of an IP address or hostname.
    ///
    /// Returns `Ok(None)` when the target is not listed. Failure to
    /// resolve the *query hostname* (NXDOMAIN, timeout, unreachable
    /// server) is deliberately folded into `Ok(None)`: an unreachable or
    /// non-listing blacklist must never abort the caller's own
    /// request-handling path. Only an unusable input target surfaces as
    /// [`HttpblError::Resolution`].
    pub async fn check(&self, target: &str) -> Result<Option<Response>> {
        let ip = self.normalize_target(target).await?;
        let query = codec::build_query_name(&self.inner.api_key, &ip, &self.inner.root);

        if self.inner.debug {
            debug!(input = target, query = %query, "http:BL lookup");
        }

        match self.inner.resolver.lookup_ipv4(&query).await {
            Ok(Some(addr)) => Ok(codec::decode(addr)),
            Ok(None) => Ok(None),
            Err(err) => {
                debug!(query = %query, error = %err, "query lookup failed, treating as not listed");
                Ok(None)
            }
        }
    }

    /// Check a target against the configured thresholds.
    ///
    /// Fail-open: a target with no listing is always acceptable. A listed
    /// target is acceptable only when it passes both threshold checks, see
    /// [`PolicyConfig`] for the comparison semantics.
    pub async fn is_ok(&self, target: &str) -> Result<bool> {
        let Some(response) = self.check(target).await? else {
            return Ok(true);
        };

        let policy = &self.inner.policy;
        let age_ok = policy.ok_age.map_or(true, |t| response.age() > t);
        let threat_ok = policy.ok_threat.map_or(true, |t| response.threat_score() < t);

        Ok(age_ok && threat_ok)
    }

    /// Turn the input target into the IPv4 address to query about.
    async fn normalize_target(&self, target: &str) -> Result<Ipv4Addr> {
        if is_dotted_quad(target) {
            return target
                .parse()
                .map_err(|e| HttpblError::Resolution(format!("'{target}': {e}")));
        }

        match self.inner.resolver.lookup_ipv4(target).await {
            Ok(Some(ip)) => Ok(ip),
            Ok(None) => Err(HttpblError::Resolution(format!(
                "'{target}' has no IPv4 address"
            ))),
            Err(err) => Err(HttpblError::Resolution(format!("'{target}': {err}"))),
        }
    }
}

/// Returns true if every label of `s` is purely numeric.
///
/// Anything else is treated as a hostname and resolved first.
fn is_dotted_quad(s: &str) -> bool {
    !s.is_empty()
        && s.split('.')
            .all(|label| !label.is_empty() && label.bytes().all(|b| b.is_ascii_digit()))
}

/// Builder for configuring a [`HttpblClient`]
pub struct HttpblClientBuilder {
    api_key: String,
    root: String,
    policy: PolicyConfig,
    debug: bool,
    resolver: Option<Box<dyn Resolve>>,
}

impl HttpblClientBuilder {
    /// Create a new builder with the given API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            root: DEFAULT_ROOT.to_string(),
            policy: PolicyConfig::default(),
            debug: false,
            resolver: None,
        }
    }

    /// Set the root zone to query under (useful for testing)
    #[must_use]
    pub fn root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    /// Set the accept/reject thresholds
    #[must_use]
    pub fn policy(mut self, policy: PolicyConfig) -> Self {
        self.policy = policy;
        self
    }

    /// Enable per-lookup diagnostic events
    #[must_use]
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Use a custom resolver backend
    #[must_use]
    pub fn resolver(mut self, resolver: impl Resolve + 'static) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    /// Build the client
    ///
    /// Fails with [`HttpblError::Config`] when the API key is empty; the
    /// service silently answers malformed queries for keyless lookups, so
    /// letting one through would turn every check into noise.
    pub fn build(self) -> Result<HttpblClient> {
        if self.api_key.trim().is_empty() {
            return Err(HttpblError::Config("API key must not be empty".into()));
        }

        let resolver = self
            .resolver
            .unwrap_or_else(|| Box::new(DnsResolver::new()));

        Ok(HttpblClient {
            inner: Arc::new(ClientInner {
                resolver,
                api_key: self.api_key,
                root: self.root,
                policy: self.policy,
                debug: self.debug,
            }),
        })
    }
}
