//! The DNS seam between the client and the outside world.

use async_trait::async_trait;
use hickory_resolver::config::ResolverConfig;
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;
use httpbl_core::{HttpblError, Result};
use std::net::{IpAddr, Ipv4Addr};

/// A-record resolution as consumed by [`HttpblClient`].
///
/// `Ok(None)` means the name definitively has no IPv4 address (NXDOMAIN or
/// an empty record set); `Err` is reserved for transport-level failures
/// such as timeouts or unreachable servers. The distinction matters: the
/// client turns both into "not listed" for query lookups, but only `Err`
/// and `Ok(None)` on the *input target* become a resolution error.
///
/// [`HttpblClient`]: crate::HttpblClient
#[async_trait]
pub trait Resolve: Send + Sync {
    /// Resolve a hostname to its first IPv4 address.
    async fn lookup_ipv4(&self, name: &str) -> Result<Option<Ipv4Addr>>;
}

/// Default [`Resolve`] implementation backed by `hickory-resolver`.
#[derive(Clone)]
pub struct DnsResolver {
    resolver: TokioResolver,
}

impl Default for DnsResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl DnsResolver {
    /// Create a resolver from the system configuration, falling back to
    /// the library defaults when no system config can be read.
    #[must_use]
    pub fn new() -> Self {
        let resolver = TokioResolver::builder_tokio()
            .map(|b| b.build())
            .unwrap_or_else(|_| {
                TokioResolver::builder_with_config(
                    ResolverConfig::default(),
                    TokioConnectionProvider::default(),
                )
                .build()
            });

        Self { resolver }
    }
}

#[async_trait]
impl Resolve for DnsResolver {
    async fn lookup_ipv4(&self, name: &str) -> Result<Option<Ipv4Addr>> {
        match self.resolver.lookup_ip(name).await {
            Ok(lookup) => Ok(lookup.iter().find_map(|ip| match ip {
                IpAddr::V4(v4) => Some(v4),
                IpAddr::V6(_) => None,
            })),
            Err(err) if err.is_nx_domain() || err.is_no_records_found() => Ok(None),
            Err(err) => Err(HttpblError::Dns(err.to_string())),
        }
    }
}
