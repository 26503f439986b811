//! http:BL wire codec: query-hostname construction and response decoding.
//!
//! Queries follow the DNSBL pattern with an API key prefix: reverse the IP
//! octets and place them between the key and the list's root zone.
//! Example: checking 1.2.3.4 with key `k` queries `k.4.3.2.1.dnsbl.httpbl.org`.
//!
//! Responses come back as loopback-shaped A records:
//! - `127.<age>.<threat>.<flags>` = listed, with flags a category bitmask
//! - `127.<age>.<serial>.0` = search engine, serial per the engine table
//! - NXDOMAIN = not listed
//!
//! Anything outside `127.0.0.0/8` is not a valid encoding and decodes to
//! nothing rather than an error.

use crate::types::Response;
use crate::{HttpblError, Result};
use std::net::Ipv4Addr;

/// Reverse an IPv4 address for DNSBL lookup.
///
/// Converts `1.2.3.4` into `4.3.2.1` (without key or zone).
#[must_use]
pub fn reverse_ipv4(ip: &Ipv4Addr) -> String {
    let octets = ip.octets();
    format!("{}.{}.{}.{}", octets[3], octets[2], octets[1], octets[0])
}

/// Build the full http:BL query name for an IP.
///
/// Example: `build_query_name("k", 1.2.3.4, "dnsbl.httpbl.org")` ->
/// `"k.4.3.2.1.dnsbl.httpbl.org"`.
#[must_use]
pub fn build_query_name(api_key: &str, ip: &Ipv4Addr, root: &str) -> String {
    let reversed = reverse_ipv4(ip);
    format!("{api_key}.{reversed}.{root}")
}

/// Parse a query name back into the IP address it asks about.
///
/// Example: `parse_query_name("k.4.3.2.1.dnsbl.httpbl.org", "k", "dnsbl.httpbl.org")`
/// -> Ok(1.2.3.4)
pub fn parse_query_name(query: &str, api_key: &str, root: &str) -> Result<Ipv4Addr> {
    let middle = query
        .strip_prefix(api_key)
        .and_then(|s| s.strip_prefix('.'))
        .and_then(|s| s.strip_suffix(root))
        .and_then(|s| s.strip_suffix('.'))
        .ok_or_else(|| {
            HttpblError::Encoding(format!(
                "query '{query}' does not match '<key>.<reversed-ip>.{root}'"
            ))
        })?;

    let octets: Vec<&str> = middle.split('.').collect();
    if octets.len() != 4 {
        return Err(HttpblError::Encoding(format!(
            "expected 4 octets in reversed IP, got {}",
            octets.len()
        )));
    }

    format!("{}.{}.{}.{}", octets[3], octets[2], octets[1], octets[0])
        .parse()
        .map_err(|e| HttpblError::Encoding(format!("invalid reversed IP in '{query}': {e}")))
}

/// Decode a resolved query address into a threat assessment.
///
/// Returns `None` when the address is not a valid http:BL encoding (the
/// first octet must be exactly 127); callers treat that the same as a
/// lookup that returned no record at all.
#[must_use]
pub fn decode(addr: Ipv4Addr) -> Option<Response> {
    let [first, age, threat, flags] = addr.octets();
    if first != 127 {
        return None;
    }
    Some(Response::new(age, threat, flags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    const KEY: &str = "abcdefghijkl";
    const ROOT: &str = "dnsbl.httpbl.org";

    #[test]
    fn test_reverse_ipv4() {
        let ip = Ipv4Addr::new(1, 2, 3, 4);
        assert_eq!(reverse_ipv4(&ip), "4.3.2.1");

        let ip = Ipv4Addr::new(192, 168, 1, 100);
        assert_eq!(reverse_ipv4(&ip), "100.1.168.192");
    }

    #[test]
    fn test_build_query_name() {
        let name = build_query_name(KEY, &Ipv4Addr::new(1, 2, 3, 4), ROOT);
        assert_eq!(name, "abcdefghijkl.4.3.2.1.dnsbl.httpbl.org");
    }

    #[test]
    fn test_parse_query_name() {
        let ip = parse_query_name("abcdefghijkl.4.3.2.1.dnsbl.httpbl.org", KEY, ROOT).unwrap();
        assert_eq!(ip, Ipv4Addr::new(1, 2, 3, 4));
    }

    #[test]
    fn test_roundtrip() {
        let original = Ipv4Addr::new(203, 0, 113, 42);
        let query = build_query_name(KEY, &original, ROOT);
        let parsed = parse_query_name(&query, KEY, ROOT).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_parse_rejects_foreign_zone() {
        assert!(parse_query_name("abcdefghijkl.4.3.2.1.example.com", KEY, ROOT).is_err());
        assert!(parse_query_name("otherkey.4.3.2.1.dnsbl.httpbl.org", KEY, ROOT).is_err());
        assert!(parse_query_name("abcdefghijkl.3.2.1.dnsbl.httpbl.org", KEY, ROOT).is_err());
    }

    #[test]
    fn test_decode_listed() {
        let r = decode(Ipv4Addr::new(127, 50, 10, 4)).unwrap();
        assert_eq!(r.age(), 50);
        assert_eq!(r.threat_score(), 10);
        assert_eq!(r.flags(), 4);
        assert!(r.has_category(Category::CommentSpammer));
        assert!(!r.is_search_engine());
    }

    #[test]
    fn test_decode_search_engine() {
        let r = decode(Ipv4Addr::new(127, 50, 10, 0)).unwrap();
        assert!(r.is_search_engine());
    }

    #[test]
    fn test_decode_rejects_non_loopback() {
        assert!(decode(Ipv4Addr::new(1, 2, 3, 4)).is_none());
        assert!(decode(Ipv4Addr::new(128, 0, 0, 1)).is_none());
    }
}
