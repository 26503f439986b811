//! Core types and wire codec for the http:BL reputation client.
//!
//! This crate provides the foundational pieces shared across the httpbl
//! library:
//!
//! - **Types**: the decoded [`Response`] assessment with its
//!   [`Category`] bitmask and [`SearchEngine`] identification
//! - **Codec**: the query-hostname construction and loopback-address
//!   decoding rules of the http:BL DNS convention
//! - **Errors**: shared error handling with [`HttpblError`]
//!
//! # Example
//!
//! ```rust
//! use httpbl_core::{codec, Category};
//! use std::net::Ipv4Addr;
//!
//! let query = codec::build_query_name("abcdefghijkl", &Ipv4Addr::new(1, 2, 3, 4), "dnsbl.httpbl.org");
//! assert_eq!(query, "abcdefghijkl.4.3.2.1.dnsbl.httpbl.org");
//!
//! let response = codec::decode(Ipv4Addr::new(127, 3, 25, 5)).unwrap();
//! assert!(response.has_category(Category::Suspicious));
//! assert!(response.has_category(Category::CommentSpammer));
//! ```

mod error;
pub mod types;

pub mod codec;

pub use error::{HttpblError, Result};
pub use types::*;
