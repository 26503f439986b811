//! DNS client for the http:BL reputation service.
//!
//! This crate provides the main [`HttpblClient`] for performing reputation
//! checks and applying an accept/reject policy over the decoded results.

mod client;
mod config;
mod resolver;

pub use client::{HttpblClient, HttpblClientBuilder};
pub use config::PolicyConfig;
pub use resolver::{DnsResolver, Resolve};

pub use httpbl_core::{HttpblError, Result};
