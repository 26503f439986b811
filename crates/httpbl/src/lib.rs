//! Rust client for the Project Honey Pot http:BL DNS reputation service.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use httpbl::{Category, HttpblClient};
//!
//! #[tokio::main]
//! async fn main() -> httpbl::Result<()> {
//!     let client = HttpblClient::new("your-access-key")?;
//!
//!     // Full assessment
//!     if let Some(response) = client.check("203.0.113.7").await? {
//!         println!("threat score: {}", response.threat_score());
//!         println!("days since last activity: {}", response.age());
//!         if response.has_category(Category::CommentSpammer) {
//!             println!("known comment spammer");
//!         }
//!     }
//!
//!     // Or just an accept/reject decision
//!     if !client.is_ok("203.0.113.7").await? {
//!         println!("rejecting visitor");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Lookups fail open: a visitor the service has no data for, or a lookup
//! that cannot reach the service at all, is always acceptable.

// Re-export core types
pub use httpbl_core::*;

// Re-export client
pub use httpbl_client::{DnsResolver, HttpblClient, HttpblClientBuilder, PolicyConfig, Resolve};

// Re-export runtime for convenience
pub use serde;
pub use tokio;
