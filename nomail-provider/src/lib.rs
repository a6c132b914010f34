//! # nomail-provider
//!
//! Cloudflare DNS API client for the `nomail` domain-hardening tool.
//!
//! The crate exposes a small, object-safe [`DnsProvider`] trait covering the
//! zone and record operations the reconciler needs (zone lookup by name,
//! filtered record listing, record CRUD), plus the concrete
//! [`CloudflareProvider`] implementation. Only TXT and MX records are
//! modeled; nothing else is touched by the tool.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use nomail_provider::{CloudflareProvider, DnsProvider};
//!
//! # async fn example() -> nomail_provider::Result<()> {
//! let provider = CloudflareProvider::new("your-api-token".to_string());
//! let zone = provider.find_zone("example.com").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## TLS Backend
//!
//! - **`native-tls`** *(default)* — platform TLS implementation.
//! - **`rustls`** — rustls; recommended for cross-compilation.

mod cloudflare;
mod error;
pub mod name;
mod traits;
mod types;

pub use cloudflare::CloudflareProvider;
pub use error::{ProviderError, Result};
pub use traits::DnsProvider;
pub use types::{DnsRecord, DnsRecordType, RecordData, RecordSpec, Zone};
