//! Amazon Incentives (AGCOD) gift card API client.
//!
//! Requests are signed with AWS Signature Version 4 for the single case the API
//! needs: a `POST` with an empty query string and exactly the `content-type`,
//! `host` and `x-amz-date` headers signed.
//!
//! ```
//! use std::sync::Arc;
//!
//! use agcod::{Credentials, Signer, SigningContext, SystemClock};
//!
//! let signer = Signer::new(Credentials::new("AKIDTEST", "secretkey"), Arc::new(SystemClock));
//! let ctx = SigningContext::new("eu-west-1", "AGCODService", "CreateGiftCard", "agcod-v2-eu-gamma.amazon.com");
//! let signed = signer.sign(&ctx, b"<CreateGiftCardRequest/>");
//!
//! assert!(signed.authorization.starts_with("AWS4-HMAC-SHA256 Credential=AKIDTEST/"));
//! let credential = signed.authorization.split(", ").next().unwrap();
//! assert_eq!(Some(&signed.amz_date[..8]), credential.split('/').nth(1));
//! ```

pub mod client;
pub mod clock;
pub mod configs;
pub mod consts;
pub mod error;
pub mod payload;
pub mod response;
pub mod sign;

pub use client::Client;
pub use clock::{Clock, FixedClock, SystemClock};
pub use configs::{Configuration, Credentials};
pub use error::{Error, XmlError};
pub use payload::Operation;
pub use sign::{sign_at, SignedRequest, Signer, SigningContext, Timestamp};
