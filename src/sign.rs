use std::fmt;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use time::{OffsetDateTime, UtcOffset};
use tracing::debug;

use crate::clock::Clock;
use crate::configs::Credentials;
use crate::consts::{ALGORITHM, AMZ_DATE, CONTENT_TYPE, CT_VALUE, HOST, METHOD, SCOPE_TERMINATOR, SIGNED_HEADERS};

type HmacSha256 = Hmac<Sha256>;

/// The signing instant, kept as the `x-amz-date` string so the canonical request,
/// the credential scope and the outgoing header all read the same bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
  amz_date: String,
}

impl Timestamp {
  pub fn from_datetime(dt: OffsetDateTime) -> Self {
    let utc = dt.to_offset(UtcOffset::UTC);
    let amz_date = format!(
      "{:04}{:02}{:02}T{:02}{:02}{:02}Z",
      utc.year(),
      u8::from(utc.month()),
      utc.day(),
      utc.hour(),
      utc.minute(),
      utc.second()
    );

    Self { amz_date }
  }

  /// Accepts the ISO 8601 basic form, `YYYYMMDDTHHMMSSZ`.
  pub fn parse(amz_date: &str) -> Result<Self> {
    let b = amz_date.as_bytes();
    let well_formed = b.len() == 16
      && b[8] == b'T'
      && b[15] == b'Z'
      && b[..8].iter().chain(&b[9..15]).all(u8::is_ascii_digit);

    if !well_formed {
      return Err(anyhow!("invalid amz date: {:?}", amz_date));
    }

    Ok(Self {
      amz_date: amz_date.to_owned(),
    })
  }

  pub fn amz_date(&self) -> &str {
    &self.amz_date
  }

  /// `YYYYMMDD`, the first 8 characters of the amz date.
  pub fn date_stamp(&self) -> &str {
    &self.amz_date[..8]
  }
}

/// Everything that pins one signing operation apart from the body and the time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningContext {
  pub region: String,
  pub service: String,
  pub operation: String,
  pub host: String,
}

impl SigningContext {
  pub fn new(region: &str, service: &str, operation: &str, host: &str) -> Self {
    Self {
      region: region.to_owned(),
      service: service.to_owned(),
      operation: operation.to_owned(),
      host: host.to_owned(),
    }
  }
}

/// Header values the transport attaches next to `content-type: application/xml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
  pub authorization: String,
  pub host: String,
  pub amz_date: String,
}

impl SignedRequest {
  /// Attach `content-type`, `host`, `x-amz-date` and `authorization` to `req`.
  ///
  /// The body of `req` must be the exact bytes that were signed.
  pub fn apply<T>(&self, req: &mut http::Request<T>) -> std::result::Result<(), http::header::InvalidHeaderValue> {
    use http::header::{self, HeaderValue};

    let headers = req.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(CT_VALUE));
    headers.insert(header::HOST, HeaderValue::from_str(&self.host)?);
    headers.insert(AMZ_DATE, HeaderValue::from_str(&self.amz_date)?);
    headers.insert(header::AUTHORIZATION, HeaderValue::from_str(&self.authorization)?);

    Ok(())
  }
}

pub struct Signer {
  credentials: Credentials,
  clock: Arc<dyn Clock>,
}

impl Signer {
  pub fn new(credentials: Credentials, clock: Arc<dyn Clock>) -> Self {
    Self { credentials, clock }
  }

  /// Sign `body` for `ctx` at the clock's current instant.
  pub fn sign(&self, ctx: &SigningContext, body: &[u8]) -> SignedRequest {
    let ts = Timestamp::from_datetime(self.clock.now());
    sign_at(&self.credentials, ctx, &ts, body)
  }
}

impl fmt::Debug for Signer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Signer")
      .field("credentials", &self.credentials)
      .finish_non_exhaustive()
  }
}

pub fn sign_at(creds: &Credentials, ctx: &SigningContext, ts: &Timestamp, body: &[u8]) -> SignedRequest {
  let scope = credential_scope(ts.date_stamp(), &ctx.region, &ctx.service);
  let canonical_request = canonical_request(ctx, ts.amz_date(), body);
  let string_to_sign = string_to_sign(ts.amz_date(), &scope, &canonical_request);

  debug!(scope = %scope, host = %ctx.host, operation = %ctx.operation, "signing request");

  let sign_key = derive_sign_key(creds.secret_key(), ts.date_stamp(), &ctx.region, &ctx.service);
  let signature = hex::encode(hs256(&sign_key, &string_to_sign));

  let authorization = format!(
    "{} Credential={}/{}, SignedHeaders={}, Signature={}",
    ALGORITHM,
    creds.access_key_id(),
    scope,
    SIGNED_HEADERS,
    signature
  );

  SignedRequest {
    authorization,
    host: ctx.host.clone(),
    amz_date: ts.amz_date().to_owned(),
  }
}

pub fn credential_scope(date_stamp: &str, region: &str, service: &str) -> String {
  format!("{}/{}/{}/{}", date_stamp, region, service, SCOPE_TERMINATOR)
}

/// Sorted by name and newline terminated; the names match `SIGNED_HEADERS`.
pub fn canonical_headers(host: &str, amz_date: &str) -> String {
  format!(
    "{}:{}\n{}:{}\n{}:{}\n",
    CONTENT_TYPE, CT_VALUE, HOST, host, AMZ_DATE, amz_date
  )
}

pub fn canonical_request(ctx: &SigningContext, amz_date: &str, body: &[u8]) -> String {
  // never any query parameters
  let canonical_query_string = "";

  format!(
    "{}\n/{}\n{}\n{}\n{}\n{}",
    METHOD,
    ctx.operation,
    canonical_query_string,
    canonical_headers(&ctx.host, amz_date),
    SIGNED_HEADERS,
    hex_sha256(body)
  )
}

pub fn string_to_sign(amz_date: &str, scope: &str, canonical_request: &str) -> String {
  format!(
    "{}\n{}\n{}\n{}",
    ALGORITHM,
    amz_date,
    scope,
    hex_sha256(canonical_request.as_bytes())
  )
}

pub fn hex_sha256(data: &[u8]) -> String {
  format!("{:x}", Sha256::digest(data))
}

/// kDate -> kRegion -> kService -> kSigning. Never cache the result: it is only
/// valid for one day, region and service.
pub fn derive_sign_key(secret: &str, date_stamp: &str, region: &str, service: &str) -> Vec<u8> {
  let k_date = {
    let mut k_init = "AWS4".to_owned();
    k_init.push_str(secret);
    hs256(k_init.as_bytes(), date_stamp)
  };
  let k_region = hs256(&k_date, region);
  let k_service = hs256(&k_region, service);
  hs256(&k_service, SCOPE_TERMINATOR)
}

fn hs256(key: &[u8], data: &str) -> Vec<u8> {
  let mut h = HmacSha256::new_from_slice(key).expect("HMAC takes keys of any length");
  h.update(data.as_bytes());
  h.finalize().into_bytes().to_vec()
}
