use std::sync::Arc;

use reqwest::StatusCode;
use tracing::{info, warn};

use crate::clock::{Clock, SystemClock};
use crate::configs::Configuration;
use crate::error::Error;
use crate::payload::{CancelGiftCardRequest, CreateGiftCardRequest, Operation};
use crate::response::{from_xml, CancelGiftCardResponse, CreateGiftCardResponse};
use crate::sign::Signer;

/// Blocking AGCOD client. Every call signs afresh, nothing is retried.
#[derive(Debug)]
pub struct Client {
  conf: Configuration,
  signer: Signer,
  http: reqwest::blocking::Client,
}

impl Client {
  pub fn new(conf: Configuration) -> Result<Self, Error> {
    Self::with_clock(conf, Arc::new(SystemClock))
  }

  pub fn with_clock(conf: Configuration, clock: Arc<dyn Clock>) -> Result<Self, Error> {
    let http = reqwest::blocking::Client::builder()
      .timeout(conf.timeout)
      .build()?;
    let signer = Signer::new(conf.credentials.clone(), clock);

    Ok(Self { conf, signer, http })
  }

  pub fn configuration(&self) -> &Configuration {
    &self.conf
  }

  /// A signed `POST <endpoint>/<operation>` carrying `body` unchanged.
  pub fn build_request(&self, operation: Operation, body: Vec<u8>) -> Result<http::Request<Vec<u8>>, Error> {
    let ctx = self.conf.context(operation.as_str());
    let signed = self.signer.sign(&ctx, &body);

    let mut req = http::Request::post(self.conf.url(operation.as_str())).body(body)?;
    signed.apply(&mut req)?;

    Ok(req)
  }

  /// Send `body` and return the response text of a 200.
  pub fn send(&self, operation: Operation, body: Vec<u8>) -> Result<String, Error> {
    let req = self.build_request(operation, body)?;
    let resp = self.http.execute(reqwest::blocking::Request::try_from(req)?)?;

    let status = resp.status();
    let text = resp.text()?;

    if status != StatusCode::OK {
      warn!(%operation, status = status.as_u16(), "request failed");
      return Err(Error::from_status(status.as_u16(), text));
    }

    Ok(text)
  }

  pub fn create_gift_card(&self, amount: f64, currency_code: &str) -> Result<CreateGiftCardResponse, Error> {
    if !amount.is_finite() || amount <= 0.0 {
      return Err(Error::InvalidAmount(amount));
    }

    let req = CreateGiftCardRequest::new(&self.conf.partner_id, amount, currency_code);
    info!(creation_request_id = %req.creation_request_id, amount, currency_code, "creating gift card");

    let text = self.send(Operation::CreateGiftCard, req.to_xml()?)?;
    Ok(from_xml(&text)?)
  }

  pub fn cancel_gift_card(&self, creation_request_id: &str, gc_id: &str) -> Result<CancelGiftCardResponse, Error> {
    let req = CancelGiftCardRequest::new(&self.conf.partner_id, creation_request_id, gc_id);
    info!(creation_request_id, gc_id, "cancelling gift card");

    let text = self.send(Operation::CancelGiftCard, req.to_xml()?)?;
    Ok(from_xml(&text)?)
  }
}
