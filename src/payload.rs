//! Request bodies for the gift card operations.
//!
//! The signer hashes whatever bytes these produce, so the transport must send
//! the same `Vec<u8>` unchanged.

use std::fmt;
use std::io::{self, Write};

use quick_xml::events::BytesText;
use quick_xml::Writer;
use uuid::Uuid;

use crate::error::XmlError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
  CreateGiftCard,
  CancelGiftCard,
}

impl Operation {
  /// Path segment appended to the endpoint, also the canonical URI.
  pub fn as_str(&self) -> &'static str {
    match self {
      Operation::CreateGiftCard => "CreateGiftCard",
      Operation::CancelGiftCard => "CancelGiftCard",
    }
  }
}

impl fmt::Display for Operation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// `<partnerId>_<uuid>`; the service requires ids to start with the partner id.
pub fn creation_request_id(partner_id: &str) -> String {
  format!("{}_{}", partner_id, Uuid::new_v4().simple())
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateGiftCardRequest {
  pub creation_request_id: String,
  pub partner_id: String,
  pub amount: f64,
  pub currency_code: String,
}

impl CreateGiftCardRequest {
  pub fn new(partner_id: &str, amount: f64, currency_code: &str) -> Self {
    Self {
      creation_request_id: creation_request_id(partner_id),
      partner_id: partner_id.to_owned(),
      amount,
      currency_code: currency_code.to_owned(),
    }
  }

  pub fn to_xml(&self) -> Result<Vec<u8>, XmlError> {
    let mut buf = Vec::with_capacity(256);
    let mut writer = Writer::new(&mut buf);

    writer
      .create_element("CreateGiftCardRequest")
      .write_inner_content(|w| {
        write_text_element(w, "creationRequestId", &self.creation_request_id)?;
        write_text_element(w, "partnerId", &self.partner_id)?;
        w.create_element("value").write_inner_content(|w| {
          write_text_element(w, "currencyCode", &self.currency_code)?;
          write_text_element(w, "amount", &self.amount.to_string())
        })?;
        Ok(())
      })?;

    Ok(buf)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelGiftCardRequest {
  pub creation_request_id: String,
  pub partner_id: String,
  pub gc_id: String,
}

impl CancelGiftCardRequest {
  /// `creation_request_id` is the one the card was created with.
  pub fn new(partner_id: &str, creation_request_id: &str, gc_id: &str) -> Self {
    Self {
      creation_request_id: creation_request_id.to_owned(),
      partner_id: partner_id.to_owned(),
      gc_id: gc_id.to_owned(),
    }
  }

  pub fn to_xml(&self) -> Result<Vec<u8>, XmlError> {
    let mut buf = Vec::with_capacity(192);
    let mut writer = Writer::new(&mut buf);

    writer
      .create_element("CancelGiftCardRequest")
      .write_inner_content(|w| {
        write_text_element(w, "creationRequestId", &self.creation_request_id)?;
        write_text_element(w, "partnerId", &self.partner_id)?;
        write_text_element(w, "gcId", &self.gc_id)
      })?;

    Ok(buf)
  }
}

fn write_text_element<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> io::Result<()> {
  writer
    .create_element(tag)
    .write_text_content(BytesText::new(text))?;
  Ok(())
}
