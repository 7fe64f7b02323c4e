use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::XmlError;

/// Parse a response body. The root element name is not checked.
pub fn from_xml<T: DeserializeOwned>(xml: &str) -> Result<T, XmlError> {
  Ok(quick_xml::de::from_str(xml)?)
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGiftCardResponse {
  pub creation_request_id: String,
  pub gc_id: String,
  pub gc_claim_code: String,
  pub status: String,
  #[serde(default)]
  pub gc_expiration_date: Option<String>,
  pub card_info: CardInfo,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInfo {
  #[serde(default)]
  pub card_status: Option<String>,
  pub value: MoneyAmount,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyAmount {
  pub amount: f64,
  pub currency_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelGiftCardResponse {
  pub creation_request_id: String,
  pub gc_id: String,
  pub status: String,
}

impl CreateGiftCardResponse {
  pub fn is_success(&self) -> bool {
    self.status == "SUCCESS"
  }
}

impl CancelGiftCardResponse {
  pub fn is_success(&self) -> bool {
    self.status == "SUCCESS"
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_create_response() {
    let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<CreateGiftCardResponse>
  <cardInfo>
    <cardStatus>Fulfilled</cardStatus>
    <value>
      <amount>10.0</amount>
      <currencyCode>EUR</currencyCode>
    </value>
  </cardInfo>
  <creationRequestId>Appin_0001</creationRequestId>
  <gcClaimCode>ABCD-EFGHIJ-KLMN</gcClaimCode>
  <gcId>A2GCN9BRX5QS76</gcId>
  <status>SUCCESS</status>
</CreateGiftCardResponse>"#;

    let resp: CreateGiftCardResponse = from_xml(xml).unwrap();
    assert!(resp.is_success());
    assert_eq!("Appin_0001", resp.creation_request_id);
    assert_eq!("A2GCN9BRX5QS76", resp.gc_id);
    assert_eq!("ABCD-EFGHIJ-KLMN", resp.gc_claim_code);
    assert_eq!(None, resp.gc_expiration_date);
    assert_eq!(Some("Fulfilled".to_owned()), resp.card_info.card_status);
    assert_eq!(10.0, resp.card_info.value.amount);
    assert_eq!("EUR", resp.card_info.value.currency_code);
  }

  #[test]
  fn test_parse_cancel_response() {
    let xml = "<CancelGiftCardResponse>\
               <creationRequestId>Appin_0001</creationRequestId>\
               <gcId>A2GCN9BRX5QS76</gcId>\
               <status>SUCCESS</status>\
               </CancelGiftCardResponse>";

    let resp: CancelGiftCardResponse = from_xml(xml).unwrap();
    assert!(resp.is_success());
    assert_eq!("A2GCN9BRX5QS76", resp.gc_id);
  }

  #[test]
  fn test_parse_missing_field() {
    let xml = "<CancelGiftCardResponse><status>FAILURE</status></CancelGiftCardResponse>";
    assert!(from_xml::<CancelGiftCardResponse>(xml).is_err());
  }
}
