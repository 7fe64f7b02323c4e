use std::io;

/// Failures at the API boundary. Signing itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// The service could not recompute our signature (clock skew, wrong secret,
  /// body changed after signing). Never retried.
  #[error("authentication rejected ({status}): {body}")]
  AuthenticationRejected { status: u16, body: String },

  #[error("unexpected status {status}: {body}")]
  Status { status: u16, body: String },

  #[error("transport error: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("invalid request: {0}")]
  Request(#[from] http::Error),

  #[error("invalid header value: {0}")]
  Header(#[from] http::header::InvalidHeaderValue),

  #[error("invalid amount: {0}")]
  InvalidAmount(f64),

  #[error(transparent)]
  Xml(#[from] XmlError),
}

impl Error {
  /// Classify a non-200 response.
  pub fn from_status(status: u16, body: String) -> Self {
    match status {
      401 | 403 => Error::AuthenticationRejected { status, body },
      _ => Error::Status { status, body },
    }
  }
}

#[derive(Debug, thiserror::Error)]
pub enum XmlError {
  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("failed to parse response: {0}")]
  Deserialize(#[from] quick_xml::DeError),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_from_status() {
    assert!(matches!(
      Error::from_status(403, "<ErrorResponse/>".to_owned()),
      Error::AuthenticationRejected { status: 403, .. }
    ));
    assert!(matches!(
      Error::from_status(401, String::new()),
      Error::AuthenticationRejected { status: 401, .. }
    ));
    assert!(matches!(
      Error::from_status(500, String::new()),
      Error::Status { status: 500, .. }
    ));
  }

  #[test]
  fn test_display() {
    let e = Error::from_status(400, "bad".to_owned());
    assert_eq!("unexpected status 400: bad", e.to_string());
  }
}
