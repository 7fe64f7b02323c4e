use time::OffsetDateTime;

/// Source of the signing instant.
///
/// The signer reads the clock exactly once per request, so a frozen clock makes
/// every intermediate string reproducible.
pub trait Clock: Send + Sync {
  fn now(&self) -> OffsetDateTime;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> OffsetDateTime {
    OffsetDateTime::now_utc()
  }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
  fn now(&self) -> OffsetDateTime {
    self.0
  }
}
