use anyhow::{anyhow, Context, Result};
use std::env::var;
use std::fmt;
use std::fs::read_to_string;
use std::path::PathBuf;
use std::time::Duration;

use crate::consts::{DEFAULT_REGION, EU_SANDBOX_URL, SERVICE_NAME};
use crate::sign::SigningContext;

const PROF_KEY: &str = "access_key";
const PROF_SECRET: &str = "secret_key";
const PROF_PARTNER: &str = "partner_id";
const PROF_REGION: &str = "region";
const PROF_ENDPOINT: &str = "endpoint";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
  access_key_id: String,
  secret_key: String,
}

impl Credentials {
  pub fn new(access_key_id: &str, secret_key: &str) -> Self {
    Self {
      access_key_id: access_key_id.to_owned(),
      secret_key: secret_key.to_owned(),
    }
  }

  pub fn access_key_id(&self) -> &str {
    &self.access_key_id
  }

  pub(crate) fn secret_key(&self) -> &str {
    &self.secret_key
  }
}

impl fmt::Debug for Credentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Credentials")
      .field("access_key_id", &self.access_key_id)
      .field("secret_key", &"** redacted **")
      .finish()
  }
}

#[derive(Debug, Clone)]
pub struct Configuration {
  pub region: String,
  pub service: String,
  /// Base URL, e.g. `https://agcod-v2-eu-gamma.amazon.com`.
  pub endpoint: String,
  pub partner_id: String,
  pub credentials: Credentials,
  pub timeout: Duration,
}

impl Configuration {
  pub fn from_static(region: &str, endpoint: &str, partner_id: &str, credentials: Credentials) -> Self {
    Self {
      region: region.to_owned(),
      service: SERVICE_NAME.to_owned(),
      endpoint: endpoint.trim_end_matches('/').to_owned(),
      partner_id: partner_id.to_owned(),
      credentials,
      timeout: DEFAULT_TIMEOUT,
    }
  }

  /// Precedence:
  ///   env vars (AGCOD_ACCESS_KEY, AGCOD_SECRET_KEY, AGCOD_PARTNER_ID)
  ///   profile (AGCOD_PROFILE) in ~/.agcod/config
  ///   default profile
  pub fn auto() -> Result<Self> {
    if let Ok(c) = Self::from_env() {
      Ok(c)
    } else if let Ok(c) = Self::from_profile_env() {
      Ok(c)
    } else if let Ok(c) = Self::from_profile_static("default") {
      Ok(c)
    } else {
      Err(anyhow!("failed to find configuration automatically"))
    }
  }

  pub fn from_env() -> Result<Self> {
    Self::from_lookup(|k| var(k).ok())
  }

  /// `AGCOD_ACCESS_KEY` and `AGCOD_SECRET_KEY` fall back to the bare `ACCESS_KEY`
  /// and `SECRET_KEY`. Region and endpoint default to the EU sandbox.
  pub fn from_lookup<F>(get: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let required = |primary: &str, fallback: Option<&str>| {
      // an empty value counts as unset
      get(primary)
        .filter(|v| !v.is_empty())
        .or_else(|| fallback.and_then(&get).filter(|v| !v.is_empty()))
        .ok_or_else(|| anyhow!("environment variable {} is not set", primary))
    };

    let key = required("AGCOD_ACCESS_KEY", Some("ACCESS_KEY"))?;
    let secret = required("AGCOD_SECRET_KEY", Some("SECRET_KEY"))?;
    let partner_id = required("AGCOD_PARTNER_ID", None)?;
    let region = get("AGCOD_REGION").unwrap_or_else(|| DEFAULT_REGION.to_owned());
    let endpoint = get("AGCOD_ENDPOINT").unwrap_or_else(|| EU_SANDBOX_URL.to_owned());

    Ok(Self::from_static(
      &region,
      &endpoint,
      &partner_id,
      Credentials::new(&key, &secret),
    ))
  }

  pub fn from_profile_static(profile: &str) -> Result<Self> {
    let path = path()?;
    let raw = read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))?;
    Self::from_profile_str(&raw, profile)
  }

  pub fn from_profile_env() -> Result<Self> {
    let p = var("AGCOD_PROFILE")?;
    Self::from_profile_static(&p)
  }

  /// Parse one `[profile]` section of an ini-style config:
  ///
  /// ```text
  /// [default]
  /// access_key = AKID...
  /// secret_key = ...
  /// partner_id = Appin
  /// region = eu-west-1
  /// endpoint = https://agcod-v2-eu-gamma.amazon.com
  /// ```
  pub fn from_profile_str(raw: &str, profile: &str) -> Result<Self> {
    let profile_line = format!("[{}]", profile);
    let mut profile_found = false;
    let mut key = None;
    let mut secret = None;
    let mut partner_id = None;
    let mut region = None;
    let mut endpoint = None;

    for line in raw.lines().map(str::trim) {
      if line.starts_with('[') {
        if profile_found {
          // the next section ends ours
          break;
        }

        if line == profile_line {
          profile_found = true;
        }
        continue;
      }

      if !profile_found {
        continue;
      }

      if let Some((k, v)) = line.split_once('=') {
        let v = Some(v.trim().to_owned());
        match k.trim() {
          PROF_KEY => key = v,
          PROF_SECRET => secret = v,
          PROF_PARTNER => partner_id = v,
          PROF_REGION => region = v,
          PROF_ENDPOINT => endpoint = v,
          _ => {}
        }
      }
    }

    if !profile_found {
      return Err(anyhow!("profile {} not found in config", profile));
    }

    let key = key.ok_or_else(|| anyhow!("{} not found for profile", PROF_KEY))?;
    let secret = secret.ok_or_else(|| anyhow!("{} not found for profile", PROF_SECRET))?;
    let partner_id = partner_id.ok_or_else(|| anyhow!("{} not found for profile", PROF_PARTNER))?;

    Ok(Self::from_static(
      region.as_deref().unwrap_or(DEFAULT_REGION),
      endpoint.as_deref().unwrap_or(EU_SANDBOX_URL),
      &partner_id,
      Credentials::new(&key, &secret),
    ))
  }

  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }

  /// The endpoint without its scheme, as sent in the `host` header.
  pub fn host(&self) -> &str {
    let rest = self
      .endpoint
      .split_once("://")
      .map_or(self.endpoint.as_str(), |(_, rest)| rest);
    rest.trim_end_matches('/')
  }

  pub fn url(&self, operation: &str) -> String {
    format!("{}/{}", self.endpoint, operation)
  }

  pub fn context(&self, operation: &str) -> SigningContext {
    SigningContext::new(&self.region, &self.service, operation, self.host())
  }
}

#[cfg(target_os = "windows")]
fn path() -> Result<PathBuf> {
  let mut config = PathBuf::from(var("HOMEPATH")?);
  config.push(".agcod");
  config.push("config");
  Ok(config)
}

#[cfg(not(target_os = "windows"))]
fn path() -> Result<PathBuf> {
  let mut config = PathBuf::from(var("HOME")?);
  config.push(".agcod");
  config.push("config");
  Ok(config)
}
