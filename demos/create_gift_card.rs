use anyhow::Result;
use tracing_subscriber::EnvFilter;

use agcod::{Client, Configuration};

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let client = Client::new(Configuration::auto()?)?;
  let card = client.create_gift_card(10.0, "EUR")?;

  println!("{:?}", card);
  Ok(())
}
