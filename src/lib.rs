//! Client for the [exchangeratesapi.io](https://exchangeratesapi.io)
//! currency exchange rate API.
//!
//! [`ExchangeRateClient`] fetches the latest rates or historical rates
//! (single date or date range) relative to a configured base currency,
//! optionally filtered to a set of currency symbols and optionally decoded
//! from JSON. Identical calls are served from a small per-operation LRU
//! cache instead of hitting the network again.
//!
//! ```no_run
//! # async fn demo() -> Result<(), ratesio::Error> {
//! use ratesio::ExchangeRateClient;
//!
//! let client = ExchangeRateClient::new("usd")?;
//! let response = client.latest(None, None, true).await?;
//! println!("{:?}", response.as_json());
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod client;
pub mod currency;
pub mod error;
pub mod response;
pub mod url;

pub use client::ExchangeRateClient;
pub use currency::CurrencyCode;
pub use error::Error;
pub use response::{RawResponse, Response};
