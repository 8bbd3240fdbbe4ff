//! The exchangeratesapi.io client.

use std::fmt;

use chrono::NaiveDate;
use tokio::sync::Mutex;
use tracing::debug;

use crate::cache::LruCache;
use crate::currency::CurrencyCode;
use crate::error::Error;
use crate::response::{RawResponse, Response};
use crate::url::build_url;

const API_BASE: &str = "https://api.exchangeratesapi.io";

// Per-operation cache capacity.
const CACHE_CAPACITY: usize = 8;

/// The full argument tuple of a cached operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    base: CurrencyCode,
    symbols: Option<String>,
    start_at: Option<NaiveDate>,
    end_at: Option<NaiveDate>,
    decode_json: bool,
}

/// Client for the exchangeratesapi.io API.
///
/// Holds the base currency returned rates are expressed against, and one
/// small LRU response cache per operation: repeating a call with identical
/// arguments returns the cached response without another round-trip, until
/// the entry is evicted.
pub struct ExchangeRateClient {
    base_currency: CurrencyCode,
    api_base: String,
    http: reqwest::Client,
    latest_cache: Mutex<LruCache<CacheKey, Response>>,
    historical_cache: Mutex<LruCache<CacheKey, Response>>,
}

impl fmt::Debug for ExchangeRateClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExchangeRateClient(\"{}\")", self.base_currency)
    }
}

impl ExchangeRateClient {
    /// Creates a client against the production API.
    ///
    /// `base_currency` must be a 3-letter code; it is uppercased, so
    /// `"usd"` works.
    pub fn new(base_currency: &str) -> Result<Self, Error> {
        Self::with_api_base(base_currency, API_BASE)
    }

    /// Creates a client against a custom endpoint base, e.g. a mock server.
    pub fn with_api_base(base_currency: &str, api_base: &str) -> Result<Self, Error> {
        Ok(Self {
            base_currency: base_currency.parse()?,
            api_base: api_base.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            latest_cache: Mutex::new(LruCache::new(CACHE_CAPACITY)),
            historical_cache: Mutex::new(LruCache::new(CACHE_CAPACITY)),
        })
    }

    /// The configured base currency.
    pub fn base_currency(&self) -> &CurrencyCode {
        &self.base_currency
    }

    /// Replaces the base currency, re-validating the new value.
    pub fn set_base_currency(&mut self, base_currency: &str) -> Result<(), Error> {
        self.base_currency = base_currency.parse()?;
        Ok(())
    }

    /// Fetches the latest exchange rates.
    ///
    /// `base` overrides the instance's base currency for this call.
    /// `symbols` restricts the response to the given currencies, preserving
    /// their order in the request URL; an empty slice is treated as absent.
    /// With `decode_json` the parsed body is returned instead of the raw
    /// response.
    pub async fn latest(
        &self,
        base: Option<&CurrencyCode>,
        symbols: Option<&[CurrencyCode]>,
        decode_json: bool,
    ) -> Result<Response, Error> {
        let key = CacheKey {
            base: base.unwrap_or(&self.base_currency).clone(),
            symbols: join_symbols(symbols),
            start_at: None,
            end_at: None,
            decode_json,
        };
        if let Some(hit) = self.latest_cache.lock().await.get(&key) {
            return Ok(hit);
        }

        let mut params = vec![("base", key.base.as_str())];
        if let Some(symbols) = key.symbols.as_deref() {
            params.push(("symbols", symbols));
        }
        let url = build_url(&format!("{}/latest", self.api_base), &params);

        let response = self.request(&url, decode_json).await?;
        self.latest_cache.lock().await.put(key, response.clone());
        Ok(response)
    }

    /// Fetches exchange rates for `on_date`, or for the `on_date..=end_date`
    /// range when `end_date` is given.
    ///
    /// `base`, `symbols` and `decode_json` behave as in
    /// [`latest`](Self::latest).
    pub async fn historical(
        &self,
        on_date: NaiveDate,
        base: Option<&CurrencyCode>,
        end_date: Option<NaiveDate>,
        symbols: Option<&[CurrencyCode]>,
        decode_json: bool,
    ) -> Result<Response, Error> {
        let key = CacheKey {
            base: base.unwrap_or(&self.base_currency).clone(),
            symbols: join_symbols(symbols),
            start_at: Some(on_date),
            end_at: end_date,
            decode_json,
        };
        if let Some(hit) = self.historical_cache.lock().await.get(&key) {
            return Ok(hit);
        }

        // The range endpoint takes both dates as query parameters; the
        // single-date endpoint embeds the date in the path.
        let url = match end_date {
            Some(end) => {
                let start_at = format_date(on_date);
                let end_at = format_date(end);
                let mut params = vec![
                    ("start_at", start_at.as_str()),
                    ("end_at", end_at.as_str()),
                    ("base", key.base.as_str()),
                ];
                if let Some(symbols) = key.symbols.as_deref() {
                    params.push(("symbols", symbols));
                }
                build_url(&format!("{}/history", self.api_base), &params)
            }
            None => {
                let mut params = vec![("base", key.base.as_str())];
                if let Some(symbols) = key.symbols.as_deref() {
                    params.push(("symbols", symbols));
                }
                build_url(
                    &format!("{}/{}", self.api_base, format_date(on_date)),
                    &params,
                )
            }
        };

        let response = self.request(&url, decode_json).await?;
        self.historical_cache.lock().await.put(key, response.clone());
        Ok(response)
    }

    async fn request(&self, url: &str, decode_json: bool) -> Result<Response, Error> {
        debug!("Requesting rates from {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !matches!(status.as_u16(), 200 | 201) {
            return Err(Error::RemoteRequest(status));
        }

        let body = response.bytes().await?.to_vec();
        let raw = RawResponse { status, body };
        if decode_json {
            Ok(Response::Json(raw.json()?))
        } else {
            Ok(Response::Raw(raw))
        }
    }
}

fn join_symbols(symbols: Option<&[CurrencyCode]>) -> Option<String> {
    symbols.filter(|symbols| !symbols.is_empty()).map(|symbols| {
        symbols
            .iter()
            .map(CurrencyCode::as_str)
            .collect::<Vec<_>>()
            .join(",")
    })
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
