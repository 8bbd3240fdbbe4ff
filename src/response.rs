//! Response representations.

use std::borrow::Cow;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Error;

/// What a client operation returns: the raw response when no decoding was
/// requested, or the parsed JSON body.
///
/// Decoded bodies are passed through verbatim as [`Value`]; the shape of
/// `rates` is whatever the remote service sent.
#[derive(Debug, Clone)]
pub enum Response {
    /// The raw response handle.
    Raw(RawResponse),
    /// The decoded JSON body.
    Json(Value),
}

impl Response {
    /// The decoded body, if decoding was requested.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Response::Json(value) => Some(value),
            Response::Raw(_) => None,
        }
    }

    /// The raw response, if no decoding was requested.
    pub fn as_raw(&self) -> Option<&RawResponse> {
        match self {
            Response::Raw(raw) => Some(raw),
            Response::Json(_) => None,
        }
    }
}

/// A completed HTTP response: status plus body bytes, detached from the
/// connection so it can be cloned in and out of the cache.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// The HTTP status, always 200 or 201 for responses handed back by the
    /// client.
    pub status: StatusCode,
    /// The response body.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Deserializes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// The body as text, lossily converted.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(body: &str) -> RawResponse {
        RawResponse {
            status: StatusCode::OK,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_raw_json_decodes_body() {
        let raw = raw(r#"{"base":"USD","rates":{"EUR":0.9}}"#);
        let value: Value = raw.json().unwrap();
        assert_eq!(value["base"], "USD");
        assert_eq!(value["rates"]["EUR"], 0.9);
    }

    #[test]
    fn test_raw_json_rejects_garbage() {
        assert!(matches!(
            raw("not json").json::<Value>(),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn test_response_accessors() {
        let response = Response::Raw(raw("{}"));
        assert!(response.as_raw().is_some());
        assert!(response.as_json().is_none());

        let response = Response::Json(Value::Null);
        assert!(response.as_json().is_some());
        assert!(response.as_raw().is_none());
    }
}
