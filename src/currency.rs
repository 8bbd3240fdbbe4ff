//! Currency code validation and normalization.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A 3-letter currency code, stored uppercased.
///
/// Parsing trims surrounding whitespace, requires exactly three characters,
/// and uppercases the result: `"usd"` and `" eur "` both parse, `"Bad
/// String"` does not. The same validation runs whenever a client's base
/// currency is reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// The code as an uppercase string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CurrencyCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if code.chars().count() != 3 {
            return Err(Error::InvalidArgument(format!(
                "currency code must be exactly 3 letters, got {s:?}"
            )));
        }
        Ok(CurrencyCode(code.to_uppercase()))
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uppercases() {
        let code: CurrencyCode = "usd".parse().unwrap();
        assert_eq!(code.as_str(), "USD");
    }

    #[test]
    fn test_parse_trims() {
        let code: CurrencyCode = " eur ".parse().unwrap();
        assert_eq!(code.as_str(), "EUR");
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(matches!(
            "US".parse::<CurrencyCode>(),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            "Bad String".parse::<CurrencyCode>(),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            "".parse::<CurrencyCode>(),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_display_matches_as_str() {
        let code: CurrencyCode = "gbp".parse().unwrap();
        assert_eq!(code.to_string(), "GBP");
    }
}
