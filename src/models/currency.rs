//! Currency formatting
//!
//! Formats [`Money`] with a leading symbol and locale grouping. KRW has no
//! minor unit, so it is always rendered with zero fraction digits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// Supported display currencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// South Korean won (default)
    #[default]
    Krw,
    /// US dollar
    Usd,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Krw => "KRW",
            Self::Usd => "USD",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Krw => "₩",
            Self::Usd => "$",
        }
    }

    /// Number of fraction digits shown when formatting
    pub fn fraction_digits(&self) -> usize {
        match self {
            Self::Krw => 0,
            Self::Usd => 2,
        }
    }

    /// Format an amount, e.g. `₩15,000,000` or `$1,200.00`
    pub fn format(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let fraction = match self.fraction_digits() {
            0 => String::new(),
            n => format!(".{}", "0".repeat(n)),
        };
        format!("{}{}{}{}", sign, self.symbol(), amount.grouped_digits(), fraction)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "KRW" | "₩" => Ok(Self::Krw),
            "USD" | "$" => Ok(Self::Usd),
            other => Err(format!("Unsupported currency: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_krw() {
        let krw = Currency::Krw;
        assert_eq!(krw.format(Money::from_units(15_000_000)), "₩15,000,000");
        assert_eq!(krw.format(Money::from_units(10_000_000)), "₩10,000,000");
        assert_eq!(krw.format(Money::from_units(80_000)), "₩80,000");
        assert_eq!(krw.format(Money::zero()), "₩0");
        assert_eq!(krw.format(Money::from_units(-5_000)), "-₩5,000");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(Currency::Usd.format(Money::from_units(1200)), "$1,200.00");
    }

    #[test]
    fn test_parse_code() {
        assert_eq!("krw".parse::<Currency>().unwrap(), Currency::Krw);
        assert_eq!("USD".parse::<Currency>().unwrap(), Currency::Usd);
        assert!("EUR".parse::<Currency>().is_err());
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Currency::Krw).unwrap(), "\"KRW\"");
        let c: Currency = serde_json::from_str("\"USD\"").unwrap();
        assert_eq!(c, Currency::Usd);
    }
}
