use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Quote currency every searched pair is expressed in.
pub const QUOTE_SUFFIX: &str = "USD";

/// Label shown for symbols that are not in [`PRESETS`].
pub const FALLBACK_NAME: &str = "Cryptocurrency";

/// Uppercase, non-empty instrument ticker such as `BTCUSD`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Builds a symbol from an already formed ticker, uppercasing it.
    pub fn new(raw: impl AsRef<str>) -> ChartResult<Self> {
        let raw = raw.as_ref();
        if raw.trim().is_empty() {
            return Err(ChartError::EmptySymbol);
        }
        Ok(Self(raw.to_uppercase()))
    }

    /// Normalizes free-text search input into a USD pair.
    ///
    /// Returns `None` for blank input. The text itself is not trimmed, only
    /// checked for content, so `"eth"` becomes `ETHUSD` and `"btcusd"` stays
    /// `BTCUSD`.
    pub fn from_search(input: &str) -> Option<Self> {
        if input.trim().is_empty() {
            return None;
        }
        let upper = input.to_uppercase();
        if upper.ends_with(QUOTE_SUFFIX) {
            Some(Self(upper))
        } else {
            Some(Self(format!("{upper}{QUOTE_SUFFIX}")))
        }
    }

    /// For tickers known to be well formed at compile time.
    pub(crate) fn from_static(ticker: &'static str) -> Self {
        Self(ticker.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human readable name from the preset list, or [`FALLBACK_NAME`].
    pub fn display_name(&self) -> &'static str {
        Preset::find(self.as_str())
            .map(|p| p.name)
            .unwrap_or(FALLBACK_NAME)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Symbol {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Symbol::new(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}

/// Quick-select entry rendered as a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub symbol: &'static str,
    pub name: &'static str,
}

pub const PRESETS: &[Preset] = &[
    Preset { symbol: "BTCUSD", name: "Bitcoin" },
    Preset { symbol: "ETHUSD", name: "Ethereum" },
    Preset { symbol: "BNBUSD", name: "BNB" },
    Preset { symbol: "SOLUSD", name: "Solana" },
    Preset { symbol: "ADAUSD", name: "Cardano" },
    Preset { symbol: "XRPUSD", name: "XRP" },
    Preset { symbol: "DOTUSD", name: "Polkadot" },
    Preset { symbol: "AVAXUSD", name: "Avalanche" },
];

impl Preset {
    /// Exact-match lookup by ticker.
    pub fn find(symbol: &str) -> Option<&'static Preset> {
        PRESETS.iter().find(|p| p.symbol == symbol)
    }

    pub fn to_symbol(&self) -> Symbol {
        Symbol::from_static(self.symbol)
    }
}
