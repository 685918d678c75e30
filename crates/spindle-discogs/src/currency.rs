// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DiscogsError;

/// Currencies accepted by the Discogs marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Gbp,
    Eur,
    Cad,
    Aud,
    Jpy,
    Chf,
    Mxn,
    Brl,
    Nzd,
    Sek,
    Zar,
}

impl Currency {
    pub const ALL: [Currency; 12] = [
        Currency::Usd,
        Currency::Gbp,
        Currency::Eur,
        Currency::Cad,
        Currency::Aud,
        Currency::Jpy,
        Currency::Chf,
        Currency::Mxn,
        Currency::Brl,
        Currency::Nzd,
        Currency::Sek,
        Currency::Zar,
    ];

    /// Three-letter code sent as `curr_abbr`.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Eur => "EUR",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
            Currency::Jpy => "JPY",
            Currency::Chf => "CHF",
            Currency::Mxn => "MXN",
            Currency::Brl => "BRL",
            Currency::Nzd => "NZD",
            Currency::Sek => "SEK",
            Currency::Zar => "ZAR",
        }
    }
}

impl FromStr for Currency {
    type Err = DiscogsError;

    /// Codes are matched exactly. An empty string selects USD.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Currency::Usd);
        }

        Currency::ALL
            .into_iter()
            .find(|currency| currency.code() == s)
            .ok_or_else(|| DiscogsError::CurrencyNotSupported(s.to_string()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
