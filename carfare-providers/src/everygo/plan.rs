//! EveryGo vehicle plan classes.

use carfare_core::Yen;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ProviderError;

/// Vehicle plan class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EveryGoPlan {
    /// Compact cars.
    #[default]
    Entry,
    /// Standard cars.
    Basic,
    /// Mid-size cars and minivans.
    Middle,
    /// Premium cars.
    Premium,
}

/// Rates for one plan class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EveryGoRates {
    /// Weekday fee per started 15 minutes.
    pub quarter: Yen,
    /// Weekday 4-hour pack.
    pub four: Yen,
    /// 8-hour pack.
    pub eight: Yen,
    /// 16-hour pack.
    pub sixteen: Yen,
    /// Night pack.
    pub night: Yen,
    /// Extension fee per started 15 minutes beyond the 8h and 16h packs.
    pub extend: Yen,
}

impl EveryGoPlan {
    /// All plan classes, cheapest first.
    pub const ALL: [Self; 4] = [Self::Entry, Self::Basic, Self::Middle, Self::Premium];

    /// Returns the rates for this class.
    pub const fn rates(self) -> EveryGoRates {
        match self {
            Self::Entry => EveryGoRates {
                quarter: 200,
                four: 2780,
                eight: 4780,
                sixteen: 5780,
                night: 2500,
                extend: 75,
            },
            Self::Basic => EveryGoRates {
                quarter: 250,
                four: 3280,
                eight: 6080,
                sixteen: 7780,
                night: 3100,
                extend: 75,
            },
            Self::Middle => EveryGoRates {
                quarter: 300,
                four: 3780,
                eight: 6780,
                sixteen: 8780,
                night: 3700,
                extend: 96,
            },
            Self::Premium => EveryGoRates {
                quarter: 350,
                four: 4780,
                eight: 8780,
                sixteen: 9980,
                night: 4600,
                extend: 95,
            },
        }
    }

    /// Lowercase name, as used in settings and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Basic => "basic",
            Self::Middle => "middle",
            Self::Premium => "premium",
        }
    }
}

impl fmt::Display for EveryGoPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EveryGoPlan {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == name)
            .ok_or_else(|| ProviderError::UnknownPlan {
                provider: "everygo",
                name: s.to_string(),
            })
    }
}
