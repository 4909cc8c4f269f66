// crates/common/src/lib.rs
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod error;
pub mod parse;
pub mod config;

pub use error::{Result, Error};
pub use parse::parse_number;
pub use config::PanelConfig;

/// Largest accepted value for any metric (one quadrillion)
pub const MAX_METRIC: f64 = 1e15;

/// Largest accepted market cap to ATH ratio
pub const MAX_ATH_RATIO: f64 = 1e6;

/// Entry strategy mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    Scalp,
    #[default]
    DipBuy,
    Momentum,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Scalp, Mode::DipBuy, Mode::Momentum];

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Scalp => "Scalp",
            Mode::DipBuy => "Dip Buy",
            Mode::Momentum => "Momentum",
        }
    }

    /// Only "Scalp" and "Momentum" are recognised; anything else is a dip buy.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Scalp" => Mode::Scalp,
            "Momentum" => Mode::Momentum,
            _ => Mode::DipBuy,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Qualitative rating of a CVATH score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    VeryGood,
    Good,
    Borderline,
    Bad,
}

impl Rating {
    pub fn label(&self) -> &'static str {
        match self {
            Rating::VeryGood => "Very Good",
            Rating::Good => "Good",
            Rating::Borderline => "Borderline",
            Rating::Bad => "Bad",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The four market metrics a calculation runs on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricInput {
    pub market_cap: f64,
    pub volume: f64,
    pub ath_market_cap: f64,
    pub liquidity: f64,
}

impl MetricInput {
    pub fn new(market_cap: f64, volume: f64, ath_market_cap: f64, liquidity: f64) -> Result<Self> {
        let fields = [
            ("market cap", market_cap),
            ("volume", volume),
            ("ATH market cap", ath_market_cap),
            ("liquidity", liquidity),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(Error::InvalidInput(format!("{} is not a finite number", name)));
            }
            if value < 0.0 {
                return Err(Error::InvalidInput(format!("{} is negative ({})", name, value)));
            }
            if value > MAX_METRIC {
                return Err(Error::InvalidInput(format!("{} is implausibly large ({:e})", name, value)));
            }
        }

        // Every ratio divides by it
        if ath_market_cap == 0.0 {
            return Err(Error::InvalidInput("ATH market cap must be greater than zero".to_string()));
        }

        if market_cap / ath_market_cap > MAX_ATH_RATIO {
            return Err(Error::InvalidInput(format!(
                "market cap is more than {:e}x its ATH",
                MAX_ATH_RATIO
            )));
        }

        Ok(Self {
            market_cap,
            volume,
            ath_market_cap,
            liquidity,
        })
    }

    pub fn ath_ratio(&self) -> f64 {
        self.market_cap / self.ath_market_cap
    }
}

/// Terminal rejection of a calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// Volume below market cap
    InsufficientVolume,
    /// Market cap at or below 10% of its ATH
    Rugged,
}

impl Rejection {
    pub fn reason(&self) -> &'static str {
        match self {
            Rejection::InsufficientVolume => "Volume < MC",
            Rejection::Rugged => "RUGGED (-90%+ ATH)",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// Successful score breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub score: f64,
    pub rating: Rating,
    pub ath_ratio: f64,
    pub liquidity_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail")]
pub enum ScoreResult {
    Rejected(Rejection),
    Evaluated(Evaluation),
}

impl ScoreResult {
    pub fn is_rejected(&self) -> bool {
        matches!(self, ScoreResult::Rejected(_))
    }
}

/// Suggested entry tiers, in the same unit as the inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntryPlan {
    pub aggressive: f64,
    pub optimal: f64,
    pub conservative: f64,
}

impl EntryPlan {
    pub fn as_array(&self) -> [f64; 3] {
        [self.aggressive, self.optimal, self.conservative]
    }
}
