// crates/cvath/src/lib.rs
use common::*;
use serde::{Deserialize, Serialize};

pub mod scoring;
pub mod entry;
pub mod report;

pub use scoring::{evaluate, CvathScorer};
pub use entry::{plan_entries, plan_entries_for_label};
pub use report::format_money;

/// Free-text fields as typed into the panel
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawInputs {
    pub market_cap: String,
    pub volume: String,
    pub ath_market_cap: String,
    pub liquidity: String,
}

impl RawInputs {
    pub fn new(
        market_cap: impl Into<String>,
        volume: impl Into<String>,
        ath_market_cap: impl Into<String>,
        liquidity: impl Into<String>,
    ) -> Self {
        Self {
            market_cap: market_cap.into(),
            volume: volume.into(),
            ath_market_cap: ath_market_cap.into(),
            liquidity: liquidity.into(),
        }
    }

    /// Parse all four fields. A field that reads as zero counts as missing.
    pub fn parse(&self) -> Result<MetricInput> {
        let market_cap = parse_number(&self.market_cap);
        let volume = parse_number(&self.volume);
        let ath_market_cap = parse_number(&self.ath_market_cap);
        let liquidity = parse_number(&self.liquidity);

        if [market_cap, volume, ath_market_cap, liquidity].contains(&0.0) {
            return Err(Error::MissingInput);
        }

        MetricInput::new(market_cap, volume, ath_market_cap, liquidity)
    }

    pub fn clear(&mut self) {
        self.market_cap.clear();
        self.volume.clear();
        self.ath_market_cap.clear();
        self.liquidity.clear();
    }
}

/// Result of one calculation cycle, ready to render
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome")]
pub enum Outcome {
    MissingInput,
    Rejected {
        rejection: Rejection,
    },
    Scored {
        input: MetricInput,
        evaluation: Evaluation,
        mode: Mode,
        entries: EntryPlan,
        ath_dip_pct: i64,
    },
}

/// Parse, score and plan entries in one pass
pub struct Calculator {
    scorer: CvathScorer,
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            scorer: CvathScorer::new(),
        }
    }

    pub fn run(&self, raw: &RawInputs, mode: Mode) -> Result<Outcome> {
        metrics::counter!("cvath_calculations_total").increment(1);

        let input = match raw.parse() {
            Ok(input) => input,
            Err(Error::MissingInput) => return Ok(Outcome::MissingInput),
            Err(e) => return Err(e),
        };

        let outcome = self.calculate(&input, mode);

        match serde_json::to_string(&outcome) {
            Ok(json) => tracing::debug!(%json, "CVATH calculation"),
            Err(e) => tracing::debug!("Failed to serialize outcome: {}", e),
        }

        Ok(outcome)
    }

    /// Score already-validated metrics
    pub fn calculate(&self, input: &MetricInput, mode: Mode) -> Outcome {
        let evaluation = match self.scorer.score(input) {
            ScoreResult::Evaluated(eval) => eval,
            ScoreResult::Rejected(rejection) => {
                metrics::counter!("cvath_rejections_total", "reason" => rejection.reason()).increment(1);
                return Outcome::Rejected { rejection };
            }
        };

        let entries = plan_entries(input.market_cap, input.ath_market_cap, mode);

        Outcome::Scored {
            input: *input,
            evaluation,
            mode,
            entries,
            ath_dip_pct: round_half_up((1.0 - evaluation.ath_ratio) * 100.0),
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Halves round towards positive infinity (-2.5 -> -2, 2.5 -> 3)
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
