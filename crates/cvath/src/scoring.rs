// crates/cvath/src/scoring.rs
use common::{Evaluation, MetricInput, Rating, Rejection, Result, ScoreResult};

/// CVATH scorer: volume turnover x ATH recovery bucket x liquidity multiplier
pub struct CvathScorer {
    rugged_ratio: f64,
    max_volume_score: f64,
}

impl CvathScorer {
    pub fn new() -> Self {
        Self {
            rugged_ratio: 0.10,
            max_volume_score: 2.0,
        }
    }

    pub fn score(&self, input: &MetricInput) -> ScoreResult {
        if input.volume < input.market_cap {
            return ScoreResult::Rejected(Rejection::InsufficientVolume);
        }

        // Checked before anything divides by market cap
        let ath_ratio = input.ath_ratio();
        if ath_ratio <= self.rugged_ratio {
            return ScoreResult::Rejected(Rejection::Rugged);
        }

        let volume_score = (input.volume / input.market_cap).min(self.max_volume_score);
        let ath_score = self.ath_score(ath_ratio);

        let liquidity_ratio = input.liquidity / input.market_cap;
        let liq_mult = self.liquidity_multiplier(liquidity_ratio);

        let score = volume_score * ath_score * liq_mult;

        ScoreResult::Evaluated(Evaluation {
            score,
            rating: Self::rating(score),
            ath_ratio,
            liquidity_ratio,
        })
    }

    fn ath_score(&self, ratio: f64) -> f64 {
        // Moderate recovery (40-70% of peak) scores best
        if ratio <= 0.20 {
            0.3
        } else if ratio <= 0.40 {
            0.8
        } else if ratio <= 0.70 {
            1.2
        } else if ratio <= 0.85 {
            0.9
        } else {
            0.7
        }
    }

    fn liquidity_multiplier(&self, ratio: f64) -> f64 {
        if ratio < 0.02 {
            0.5
        } else if ratio < 0.05 {
            0.75
        } else if ratio > 0.12 {
            1.1
        } else {
            1.0
        }
    }

    pub fn rating(score: f64) -> Rating {
        if score >= 1.3 {
            Rating::VeryGood
        } else if score >= 0.9 {
            Rating::Good
        } else if score >= 0.6 {
            Rating::Borderline
        } else {
            Rating::Bad
        }
    }
}

impl Default for CvathScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate the four metrics and score them.
///
/// Fails only on malformed input (negative, non-finite, or a zero ATH).
pub fn evaluate(market_cap: f64, volume: f64, ath_market_cap: f64, liquidity: f64) -> Result<ScoreResult> {
    let input = MetricInput::new(market_cap, volume, ath_market_cap, liquidity)?;
    Ok(CvathScorer::new().score(&input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::Error;

    fn evaluated(result: ScoreResult) -> Evaluation {
        match result {
            ScoreResult::Evaluated(eval) => eval,
            ScoreResult::Rejected(r) => panic!("unexpected rejection: {}", r),
        }
    }

    #[test]
    fn test_reference_example() {
        let eval = evaluated(evaluate(500_000.0, 1_200_000.0, 2_000_000.0, 60_000.0).unwrap());

        assert_eq!(eval.ath_ratio, 0.25);
        // 0.12 sits on the boundary and keeps the neutral multiplier
        assert_eq!(eval.liquidity_ratio, 0.12);
        assert!((eval.score - 1.6).abs() < 1e-12);
        assert_eq!(eval.rating, Rating::VeryGood);
    }

    #[test]
    fn test_low_volume_always_rejected() {
        let cases = [
            (1000.0, 999.0, 2000.0, 500.0),
            (1000.0, 0.0, 1000.0, 0.0),
            // would also be rugged, volume check wins
            (100.0, 50.0, 10_000.0, 10.0),
            (5_000_000.0, 4_999_999.0, 6_000_000.0, 1_000_000.0),
        ];

        for (mc, vol, ath, lp) in cases {
            assert_eq!(
                evaluate(mc, vol, ath, lp).unwrap(),
                ScoreResult::Rejected(Rejection::InsufficientVolume),
                "mc={} vol={}", mc, vol
            );
        }
    }

    #[test]
    fn test_rugged_threshold() {
        // exactly 10% of ATH is rugged
        assert_eq!(
            evaluate(100.0, 500.0, 1000.0, 50.0).unwrap(),
            ScoreResult::Rejected(Rejection::Rugged)
        );
        assert_eq!(
            evaluate(10.0, 500.0, 1000.0, 50.0).unwrap(),
            ScoreResult::Rejected(Rejection::Rugged)
        );
        assert!(!evaluate(101.0, 500.0, 1000.0, 50.0).unwrap().is_rejected());
    }

    #[test]
    fn test_zero_market_cap_is_rugged_not_nan() {
        assert_eq!(
            evaluate(0.0, 0.0, 1000.0, 0.0).unwrap(),
            ScoreResult::Rejected(Rejection::Rugged)
        );
    }

    #[test]
    fn test_zero_ath_is_invalid_input() {
        assert!(matches!(
            evaluate(1000.0, 2000.0, 0.0, 100.0),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_scale_invariance() {
        let base = evaluated(evaluate(1000.0, 2000.0, 5000.0, 200.0).unwrap());
        let doubled = evaluated(evaluate(2000.0, 4000.0, 10_000.0, 400.0).unwrap());
        assert_eq!(base, doubled);

        for k in [3.0, 7.0, 1000.0, 1_000_000.0] {
            let scaled = evaluated(evaluate(1000.0 * k, 2000.0 * k, 5000.0 * k, 200.0 * k).unwrap());
            assert_eq!(base.score, scaled.score, "k={}", k);
            assert_eq!(base.rating, scaled.rating, "k={}", k);
        }
    }

    #[test]
    fn test_ath_buckets_belong_to_lower_edge() {
        let scorer = CvathScorer::new();
        assert_eq!(scorer.ath_score(0.15), 0.3);
        assert_eq!(scorer.ath_score(0.20), 0.3);
        assert_eq!(scorer.ath_score(0.21), 0.8);
        assert_eq!(scorer.ath_score(0.40), 0.8);
        assert_eq!(scorer.ath_score(0.55), 1.2);
        assert_eq!(scorer.ath_score(0.70), 1.2);
        assert_eq!(scorer.ath_score(0.85), 0.9);
        assert_eq!(scorer.ath_score(0.86), 0.7);
        assert_eq!(scorer.ath_score(1.50), 0.7);
    }

    #[test]
    fn test_liquidity_multiplier() {
        let scorer = CvathScorer::new();
        assert_eq!(scorer.liquidity_multiplier(0.0), 0.5);
        assert_eq!(scorer.liquidity_multiplier(0.019), 0.5);
        assert_eq!(scorer.liquidity_multiplier(0.02), 0.75);
        assert_eq!(scorer.liquidity_multiplier(0.049), 0.75);
        assert_eq!(scorer.liquidity_multiplier(0.05), 1.0);
        assert_eq!(scorer.liquidity_multiplier(0.12), 1.0);
        assert_eq!(scorer.liquidity_multiplier(0.13), 1.1);
    }

    #[test]
    fn test_rating_boundaries_inclusive() {
        assert_eq!(CvathScorer::rating(2.2), Rating::VeryGood);
        assert_eq!(CvathScorer::rating(1.3), Rating::VeryGood);
        assert_eq!(CvathScorer::rating(1.29), Rating::Good);
        assert_eq!(CvathScorer::rating(0.9), Rating::Good);
        assert_eq!(CvathScorer::rating(0.89), Rating::Borderline);
        assert_eq!(CvathScorer::rating(0.6), Rating::Borderline);
        assert_eq!(CvathScorer::rating(0.599), Rating::Bad);
        assert_eq!(CvathScorer::rating(0.0), Rating::Bad);
    }

    #[test]
    fn test_volume_score_capped() {
        // 10x turnover scores the same as 2x
        let capped = evaluated(evaluate(1000.0, 10_000.0, 2000.0, 100.0).unwrap());
        let at_cap = evaluated(evaluate(1000.0, 2000.0, 2000.0, 100.0).unwrap());
        assert_eq!(capped.score, at_cap.score);
        // 2 x 1.2 x 1.0
        assert!((capped.score - 2.4).abs() < 1e-12);
    }

    #[test]
    fn test_thin_liquidity_drags_rating() {
        // 1x turnover, 30% of ATH, 1% liquidity: 1 x 0.8 x 0.5
        let eval = evaluated(evaluate(300.0, 300.0, 1000.0, 3.0).unwrap());
        assert!((eval.score - 0.4).abs() < 1e-12);
        assert_eq!(eval.rating, Rating::Bad);
    }
}
