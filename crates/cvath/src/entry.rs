// crates/cvath/src/entry.rs
use common::{EntryPlan, Mode};

/// Suggested entry tiers for the selected mode.
///
/// Scalp and Momentum tiers sit just under the current cap. Dip Buy anchors
/// the aggressive tier to the current cap and the other two to the ATH, with
/// "optimal" the deeper of the two (60% vs 70% of ATH).
pub fn plan_entries(market_cap: f64, ath_market_cap: f64, mode: Mode) -> EntryPlan {
    let (aggressive, optimal, conservative) = match mode {
        Mode::Scalp => (market_cap * 0.98, market_cap * 0.92, market_cap * 0.88),
        Mode::Momentum => (market_cap * 1.0, market_cap * 0.95, market_cap * 0.90),
        Mode::DipBuy => (market_cap * 0.95, ath_market_cap * 0.60, ath_market_cap * 0.70),
    };

    EntryPlan {
        aggressive,
        optimal,
        conservative,
    }
}

/// Same as [`plan_entries`], with the mode given by its label
pub fn plan_entries_for_label(market_cap: f64, ath_market_cap: f64, mode: &str) -> EntryPlan {
    plan_entries(market_cap, ath_market_cap, Mode::from_label(mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_tiers(plan: EntryPlan, expected: [f64; 3]) {
        for (got, want) in plan.as_array().into_iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "got {:?}, expected {:?}", plan, expected);
        }
    }

    #[test]
    fn test_scalp_tiers() {
        assert_tiers(plan_entries(1000.0, 2000.0, Mode::Scalp), [980.0, 920.0, 880.0]);
    }

    #[test]
    fn test_momentum_tiers() {
        assert_tiers(plan_entries(1000.0, 2000.0, Mode::Momentum), [1000.0, 950.0, 900.0]);
    }

    #[test]
    fn test_dip_buy_tiers() {
        let plan = plan_entries(1000.0, 2000.0, Mode::DipBuy);
        assert_tiers(plan, [950.0, 1200.0, 1400.0]);
        // optimal is the deeper dip target
        assert!(plan.optimal < plan.conservative);
    }

    #[test]
    fn test_ath_only_matters_for_dip_buy() {
        let a = plan_entries(1000.0, 2000.0, Mode::Scalp);
        let b = plan_entries(1000.0, 9000.0, Mode::Scalp);
        assert_eq!(a, b);

        let a = plan_entries(1000.0, 2000.0, Mode::Momentum);
        let b = plan_entries(1000.0, 9000.0, Mode::Momentum);
        assert_eq!(a, b);
    }

    #[test]
    fn test_labels() {
        assert_tiers(plan_entries_for_label(1000.0, 2000.0, "Scalp"), [980.0, 920.0, 880.0]);
        assert_tiers(plan_entries_for_label(1000.0, 2000.0, "Momentum"), [1000.0, 950.0, 900.0]);
        assert_tiers(plan_entries_for_label(1000.0, 2000.0, "Dip Buy"), [950.0, 1200.0, 1400.0]);
    }

    #[test]
    fn test_unknown_label_falls_back_to_dip_buy() {
        for label in ["", "HODL", "scalp", "MOMENTUM", "DipBuy"] {
            assert_tiers(plan_entries_for_label(1000.0, 2000.0, label), [950.0, 1200.0, 1400.0]);
        }
    }
}
