// crates/cvath/src/report.rs
use crate::Outcome;
use num_format::{Locale, ToFormattedString};
use std::fmt;

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::MissingInput => write!(f, "Enter all values."),
            Outcome::Rejected { rejection } => write!(f, "REJECT ❌\n{}", rejection.reason()),
            Outcome::Scored { evaluation, mode, entries, ath_dip_pct, .. } => {
                writeln!(f, "CVATH: {:.2} ({})", round_to(evaluation.score, 2), evaluation.rating)?;
                writeln!(f)?;
                writeln!(f, "ATH Dip: {}%", ath_dip_pct)?;
                writeln!(f, "LP / MC: {:.2}%", round_to(evaluation.liquidity_ratio * 100.0, 2))?;
                writeln!(f)?;
                writeln!(f, "ENTRY — {}", mode)?;
                writeln!(f, "Aggressive: ${}", format_money(entries.aggressive))?;
                writeln!(f, "Optimal:    ${}", format_money(entries.optimal))?;
                write!(f, "Conservative: ${}", format_money(entries.conservative))
            }
        }
    }
}

/// Round to `decimals` places, halves away from zero.
///
/// `{:.N}` alone rounds exact binary ties to even (0.125 -> "0.12").
fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// en-US style amount: comma grouping, up to three decimals, no trailing zeros
pub fn format_money(value: f64) -> String {
    let thousandths = (value.abs() * 1000.0).round();
    if !thousandths.is_finite() || thousandths >= u64::MAX as f64 {
        return value.to_string();
    }

    let thousandths = thousandths as u64;
    let mut formatted = (thousandths / 1000).to_formatted_string(&Locale::en);

    let frac = thousandths % 1000;
    if frac > 0 {
        formatted.push('.');
        formatted.push_str(format!("{:03}", frac).trim_end_matches('0'));
    }

    if value.is_sign_negative() && thousandths > 0 {
        formatted.insert(0, '-');
    }

    formatted
}
