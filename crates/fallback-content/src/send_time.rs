//! Send-Time Heuristic
//!
//! Fixed industry-benchmark prediction used when no engagement model is
//! available. The hourly curve peaks mid-morning, dips overnight.

use serde::{Deserialize, Serialize};

/// Predicted optimal send times with an hour-by-hour probability curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTimePrediction {
    /// Hours of day (0-23), ascending.
    pub optimal_hours: Vec<u8>,
    pub optimal_days: Vec<String>,
    pub confidence: f64,
    pub reasoning: String,
    /// Open probability per hour of day, indexed 0-23.
    pub hourly_probabilities: [f64; 24],
    pub insights: Vec<String>,
    #[serde(default)]
    pub is_fallback: bool,
}

const OPTIMAL_HOURS: [u8; 3] = [10, 14, 20];

const OPTIMAL_DAYS: [&str; 3] = ["Tuesday", "Wednesday", "Thursday"];

const REASONING: &str = "Based on industry benchmarks: 10 AM catches morning inbox check, \
    2 PM hits post-lunch browsing, 8 PM reaches evening relaxation time. Mid-week days \
    show highest engagement as Monday inbox is crowded and Friday attention wanes.";

#[rustfmt::skip]
const HOURLY_PROBABILITIES: [f64; 24] = [
    0.05, 0.03, 0.02, 0.02, 0.03, 0.08, // 12am-5am
    0.25, 0.45, 0.65, 0.85, 0.90, 0.75, // 6am-11am
    0.60, 0.70, 0.85, 0.80, 0.65, 0.55, // 12pm-5pm
    0.50, 0.60, 0.80, 0.70, 0.40, 0.15, // 6pm-11pm
];

const INSIGHTS: [&str; 3] = [
    "Morning sends (9-11 AM) show 23% higher open rates",
    "Avoid Mondays - inbox competition reduces visibility by 15%",
    "Weekend sends have 40% lower engagement for B2C",
];

/// Produce the fixed benchmark prediction. Pure: repeated calls are
/// identical.
pub(crate) fn prediction() -> SendTimePrediction {
    SendTimePrediction {
        optimal_hours: OPTIMAL_HOURS.to_vec(),
        optimal_days: OPTIMAL_DAYS.iter().map(|day| day.to_string()).collect(),
        confidence: 0.82,
        reasoning: REASONING.to_string(),
        hourly_probabilities: HOURLY_PROBABILITIES,
        insights: INSIGHTS.iter().map(|s| s.to_string()).collect(),
        is_fallback: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idempotent() {
        assert_eq!(prediction(), prediction());
    }

    #[test]
    fn test_curve_shape() {
        let p = prediction();
        assert_eq!(p.hourly_probabilities.len(), 24);
        assert!(p
            .hourly_probabilities
            .iter()
            .all(|v| (0.0..=1.0).contains(v)));
        // Mid-morning peak beats the overnight trough.
        assert!(p.hourly_probabilities[10] > p.hourly_probabilities[3]);
        assert!(p.hourly_probabilities[9] > p.hourly_probabilities[3]);
    }

    #[test]
    fn test_optimal_hours_ascending_and_in_range() {
        let p = prediction();
        assert_eq!(p.optimal_hours, vec![10, 14, 20]);
        assert!(p.optimal_hours.windows(2).all(|w| w[0] < w[1]));
        assert!(p.optimal_hours.iter().all(|h| *h < 24));
    }

    #[test]
    fn test_fixed_literals() {
        let p = prediction();
        assert_eq!(p.optimal_days, vec!["Tuesday", "Wednesday", "Thursday"]);
        assert!((p.confidence - 0.82).abs() < f64::EPSILON);
        assert_eq!(p.insights.len(), 3);
        assert!(p.is_fallback);
    }
}
