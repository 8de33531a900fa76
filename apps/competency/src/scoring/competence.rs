//! Competence score — fixed-weight aggregate of backend match percentages.
//!
//! A missing sub-score counts as 0 and still carries its weight. The average
//! is never renormalized over the dimensions that happen to be present.

use serde::{Deserialize, Serialize};

/// Match percentages for one opportunity, as returned by the matching backend.
/// Every field is 0–100 when present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchPercentages {
    #[serde(rename = "jobs_match_percentage")]
    pub jobs: Option<f64>,
    #[serde(rename = "languages_match_percentage")]
    pub languages: Option<f64>,
    #[serde(rename = "qualities_match_percentage")]
    pub qualities: Option<f64>,
    #[serde(rename = "tools_match_percentage")]
    pub tools: Option<f64>,
    #[serde(rename = "authorizations_match_percentage")]
    pub authorizations: Option<f64>,

    // Shown next to the score, never aggregated into it.
    #[serde(rename = "seniority_match_percentage")]
    pub seniority: Option<f64>,
    #[serde(rename = "availability_match_percentage")]
    pub availability: Option<f64>,
    #[serde(rename = "rate_match_percentage")]
    pub rate: Option<f64>,
    #[serde(rename = "mobility_match_percentage")]
    pub mobility: Option<f64>,
}

/// Dimension weights in per-mille, so the total is an exact integer.
/// The only instance is `COMPETENCE_WEIGHTS`; the weights are not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompetenceWeights {
    pub jobs: u32,
    pub languages: u32,
    pub qualities: u32,
    pub tools: u32,
    pub authorizations: u32,
}

/// 0.75 jobs, 0.125 languages, 0.025 qualities, 0.075 tools, 0.025 authorizations.
pub const COMPETENCE_WEIGHTS: CompetenceWeights = CompetenceWeights {
    jobs: 750,
    languages: 125,
    qualities: 25,
    tools: 75,
    authorizations: 25,
};

const PER_MILLE: f64 = 1000.0;

impl CompetenceWeights {
    pub fn total_per_mille(&self) -> u32 {
        self.jobs + self.languages + self.qualities + self.tools + self.authorizations
    }

    /// Total as a fraction; 1.0 for `COMPETENCE_WEIGHTS`.
    pub fn sum(&self) -> f64 {
        self.total_per_mille() as f64 / PER_MILLE
    }
}

/// Missing and NaN count as 0; everything else is clamped to 0–100.
pub fn clamp_percentage(value: Option<f64>) -> f64 {
    match value {
        Some(v) if !v.is_nan() => v.clamp(0.0, 100.0),
        _ => 0.0,
    }
}

/// Competence score with the standard weights. Always within 0–100.
pub fn competence_score(percentages: &MatchPercentages) -> f64 {
    weighted_competence_score(percentages, &COMPETENCE_WEIGHTS)
}

fn weighted_competence_score(percentages: &MatchPercentages, weights: &CompetenceWeights) -> f64 {
    let weighted = weights.jobs as f64 * clamp_percentage(percentages.jobs)
        + weights.languages as f64 * clamp_percentage(percentages.languages)
        + weights.qualities as f64 * clamp_percentage(percentages.qualities)
        + weights.tools as f64 * clamp_percentage(percentages.tools)
        + weights.authorizations as f64 * clamp_percentage(percentages.authorizations);
    weighted / PER_MILLE
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_percentage() -> impl Strategy<Value = Option<f64>> {
        prop_oneof![Just(None), (-50.0f64..150.0).prop_map(Some)]
    }

    fn arb_percentages() -> impl Strategy<Value = MatchPercentages> {
        (
            arb_percentage(),
            arb_percentage(),
            arb_percentage(),
            arb_percentage(),
            arb_percentage(),
        )
            .prop_map(|(jobs, languages, qualities, tools, authorizations)| MatchPercentages {
                jobs,
                languages,
                qualities,
                tools,
                authorizations,
                ..Default::default()
            })
    }

    proptest! {
        #[test]
        fn prop_score_stays_in_range(p in arb_percentages()) {
            let score = competence_score(&p);
            prop_assert!((0.0..=100.0).contains(&score), "score was {}", score);
        }

        #[test]
        fn prop_more_jobs_never_lowers_score(
            p in arb_percentages(),
            a in 0.0f64..100.0,
            b in 0.0f64..100.0,
        ) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let mut lower = p.clone();
            lower.jobs = Some(low);
            let mut higher = p;
            higher.jobs = Some(high);
            prop_assert!(competence_score(&lower) <= competence_score(&higher));
        }

        #[test]
        fn prop_score_is_deterministic(p in arb_percentages()) {
            prop_assert_eq!(competence_score(&p), competence_score(&p));
        }
    }
}
