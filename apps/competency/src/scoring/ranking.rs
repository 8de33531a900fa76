//! Opportunity ranking — scores each opportunity, hides low tiers, and sorts
//! best-first for the listing views.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::collaborators::MatchPercentageProvider;
use crate::config::Config;
use crate::errors::CompetencyError;
use crate::scoring::competence::{competence_score, MatchPercentages};
use crate::scoring::tier::ColorTier;

/// Raw backend percentages for one opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityMatch {
    pub opportunity_id: u64,
    pub percentages: MatchPercentages,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredOpportunity {
    pub opportunity_id: u64,
    pub percentages: MatchPercentages,
    pub competence_score: f64,
    pub tier: ColorTier,
}

impl From<OpportunityMatch> for ScoredOpportunity {
    fn from(m: OpportunityMatch) -> Self {
        let competence_score = competence_score(&m.percentages);
        ScoredOpportunity {
            opportunity_id: m.opportunity_id,
            percentages: m.percentages,
            competence_score,
            tier: ColorTier::of(competence_score),
        }
    }
}

/// Drops opportunities below `min_tier`, then sorts by competence score
/// descending. Equal scores keep ascending opportunity id order.
pub fn rank_opportunities(matches: Vec<OpportunityMatch>, min_tier: ColorTier) -> Vec<ScoredOpportunity> {
    let mut ranked: Vec<ScoredOpportunity> = matches
        .into_iter()
        .map(ScoredOpportunity::from)
        .filter(|o| o.tier >= min_tier)
        .collect();

    ranked.sort_by(|a, b| {
        b.competence_score
            .partial_cmp(&a.competence_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.opportunity_id.cmp(&b.opportunity_id))
    });
    ranked
}

/// Fetches percentages for each opportunity and ranks them.
/// An opportunity whose percentages cannot be fetched is skipped, not fatal.
pub async fn score_opportunities(
    provider: &dyn MatchPercentageProvider,
    opportunity_ids: &[u64],
    min_tier: ColorTier,
) -> Vec<ScoredOpportunity> {
    let mut matches = Vec::with_capacity(opportunity_ids.len());

    for &opportunity_id in opportunity_ids {
        match provider.fetch_match_percentages(opportunity_id).await {
            Ok(percentages) => matches.push(OpportunityMatch {
                opportunity_id,
                percentages,
            }),
            Err(e) => warn!("Skipping opportunity {opportunity_id}: {e}"),
        }
    }

    let ranked = rank_opportunities(matches, min_tier);
    info!(
        "Ranked {} of {} opportunities (min tier {})",
        ranked.len(),
        opportunity_ids.len(),
        min_tier.index()
    );
    ranked
}

/// `score_opportunities` with the tier cutoff taken from `MIN_DISPLAY_TIER`.
pub async fn score_opportunities_with(
    provider: &dyn MatchPercentageProvider,
    opportunity_ids: &[u64],
    config: &Config,
) -> Vec<ScoredOpportunity> {
    score_opportunities(provider, opportunity_ids, config.min_display_tier).await
}

/// Convenience for callers that want a hard failure instead of skipping.
pub async fn score_opportunity(
    provider: &dyn MatchPercentageProvider,
    opportunity_id: u64,
) -> Result<ScoredOpportunity, CompetencyError> {
    let percentages = provider.fetch_match_percentages(opportunity_id).await?;
    Ok(OpportunityMatch {
        opportunity_id,
        percentages,
    }
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    fn jobs_only(opportunity_id: u64, jobs: f64) -> OpportunityMatch {
        OpportunityMatch {
            opportunity_id,
            percentages: MatchPercentages {
                jobs: Some(jobs),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_sorted_best_first_with_id_tiebreak() {
        let ranked = rank_opportunities(
            vec![jobs_only(3, 40.0), jobs_only(1, 100.0), jobs_only(2, 40.0)],
            ColorTier::LOWEST,
        );
        let ids: Vec<u64> = ranked.iter().map(|o| o.opportunity_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!((ranked[0].competence_score - 75.0).abs() < 1e-9);
        assert_eq!(ranked[0].tier.index(), 7);
    }

    #[test]
    fn test_min_tier_filters() {
        // jobs 100 → 75 (tier 7); jobs 20 → 15 (tier 1)
        let ranked = rank_opportunities(
            vec![jobs_only(1, 100.0), jobs_only(2, 20.0)],
            ColorTier::new(5).unwrap(),
        );
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].opportunity_id, 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_opportunities(vec![], ColorTier::LOWEST).is_empty());
    }

    struct FakeProvider;

    #[async_trait]
    impl MatchPercentageProvider for FakeProvider {
        async fn fetch_match_percentages(&self, opportunity_id: u64) -> Result<MatchPercentages, CompetencyError> {
            if opportunity_id == 404 {
                return Err(CompetencyError::Collaborator("opportunity gone".to_string()));
            }
            Ok(MatchPercentages {
                jobs: Some(opportunity_id as f64),
                ..Default::default()
            })
        }
    }

    #[tokio::test]
    async fn test_score_opportunities_skips_failures() {
        let ranked = score_opportunities(&FakeProvider, &[20, 404, 80], ColorTier::LOWEST).await;
        let ids: Vec<u64> = ranked.iter().map(|o| o.opportunity_id).collect();
        assert_eq!(ids, vec![80, 20]);
    }

    #[tokio::test]
    async fn test_configured_min_tier_hides_low_scores() {
        // 80 → 60 (tier 6); 20 → 15 (tier 1)
        let config = Config {
            min_display_tier: ColorTier::new(5).unwrap(),
            ..Config::default()
        };
        let ranked = score_opportunities_with(&FakeProvider, &[20, 404, 80], &config).await;
        let ids: Vec<u64> = ranked.iter().map(|o| o.opportunity_id).collect();
        assert_eq!(ids, vec![80]);

        let everything = score_opportunities_with(&FakeProvider, &[20, 80], &Config::default()).await;
        assert_eq!(everything.len(), 2);
    }

    #[tokio::test]
    async fn test_score_opportunity_propagates_failure() {
        let err = score_opportunity(&FakeProvider, 404).await.unwrap_err();
        assert_eq!(err.code(), "COLLABORATOR_ERROR");

        let scored = score_opportunity(&FakeProvider, 80).await.unwrap();
        assert!((scored.competence_score - 60.0).abs() < 1e-9);
    }
}
