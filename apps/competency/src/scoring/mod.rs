// Match scoring: fixed-weight competence score over backend match
// percentages, the 10-tier color bucketing, and opportunity ranking.

pub mod competence;
pub mod ranking;
pub mod tier;

pub use competence::{competence_score, CompetenceWeights, MatchPercentages, COMPETENCE_WEIGHTS};
pub use ranking::{
    rank_opportunities, score_opportunities, score_opportunities_with, score_opportunity, OpportunityMatch,
    ScoredOpportunity,
};
pub use tier::ColorTier;
