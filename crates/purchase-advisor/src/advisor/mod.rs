//! Purchase questionnaire model, scoring, and the evaluation endpoint.

pub mod domain;
pub mod evaluation;
pub mod intake;
pub mod router;
pub mod summary;

#[cfg(test)]
mod tests;

pub use domain::{
    AlternativeAnswer, ExpectedLifespan, ItemType, PurchaseAnswer, Recommendation,
    ScoreComponent, ScoreResult, ScoringRule, WaitAnswer,
};
pub use evaluation::{evaluate, EvaluationError, PurchaseScorer, ScoringConfig};
pub use intake::{PurchaseForm, UnknownLabel};
pub use router::evaluation_router;
pub use summary::EvaluationSummary;
