mod config;
mod policy;
mod rules;

pub use config::{
    AlternativeWeights, BudgetWeights, DurabilityWeights, IncomeShareWeights,
    InterestFreeWeights, NecessityWeights, PaymentWeights, RecommendationThresholds,
    ScoringConfig, ScoringConfigError, WaitWeights, WorkHoursWeights,
};
pub use policy::recommendation_for;

use super::domain::{PurchaseAnswer, ScoreResult};

/// The only failure the scorer produces. Callers re-collect input and retry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluationError {
    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl EvaluationError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

/// Stateless scorer applying a scoring policy to an answer set.
#[derive(Debug, Clone, Default)]
pub struct PurchaseScorer {
    config: ScoringConfig,
}

impl PurchaseScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn evaluate(&self, answer: &PurchaseAnswer) -> Result<ScoreResult, EvaluationError> {
        validate(answer)?;

        let (components, score, signals) = rules::score_answer(answer, &self.config);
        let recommendation = recommendation_for(score, &self.config.thresholds);

        Ok(ScoreResult {
            score,
            recommendation,
            required_work_hours: signals.required_work_hours,
            components,
        })
    }
}

/// Scores with the reference calibration.
pub fn evaluate(answer: &PurchaseAnswer) -> Result<ScoreResult, EvaluationError> {
    PurchaseScorer::default().evaluate(answer)
}

fn validate(answer: &PurchaseAnswer) -> Result<(), EvaluationError> {
    if !answer.cost.is_finite() || answer.cost < 0.0 {
        return Err(EvaluationError::invalid(
            "cost",
            format!("must be a non-negative amount, found {}", answer.cost),
        ));
    }
    if !answer.monthly_income.is_finite() || answer.monthly_income <= 0.0 {
        return Err(EvaluationError::invalid(
            "monthlyIncome",
            format!("must be greater than zero, found {}", answer.monthly_income),
        ));
    }
    if !answer.weekly_work_hours.is_finite() || answer.weekly_work_hours <= 0.0 {
        return Err(EvaluationError::invalid(
            "weeklyWorkHours",
            format!(
                "must be greater than zero, found {}",
                answer.weekly_work_hours
            ),
        ));
    }
    Ok(())
}
