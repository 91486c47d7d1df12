use serde::{Deserialize, Serialize};

use super::evaluation::EvaluationError;

/// Whether the purchase is a physical product or a paid service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    Product,
    Service,
}

impl ItemType {
    pub fn label(&self) -> &'static str {
        match self {
            ItemType::Product => "Product",
            ItemType::Service => "Service",
        }
    }
}

/// Answer to "is there a cheaper alternative with a similar function?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlternativeAnswer {
    No,
    Undecided,
    Yes,
}

impl AlternativeAnswer {
    pub fn label(&self) -> &'static str {
        match self {
            AlternativeAnswer::No => "No",
            AlternativeAnswer::Undecided => "Haven't thought about it",
            AlternativeAnswer::Yes => "Yes",
        }
    }
}

/// Answer to "could you wait one week before buying?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WaitAnswer {
    Yes,
    Maybe,
    No,
}

impl WaitAnswer {
    pub fn label(&self) -> &'static str {
        match self {
            WaitAnswer::Yes => "Yes",
            WaitAnswer::Maybe => "Maybe",
            WaitAnswer::No => "No",
        }
    }
}

/// How long the buyer expects the item to last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpectedLifespan {
    UnderOneMonth,
    OneToSixMonths,
    SixMonthsToOneYear,
    OverOneYear,
}

impl ExpectedLifespan {
    pub fn label(&self) -> &'static str {
        match self {
            ExpectedLifespan::UnderOneMonth => "Less than 1 month",
            ExpectedLifespan::OneToSixMonths => "1 to 6 months",
            ExpectedLifespan::SixMonthsToOneYear => "6 months to 1 year",
            ExpectedLifespan::OverOneYear => "More than 1 year",
        }
    }
}

/// Validated answer set for a single evaluation.
///
/// Deserialization accepts an abbreviated payload: `usesInstallments` defaults to
/// `!isCashPayment`, and `installmentsHaveInterest` is forced to `false` whenever the
/// purchase does not use installments. An installment purchase must state whether it
/// carries interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PurchaseAnswerRecord")]
pub struct PurchaseAnswer {
    pub item_type: ItemType,
    pub item_name: String,
    pub cost: f64,
    pub is_necessity: bool,
    pub is_cash_payment: bool,
    pub uses_installments: bool,
    pub installments_have_interest: bool,
    /// Collected by the questionnaire but not scored.
    pub is_gift: bool,
    pub monthly_income: f64,
    pub weekly_work_hours: f64,
    pub cheaper_alternative_exists: AlternativeAnswer,
    pub can_wait_one_week: WaitAnswer,
    pub expected_lifespan: ExpectedLifespan,
}

impl PurchaseAnswer {
    /// True when the interest answer should be consulted.
    pub fn pays_in_installments(&self) -> bool {
        !self.is_cash_payment && self.uses_installments
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PurchaseAnswerRecord {
    item_type: ItemType,
    #[serde(default)]
    item_name: String,
    cost: f64,
    is_necessity: bool,
    is_cash_payment: bool,
    #[serde(default)]
    uses_installments: Option<bool>,
    #[serde(default)]
    installments_have_interest: Option<bool>,
    #[serde(default)]
    is_gift: bool,
    monthly_income: f64,
    weekly_work_hours: f64,
    cheaper_alternative_exists: AlternativeAnswer,
    can_wait_one_week: WaitAnswer,
    expected_lifespan: ExpectedLifespan,
}

impl TryFrom<PurchaseAnswerRecord> for PurchaseAnswer {
    type Error = EvaluationError;

    fn try_from(record: PurchaseAnswerRecord) -> Result<Self, Self::Error> {
        let uses_installments = record
            .uses_installments
            .unwrap_or(!record.is_cash_payment);
        let installments_have_interest = match (uses_installments, record.installments_have_interest) {
            (false, _) => false,
            (true, Some(interest)) => interest,
            (true, None) => {
                return Err(EvaluationError::invalid(
                    "installmentsHaveInterest",
                    "required when paying in installments",
                ))
            }
        };

        Ok(Self {
            item_type: record.item_type,
            item_name: record.item_name,
            cost: record.cost,
            is_necessity: record.is_necessity,
            is_cash_payment: record.is_cash_payment,
            uses_installments,
            installments_have_interest,
            is_gift: record.is_gift,
            monthly_income: record.monthly_income,
            weekly_work_hours: record.weekly_work_hours,
            cheaper_alternative_exists: record.cheaper_alternative_exists,
            can_wait_one_week: record.can_wait_one_week,
            expected_lifespan: record.expected_lifespan,
        })
    }
}

/// Recommendation tier selected by thresholding the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    BuyConfidently,
    WaitOrReassess,
    DoNotBuyYet,
}

impl Recommendation {
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::BuyConfidently => "Buy with confidence",
            Recommendation::WaitOrReassess => "Wait or reassess",
            Recommendation::DoNotBuyYet => "Don't buy yet",
        }
    }
}

/// Identifies the rule that produced a score component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    IncomeShare,
    WorkHours,
    Necessity,
    PaymentMethod,
    InterestFreeInstallments,
    CheaperAlternative,
    CanWait,
    Durability,
    BudgetRatio,
}

/// Discrete contribution to a score, kept so results can be audited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub rule: ScoringRule,
    pub points: i32,
    pub note: String,
}

/// Evaluation output: composite score, tier, and the derived work-hours metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub score: i32,
    pub recommendation: Recommendation,
    pub required_work_hours: f64,
    pub components: Vec<ScoreComponent>,
}
