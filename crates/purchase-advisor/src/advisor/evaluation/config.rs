use serde::{Deserialize, Serialize};

/// Scoring policy: band boundaries and weights for every rule plus the
/// interpretation thresholds. The default is the reference calibration.
///
/// Every field is optional when deserializing; missing values keep the default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    pub income_share: IncomeShareWeights,
    pub work_hours: WorkHoursWeights,
    pub necessity: NecessityWeights,
    pub payment: PaymentWeights,
    pub interest_free_installments: InterestFreeWeights,
    pub alternative: AlternativeWeights,
    pub can_wait: WaitWeights,
    pub durability: DurabilityWeights,
    pub budget: BudgetWeights,
    pub thresholds: RecommendationThresholds,
}

/// Cost as a percentage of monthly income.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncomeShareWeights {
    pub low_below_pct: f64,
    pub moderate_below_pct: f64,
    pub high_up_to_pct: f64,
    pub low: i32,
    pub moderate: i32,
    pub high: i32,
    pub excessive: i32,
}

impl Default for IncomeShareWeights {
    fn default() -> Self {
        Self {
            low_below_pct: 5.0,
            moderate_below_pct: 10.0,
            high_up_to_pct: 20.0,
            low: 2,
            moderate: 1,
            high: 0,
            excessive: -1,
        }
    }
}

/// Hours of work needed to pay for the item. A value exactly on
/// `medium_below_hours` falls in neither band and scores `boundary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkHoursWeights {
    pub short_below_hours: f64,
    pub medium_below_hours: f64,
    pub short: i32,
    pub medium: i32,
    pub boundary: i32,
    pub long: i32,
}

impl Default for WorkHoursWeights {
    fn default() -> Self {
        Self {
            short_below_hours: 4.0,
            medium_below_hours: 8.0,
            short: 3,
            medium: 1,
            boundary: 0,
            long: -1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NecessityWeights {
    pub necessity: i32,
    pub desire: i32,
}

impl Default for NecessityWeights {
    fn default() -> Self {
        Self {
            necessity: 4,
            desire: 0,
        }
    }
}

/// Necessity × payment method, scored as a single four-way switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentWeights {
    pub necessity_cash: i32,
    pub necessity_installments: i32,
    pub desire_cash: i32,
    pub desire_installments: i32,
}

impl Default for PaymentWeights {
    fn default() -> Self {
        Self {
            necessity_cash: 6,
            necessity_installments: 2,
            desire_cash: 3,
            desire_installments: -6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterestFreeWeights {
    pub interest_free: i32,
}

impl Default for InterestFreeWeights {
    fn default() -> Self {
        Self { interest_free: 2 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlternativeWeights {
    pub no: i32,
    pub undecided: i32,
    pub yes: i32,
}

impl Default for AlternativeWeights {
    fn default() -> Self {
        Self {
            no: 1,
            undecided: 0,
            yes: -3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitWeights {
    pub yes: i32,
    pub maybe: i32,
    pub no: i32,
}

impl Default for WaitWeights {
    fn default() -> Self {
        Self {
            yes: -3,
            maybe: 0,
            no: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurabilityWeights {
    pub over_one_year: i32,
    pub six_months_to_one_year: i32,
    pub one_to_six_months: i32,
    pub under_one_month: i32,
}

impl Default for DurabilityWeights {
    fn default() -> Self {
        Self {
            over_one_year: 3,
            six_months_to_one_year: 2,
            one_to_six_months: 1,
            under_one_month: -1,
        }
    }
}

/// 50/30/20 guideline: cost against the share of income earmarked for
/// necessities or wants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetWeights {
    pub necessity_share: f64,
    pub desire_share: f64,
    pub low_below_ratio: f64,
    pub moderate_below_ratio: f64,
    pub high_above_ratio: f64,
    pub low: i32,
    pub moderate: i32,
    pub neutral: i32,
    pub high: i32,
}

impl Default for BudgetWeights {
    fn default() -> Self {
        Self {
            necessity_share: 0.5,
            desire_share: 0.3,
            low_below_ratio: 0.10,
            moderate_below_ratio: 0.20,
            high_above_ratio: 0.40,
            low: 6,
            moderate: 3,
            neutral: 0,
            high: -4,
        }
    }
}

/// `score >= buy` buys, `score >= wait` waits, anything lower does not buy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationThresholds {
    pub buy: i32,
    pub wait: i32,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self { buy: 5, wait: 2 }
    }
}

/// Raised when a scoring policy is internally inconsistent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid scoring config: {0}")]
pub struct ScoringConfigError(pub String);

fn ascending(name: &str, bounds: &[f64]) -> Result<(), ScoringConfigError> {
    if bounds.iter().any(|bound| !bound.is_finite()) {
        return Err(ScoringConfigError(format!("{name} bounds must be finite")));
    }
    if bounds.windows(2).any(|pair| pair[0] > pair[1]) {
        return Err(ScoringConfigError(format!(
            "{name} bounds must be ascending, found {bounds:?}"
        )));
    }
    Ok(())
}

fn share(name: &str, value: f64) -> Result<(), ScoringConfigError> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ScoringConfigError(format!(
            "{name} must be within (0, 1], found {value}"
        )))
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ScoringConfigError> {
        let income = &self.income_share;
        ascending(
            "income_share",
            &[
                income.low_below_pct,
                income.moderate_below_pct,
                income.high_up_to_pct,
            ],
        )?;

        let hours = &self.work_hours;
        ascending(
            "work_hours",
            &[hours.short_below_hours, hours.medium_below_hours],
        )?;

        let budget = &self.budget;
        share("budget.necessity_share", budget.necessity_share)?;
        share("budget.desire_share", budget.desire_share)?;
        ascending(
            "budget",
            &[
                budget.low_below_ratio,
                budget.moderate_below_ratio,
                budget.high_above_ratio,
            ],
        )?;

        if self.thresholds.buy < self.thresholds.wait {
            return Err(ScoringConfigError(format!(
                "buy threshold {} is below wait threshold {}",
                self.thresholds.buy, self.thresholds.wait
            )));
        }

        Ok(())
    }
}
