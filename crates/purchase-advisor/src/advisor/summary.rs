use std::fmt;

use serde::Serialize;

use super::domain::{PurchaseAnswer, ScoreResult};

/// Echo of the submitted answers followed by the recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationSummary {
    pub answers: Vec<String>,
    pub recommendation: String,
    pub work_hours: String,
}

impl EvaluationSummary {
    pub fn new(answer: &PurchaseAnswer, result: &ScoreResult) -> Self {
        let mut answers = vec![
            format!("Purchase type: {}", answer.item_type.label()),
            format!("Item: {}", answer.item_name),
            format!("Cost: {}", format_currency(answer.cost)),
            format!("Necessity: {}", yes_no(answer.is_necessity)),
            format!(
                "Payment: {}",
                if answer.is_cash_payment {
                    "Cash"
                } else {
                    "Installments"
                }
            ),
        ];
        if !answer.is_cash_payment {
            answers.push(format!(
                "  Installments with interest: {}",
                yes_no(answer.installments_have_interest)
            ));
        }
        answers.extend([
            format!("Monthly income: {}", format_currency(answer.monthly_income)),
            format!(
                "Cheaper alternatives: {}",
                answer.cheaper_alternative_exists.label()
            ),
            format!("Can wait one week: {}", answer.can_wait_one_week.label()),
            format!("Expected lifespan: {}", answer.expected_lifespan.label()),
        ]);

        Self {
            answers,
            recommendation: format!(
                "{} (score: {})",
                result.recommendation.label(),
                result.score
            ),
            work_hours: format!(
                "This purchase represents about {:.1} hours of work.",
                result.required_work_hours
            ),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec!["Evaluation summary:".to_string()];
        lines.extend(self.answers.iter().map(|line| match line.strip_prefix("  ") {
            Some(nested) => format!("  - {nested}"),
            None => format!("- {line}"),
        }));
        lines.push(String::new());
        lines.push("Recommendation:".to_string());
        lines.push(self.recommendation.clone());
        lines.push(self.work_hours.clone());
        lines
    }
}

impl fmt::Display for EvaluationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Whole currency units with a thousands separator, e.g. `$12,500`.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}")
}
