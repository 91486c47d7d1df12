//! Maps raw questionnaire answers onto the typed answer record.
//!
//! Display strings differ between front ends (and between languages), so every
//! answer is folded to a lowercase, accent-free, alphanumeric key before it is
//! matched. Canonical member names, snake/kebab forms, and the Spanish labels
//! of the original questionnaire are all accepted.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::domain::{AlternativeAnswer, ExpectedLifespan, ItemType, PurchaseAnswer, WaitAnswer};
use super::evaluation::EvaluationError;

/// Answers exactly as a form or command line collects them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseForm {
    pub item_type: String,
    pub item_name: String,
    pub cost: String,
    pub necessity: String,
    pub payment: String,
    /// Only consulted when paying in installments, where it is required.
    pub installment_interest: Option<String>,
    pub gift: Option<String>,
    pub monthly_income: String,
    pub weekly_work_hours: String,
    pub cheaper_alternative: String,
    pub can_wait: String,
    pub expected_lifespan: String,
}

impl PurchaseForm {
    pub fn into_answer(self) -> Result<PurchaseAnswer, EvaluationError> {
        let is_cash_payment = parse_payment(&self.payment)?;
        let uses_installments = !is_cash_payment;
        let installments_have_interest = match (uses_installments, &self.installment_interest) {
            (true, Some(raw)) => parse_interest(raw)?,
            (true, None) => {
                return Err(EvaluationError::invalid(
                    "installmentsHaveInterest",
                    "required when paying in installments",
                ))
            }
            (false, _) => false,
        };
        let is_gift = match &self.gift {
            Some(raw) => parse_flag("isGift", raw)?,
            None => false,
        };

        Ok(PurchaseAnswer {
            item_type: parse_field("itemType", &self.item_type)?,
            item_name: self.item_name.trim().to_string(),
            cost: parse_amount("cost", &self.cost)?,
            is_necessity: parse_necessity(&self.necessity)?,
            is_cash_payment,
            uses_installments,
            installments_have_interest,
            is_gift,
            monthly_income: parse_amount("monthlyIncome", &self.monthly_income)?,
            weekly_work_hours: parse_amount("weeklyWorkHours", &self.weekly_work_hours)?,
            cheaper_alternative_exists: parse_field(
                "cheaperAlternativeExists",
                &self.cheaper_alternative,
            )?,
            can_wait_one_week: parse_field("canWaitOneWeek", &self.can_wait)?,
            expected_lifespan: parse_field("expectedLifespan", &self.expected_lifespan)?,
        })
    }
}

/// Error returned by the label parsers; carries the rejected input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized answer '{0}'")]
pub struct UnknownLabel(pub String);

pub(crate) fn label_key(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            other => other,
        })
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

impl FromStr for ItemType {
    type Err = UnknownLabel;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match label_key(raw).as_str() {
            "product" | "producto" => Ok(ItemType::Product),
            "service" | "servicio" => Ok(ItemType::Service),
            _ => Err(UnknownLabel(raw.to_string())),
        }
    }
}

impl FromStr for AlternativeAnswer {
    type Err = UnknownLabel;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match label_key(raw).as_str() {
            "no" | "n" => Ok(AlternativeAnswer::No),
            "undecided" | "unsure" | "nolohepensado" | "haventthoughtaboutit" => {
                Ok(AlternativeAnswer::Undecided)
            }
            "yes" | "y" | "si" => Ok(AlternativeAnswer::Yes),
            _ => Err(UnknownLabel(raw.to_string())),
        }
    }
}

impl FromStr for WaitAnswer {
    type Err = UnknownLabel;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match label_key(raw).as_str() {
            "yes" | "y" | "si" => Ok(WaitAnswer::Yes),
            "maybe" | "talvez" | "quizas" => Ok(WaitAnswer::Maybe),
            "no" | "n" => Ok(WaitAnswer::No),
            _ => Err(UnknownLabel(raw.to_string())),
        }
    }
}

impl FromStr for ExpectedLifespan {
    type Err = UnknownLabel;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match label_key(raw).as_str() {
            "underonemonth" | "lessthan1month" | "menosde1mes" => {
                Ok(ExpectedLifespan::UnderOneMonth)
            }
            "onetosixmonths" | "1to6months" | "1a6meses" => Ok(ExpectedLifespan::OneToSixMonths),
            "sixmonthstooneyear" | "6monthsto1year" | "6mesesa1ano" => {
                Ok(ExpectedLifespan::SixMonthsToOneYear)
            }
            "overoneyear" | "morethan1year" | "masde1ano" => Ok(ExpectedLifespan::OverOneYear),
            _ => Err(UnknownLabel(raw.to_string())),
        }
    }
}

fn parse_field<T>(field: &'static str, raw: &str) -> Result<T, EvaluationError>
where
    T: FromStr<Err = UnknownLabel>,
{
    raw.parse::<T>()
        .map_err(|err| EvaluationError::invalid(field, err.to_string()))
}

fn generic_flag(key: &str) -> Option<bool> {
    match key {
        "yes" | "y" | "true" | "si" | "1" => Some(true),
        "no" | "n" | "false" | "0" => Some(false),
        _ => None,
    }
}

fn parse_flag(field: &'static str, raw: &str) -> Result<bool, EvaluationError> {
    generic_flag(&label_key(raw))
        .ok_or_else(|| EvaluationError::invalid(field, UnknownLabel(raw.to_string()).to_string()))
}

fn parse_necessity(raw: &str) -> Result<bool, EvaluationError> {
    let key = label_key(raw);
    match key.as_str() {
        "necessity" | "need" | "necesidad" => Ok(true),
        "desire" | "want" | "deseo" => Ok(false),
        _ => generic_flag(&key).ok_or_else(|| {
            EvaluationError::invalid("isNecessity", UnknownLabel(raw.to_string()).to_string())
        }),
    }
}

fn parse_payment(raw: &str) -> Result<bool, EvaluationError> {
    let key = label_key(raw);
    match key.as_str() {
        "cash" | "alcontado" | "contado" => Ok(true),
        "installments" | "encuotas" | "cuotas" => Ok(false),
        _ => generic_flag(&key).ok_or_else(|| {
            EvaluationError::invalid("isCashPayment", UnknownLabel(raw.to_string()).to_string())
        }),
    }
}

fn parse_interest(raw: &str) -> Result<bool, EvaluationError> {
    let key = label_key(raw);
    match key.as_str() {
        "withinterest" | "interest" | "siconinteres" | "coninteres" => Ok(true),
        "interestfree" | "nointerest" | "nosininteres" | "sininteres" => Ok(false),
        _ => generic_flag(&key).ok_or_else(|| {
            EvaluationError::invalid(
                "installmentsHaveInterest",
                UnknownLabel(raw.to_string()).to_string(),
            )
        }),
    }
}

/// Accepts a leading `$`, `_` digit separators and US-style `,` thousands
/// separators. A comma must start a group of exactly three digits, so a
/// decimal comma such as `1,5` is rejected.
pub(crate) fn parse_amount(field: &'static str, raw: &str) -> Result<f64, EvaluationError> {
    let trimmed = raw.trim();
    let number: String = trimmed
        .strip_prefix('$')
        .unwrap_or(trimmed)
        .trim()
        .chars()
        .filter(|c| *c != '_')
        .collect();

    let (integer, fraction) = match number.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (number.as_str(), None),
    };

    let mut groups = integer.split(',');
    let lead = groups.next().unwrap_or_default();
    if integer.contains(',') {
        let lead_digits = lead.trim_start_matches(['-', '+']);
        if lead_digits.is_empty() || lead_digits.len() > 3 {
            return Err(misplaced_separator(field, raw));
        }
    }
    let mut digits = lead.to_string();
    for group in groups {
        if group.len() != 3 || !group.chars().all(|c| c.is_ascii_digit()) {
            return Err(misplaced_separator(field, raw));
        }
        digits.push_str(group);
    }
    if let Some(fraction) = fraction {
        digits.push('.');
        digits.push_str(fraction);
    }

    digits
        .parse::<f64>()
        .map_err(|_| EvaluationError::invalid(field, format!("'{raw}' is not a number")))
}

fn misplaced_separator(field: &'static str, raw: &str) -> EvaluationError {
    EvaluationError::invalid(
        field,
        format!("'{raw}' uses ',' other than as a thousands separator"),
    )
}
