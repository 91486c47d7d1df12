use super::super::domain::{
    AlternativeAnswer, ExpectedLifespan, PurchaseAnswer, ScoreComponent, ScoringRule, WaitAnswer,
};
use super::config::ScoringConfig;

/// Weeks per month used to derive an hourly wage from monthly income.
const WEEKS_PER_MONTH: f64 = 4.0;

/// Derived ratios reported alongside the components.
pub(crate) struct ScoreSignals {
    pub required_work_hours: f64,
}

fn component(rule: ScoringRule, points: i32, note: String) -> ScoreComponent {
    ScoreComponent { rule, points, note }
}

/// Applies every rule in fixed order. Inputs must already be validated.
pub(crate) fn score_answer(
    answer: &PurchaseAnswer,
    config: &ScoringConfig,
) -> (Vec<ScoreComponent>, i32, ScoreSignals) {
    let (work_hours, required_work_hours) = work_hours(answer, config);

    let components = vec![
        income_share(answer, config),
        work_hours,
        necessity(answer, config),
        payment_method(answer, config),
        interest_free_installments(answer, config),
        cheaper_alternative(answer, config),
        can_wait(answer, config),
        durability(answer, config),
        budget_ratio(answer, config),
    ];

    let total_score = components.iter().map(|component| component.points).sum();

    (
        components,
        total_score,
        ScoreSignals {
            required_work_hours,
        },
    )
}

fn income_share(answer: &PurchaseAnswer, config: &ScoringConfig) -> ScoreComponent {
    let weights = &config.income_share;
    let pct = answer.cost / answer.monthly_income * 100.0;

    let points = if pct < weights.low_below_pct {
        weights.low
    } else if pct < weights.moderate_below_pct {
        weights.moderate
    } else if pct <= weights.high_up_to_pct {
        weights.high
    } else {
        weights.excessive
    };

    component(
        ScoringRule::IncomeShare,
        points,
        format!("cost is {pct:.1}% of monthly income"),
    )
}

fn work_hours(answer: &PurchaseAnswer, config: &ScoringConfig) -> (ScoreComponent, f64) {
    let weights = &config.work_hours;
    let monthly_hours = answer.weekly_work_hours * WEEKS_PER_MONTH;
    let hourly_income = answer.monthly_income / monthly_hours;
    // cost / hourly_income in one division; the two-step form is 0/0 for tiny incomes
    let hours = answer.cost * monthly_hours / answer.monthly_income;

    let points = if hours < weights.short_below_hours {
        weights.short
    } else if hours < weights.medium_below_hours {
        weights.medium
    } else if hours > weights.medium_below_hours {
        weights.long
    } else {
        weights.boundary
    };

    (
        component(
            ScoringRule::WorkHours,
            points,
            format!("{hours:.1} hours of work at {hourly_income:.2} per hour"),
        ),
        hours,
    )
}

fn necessity(answer: &PurchaseAnswer, config: &ScoringConfig) -> ScoreComponent {
    let (points, note) = if answer.is_necessity {
        (config.necessity.necessity, "necessity")
    } else {
        (config.necessity.desire, "desire")
    };
    component(ScoringRule::Necessity, points, note.to_string())
}

fn payment_method(answer: &PurchaseAnswer, config: &ScoringConfig) -> ScoreComponent {
    let weights = &config.payment;
    let (points, note) = match (answer.is_necessity, answer.is_cash_payment) {
        (true, true) => (weights.necessity_cash, "necessity paid in cash"),
        (true, false) => (weights.necessity_installments, "necessity paid over time"),
        (false, true) => (weights.desire_cash, "desire paid in cash"),
        (false, false) => (weights.desire_installments, "desire paid over time"),
    };
    component(ScoringRule::PaymentMethod, points, note.to_string())
}

fn interest_free_installments(answer: &PurchaseAnswer, config: &ScoringConfig) -> ScoreComponent {
    if answer.pays_in_installments() && !answer.installments_have_interest {
        component(
            ScoringRule::InterestFreeInstallments,
            config.interest_free_installments.interest_free,
            "installments without interest".to_string(),
        )
    } else if answer.pays_in_installments() {
        component(
            ScoringRule::InterestFreeInstallments,
            0,
            "installments carry interest".to_string(),
        )
    } else {
        component(
            ScoringRule::InterestFreeInstallments,
            0,
            "no installments".to_string(),
        )
    }
}

fn cheaper_alternative(answer: &PurchaseAnswer, config: &ScoringConfig) -> ScoreComponent {
    let weights = &config.alternative;
    let (points, note) = match answer.cheaper_alternative_exists {
        AlternativeAnswer::No => (weights.no, "no cheaper alternative"),
        AlternativeAnswer::Undecided => (weights.undecided, "alternatives not considered"),
        AlternativeAnswer::Yes => (weights.yes, "a cheaper alternative exists"),
    };
    component(ScoringRule::CheaperAlternative, points, note.to_string())
}

fn can_wait(answer: &PurchaseAnswer, config: &ScoringConfig) -> ScoreComponent {
    let weights = &config.can_wait;
    let (points, note) = match answer.can_wait_one_week {
        WaitAnswer::Yes => (weights.yes, "can wait a week"),
        WaitAnswer::Maybe => (weights.maybe, "might wait a week"),
        WaitAnswer::No => (weights.no, "cannot wait a week"),
    };
    component(ScoringRule::CanWait, points, note.to_string())
}

fn durability(answer: &PurchaseAnswer, config: &ScoringConfig) -> ScoreComponent {
    let weights = &config.durability;
    let points = match answer.expected_lifespan {
        ExpectedLifespan::OverOneYear => weights.over_one_year,
        ExpectedLifespan::SixMonthsToOneYear => weights.six_months_to_one_year,
        ExpectedLifespan::OneToSixMonths => weights.one_to_six_months,
        ExpectedLifespan::UnderOneMonth => weights.under_one_month,
    };
    component(
        ScoringRule::Durability,
        points,
        format!("expected to last {}", answer.expected_lifespan.label().to_lowercase()),
    )
}

fn budget_ratio(answer: &PurchaseAnswer, config: &ScoringConfig) -> ScoreComponent {
    let weights = &config.budget;
    let share = if answer.is_necessity {
        weights.necessity_share
    } else {
        weights.desire_share
    };
    let limit = answer.monthly_income * share;
    let ratio = if answer.cost == 0.0 {
        0.0
    } else {
        answer.cost / limit
    };

    let points = if ratio < weights.low_below_ratio {
        weights.low
    } else if ratio < weights.moderate_below_ratio {
        weights.moderate
    } else if ratio > weights.high_above_ratio {
        weights.high
    } else {
        weights.neutral
    };

    component(
        ScoringRule::BudgetRatio,
        points,
        format!(
            "{:.0}% of the {:.0}% budget share ({limit:.2})",
            ratio * 100.0,
            share * 100.0
        ),
    )
}
