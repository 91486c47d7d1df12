use axum::response::Response;
use serde_json::Value;

use crate::advisor::domain::{
    AlternativeAnswer, ExpectedLifespan, ItemType, PurchaseAnswer, WaitAnswer,
};
use crate::advisor::evaluation::{PurchaseScorer, ScoringConfig};
use crate::advisor::intake::PurchaseForm;

/// The worked boundary case: every cost-driven ratio sits exactly on a cut point.
pub(super) fn boundary_answer() -> PurchaseAnswer {
    PurchaseAnswer {
        item_type: ItemType::Product,
        item_name: "Winter boots".to_string(),
        cost: 100.0,
        is_necessity: true,
        is_cash_payment: true,
        uses_installments: false,
        installments_have_interest: false,
        is_gift: false,
        monthly_income: 2000.0,
        weekly_work_hours: 40.0,
        cheaper_alternative_exists: AlternativeAnswer::No,
        can_wait_one_week: WaitAnswer::No,
        expected_lifespan: ExpectedLifespan::OverOneYear,
    }
}

pub(super) fn impulse_answer() -> PurchaseAnswer {
    PurchaseAnswer {
        item_type: ItemType::Product,
        item_name: "Gaming console".to_string(),
        cost: 900.0,
        is_necessity: false,
        is_cash_payment: false,
        uses_installments: true,
        installments_have_interest: true,
        is_gift: false,
        monthly_income: 2000.0,
        weekly_work_hours: 40.0,
        cheaper_alternative_exists: AlternativeAnswer::Yes,
        can_wait_one_week: WaitAnswer::Yes,
        expected_lifespan: ExpectedLifespan::OneToSixMonths,
    }
}

pub(super) fn scorer() -> PurchaseScorer {
    PurchaseScorer::new(ScoringConfig::default())
}

pub(super) fn spanish_form() -> PurchaseForm {
    PurchaseForm {
        item_type: "Servicio".to_string(),
        item_name: "  Curso de inglés ".to_string(),
        cost: "$1,200".to_string(),
        necessity: "Deseo".to_string(),
        payment: "En cuotas".to_string(),
        installment_interest: Some("No, sin interés".to_string()),
        gift: Some("No".to_string()),
        monthly_income: "2,400".to_string(),
        weekly_work_hours: "45".to_string(),
        cheaper_alternative: "No lo he pensado".to_string(),
        can_wait: "Tal vez".to_string(),
        expected_lifespan: "6 meses a 1 año".to_string(),
    }
}

pub(super) fn answer_json(answer: &PurchaseAnswer) -> Vec<u8> {
    serde_json::to_vec(answer).expect("answer serializes")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
