use super::common::*;
use crate::advisor::domain::{
    AlternativeAnswer, ExpectedLifespan, ItemType, PurchaseAnswer, WaitAnswer,
};
use crate::advisor::evaluation::EvaluationError;
use crate::advisor::intake::{parse_amount, PurchaseForm, UnknownLabel};

fn rejected_field(form: PurchaseForm) -> &'static str {
    match form.into_answer() {
        Err(EvaluationError::InvalidInput { field, .. }) => field,
        Ok(answer) => panic!("expected rejection, got {answer:?}"),
    }
}

#[test]
fn spanish_labels_map_to_canonical_answers() {
    let answer = spanish_form().into_answer().expect("form is valid");

    assert_eq!(answer.item_type, ItemType::Service);
    assert_eq!(answer.item_name, "Curso de inglés");
    assert_eq!(answer.cost, 1200.0);
    assert!(!answer.is_necessity);
    assert!(!answer.is_cash_payment);
    assert!(answer.uses_installments);
    assert!(!answer.installments_have_interest);
    assert!(!answer.is_gift);
    assert_eq!(answer.monthly_income, 2400.0);
    assert_eq!(answer.weekly_work_hours, 45.0);
    assert_eq!(answer.cheaper_alternative_exists, AlternativeAnswer::Undecided);
    assert_eq!(answer.can_wait_one_week, WaitAnswer::Maybe);
    assert_eq!(answer.expected_lifespan, ExpectedLifespan::SixMonthsToOneYear);
}

#[test]
fn interest_label_with_prefix_counts_as_interest() {
    let mut form = spanish_form();
    form.installment_interest = Some("Sí, con interés".to_string());

    let answer = form.into_answer().expect("form is valid");
    assert!(answer.installments_have_interest);
}

#[test]
fn interest_answer_ignored_for_cash_payments() {
    let mut form = spanish_form();
    form.payment = "Al contado".to_string();
    form.installment_interest = Some("not even a label".to_string());

    let answer = form.into_answer().expect("interest is not consulted");
    assert!(answer.is_cash_payment);
    assert!(!answer.uses_installments);
    assert!(!answer.installments_have_interest);
}

#[test]
fn installment_form_requires_an_interest_answer() {
    let mut form = spanish_form();
    form.installment_interest = None;
    assert_eq!(rejected_field(form), "installmentsHaveInterest");

    let mut cash = spanish_form();
    cash.payment = "Al contado".to_string();
    cash.installment_interest = None;
    let answer = cash.into_answer().expect("cash needs no interest answer");
    assert!(!answer.installments_have_interest);
}

#[test]
fn labels_ignore_case_accents_and_separators() {
    assert_eq!("  PRODUCTO ".parse::<ItemType>(), Ok(ItemType::Product));
    assert_eq!("sí".parse::<AlternativeAnswer>(), Ok(AlternativeAnswer::Yes));
    assert_eq!("SI".parse::<WaitAnswer>(), Ok(WaitAnswer::Yes));
    assert_eq!("tal-vez".parse::<WaitAnswer>(), Ok(WaitAnswer::Maybe));
    assert_eq!(
        "Más de 1 año".parse::<ExpectedLifespan>(),
        Ok(ExpectedLifespan::OverOneYear)
    );
    assert_eq!(
        "one_to_six_months".parse::<ExpectedLifespan>(),
        Ok(ExpectedLifespan::OneToSixMonths)
    );
    assert_eq!(
        "UnderOneMonth".parse::<ExpectedLifespan>(),
        Ok(ExpectedLifespan::UnderOneMonth)
    );
    assert_eq!(
        "forever".parse::<ExpectedLifespan>(),
        Err(UnknownLabel("forever".to_string()))
    );
}

#[test]
fn unrecognized_answers_name_the_field() {
    let mut form = spanish_form();
    form.can_wait = "someday".to_string();
    assert_eq!(rejected_field(form), "canWaitOneWeek");

    let mut form = spanish_form();
    form.item_type = "Subscription".to_string();
    assert_eq!(rejected_field(form), "itemType");

    let mut form = spanish_form();
    form.necessity = "kind of".to_string();
    assert_eq!(rejected_field(form), "isNecessity");

    let mut form = spanish_form();
    form.installment_interest = Some("depends".to_string());
    assert_eq!(rejected_field(form), "installmentsHaveInterest");

    let mut form = spanish_form();
    form.gift = Some("perhaps".to_string());
    assert_eq!(rejected_field(form), "isGift");
}

#[test]
fn amounts_must_be_numbers() {
    let mut form = spanish_form();
    form.cost = "twelve".to_string();
    assert_eq!(rejected_field(form), "cost");

    let mut form = spanish_form();
    form.weekly_work_hours = String::new();
    assert_eq!(rejected_field(form), "weeklyWorkHours");
}

#[test]
fn amounts_accept_only_thousands_commas() {
    assert_eq!(parse_amount("cost", "$1,500").ok(), Some(1500.0));
    assert_eq!(parse_amount("cost", "1,234,567.25").ok(), Some(1_234_567.25));
    assert_eq!(parse_amount("cost", "12_000").ok(), Some(12_000.0));
    assert_eq!(parse_amount("cost", " 45 ").ok(), Some(45.0));

    for raw in ["1,5", "1,50", "1,5000", ",500", "1234,567", "1,500,00", "1.5,000"] {
        match parse_amount("cost", raw) {
            Err(EvaluationError::InvalidInput { field, .. }) => assert_eq!(field, "cost"),
            Ok(value) => panic!("'{raw}' parsed as {value}"),
        }
    }

    let mut form = spanish_form();
    form.monthly_income = "2,4".to_string();
    assert_eq!(rejected_field(form), "monthlyIncome");
}

#[test]
fn form_answers_score_like_typed_answers() {
    let answer = spanish_form().into_answer().expect("form is valid");
    let from_form = scorer().evaluate(&answer).expect("valid answer");

    let typed = PurchaseAnswer {
        item_type: ItemType::Service,
        item_name: "Curso de inglés".to_string(),
        cost: 1200.0,
        is_necessity: false,
        is_cash_payment: false,
        uses_installments: true,
        installments_have_interest: false,
        is_gift: false,
        monthly_income: 2400.0,
        weekly_work_hours: 45.0,
        cheaper_alternative_exists: AlternativeAnswer::Undecided,
        can_wait_one_week: WaitAnswer::Maybe,
        expected_lifespan: ExpectedLifespan::SixMonthsToOneYear,
    };
    assert_eq!(answer, typed);
    assert_eq!(from_form, scorer().evaluate(&typed).expect("valid answer"));
}

#[test]
fn abbreviated_json_derives_installment_fields() {
    let answer: PurchaseAnswer = serde_json::from_value(serde_json::json!({
        "itemType": "Product",
        "cost": 300,
        "isNecessity": true,
        "isCashPayment": false,
        "installmentsHaveInterest": true,
        "monthlyIncome": 2000,
        "weeklyWorkHours": 40,
        "cheaperAlternativeExists": "Undecided",
        "canWaitOneWeek": "Maybe",
        "expectedLifespan": "OverOneYear"
    }))
    .expect("abbreviated payload parses");

    assert!(answer.uses_installments);
    assert!(answer.installments_have_interest);
    assert!(answer.item_name.is_empty());
    assert!(!answer.is_gift);
}

#[test]
fn installment_json_requires_an_interest_answer() {
    let mut value = serde_json::to_value(impulse_answer()).expect("answer serializes");
    let fields = value.as_object_mut().expect("answer is an object");
    fields.remove("installmentsHaveInterest");
    fields.remove("usesInstallments");

    let err = serde_json::from_value::<PurchaseAnswer>(value.clone())
        .expect_err("missing interest answer rejected");
    assert!(err.to_string().contains("installmentsHaveInterest"));

    value["usesInstallments"] = serde_json::Value::Bool(false);
    let deferred: PurchaseAnswer =
        serde_json::from_value(value).expect("no installments, no interest answer needed");
    assert!(!deferred.installments_have_interest);
}

#[test]
fn interest_is_cleared_when_installments_are_not_used() {
    let mut value = serde_json::to_value(boundary_answer()).expect("answer serializes");
    value["installmentsHaveInterest"] = serde_json::Value::Bool(true);

    let answer: PurchaseAnswer = serde_json::from_value(value).expect("payload parses");
    assert!(!answer.uses_installments);
    assert!(!answer.installments_have_interest);
}

#[test]
fn unknown_enum_members_fail_to_deserialize() {
    let mut value = serde_json::to_value(boundary_answer()).expect("answer serializes");
    value["expectedLifespan"] = serde_json::Value::String("Forever".to_string());

    assert!(serde_json::from_value::<PurchaseAnswer>(value).is_err());
}
