use crate::infra::load_scorer;
use clap::Args;
use purchase_advisor::advisor::{
    EvaluationSummary, PurchaseAnswer, PurchaseForm, PurchaseScorer, ScoreResult,
};
use purchase_advisor::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Product or service (Producto/Servicio accepted)
    #[arg(long, default_value = "Product")]
    pub(crate) item_type: String,
    /// What you are considering buying
    #[arg(long, default_value = "")]
    pub(crate) item_name: String,
    /// Price of the item
    #[arg(long)]
    pub(crate) cost: String,
    /// Necessity or desire (Necesidad/Deseo accepted)
    #[arg(long)]
    pub(crate) necessity: String,
    /// Cash or installments (Al contado/En cuotas accepted)
    #[arg(long)]
    pub(crate) payment: String,
    /// Whether the installments carry interest; required for installment payments
    #[arg(long)]
    pub(crate) installment_interest: Option<String>,
    /// Whether the purchase is a gift for someone else
    #[arg(long)]
    pub(crate) gift: Option<String>,
    /// Approximate monthly income
    #[arg(long)]
    pub(crate) monthly_income: String,
    /// Hours worked per week
    #[arg(long)]
    pub(crate) weekly_work_hours: String,
    /// Is there a cheaper alternative? (No / Undecided / Yes)
    #[arg(long)]
    pub(crate) cheaper_alternative: String,
    /// Could you wait one week? (Yes / Maybe / No)
    #[arg(long)]
    pub(crate) can_wait: String,
    /// Expected lifespan (e.g. "1 to 6 months" or OverOneYear)
    #[arg(long)]
    pub(crate) expected_lifespan: String,
    /// JSON scoring policy (overrides APP_SCORING_CONFIG)
    #[arg(long)]
    pub(crate) scoring_config: Option<PathBuf>,
    /// Print the score result as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

impl EvaluateArgs {
    fn form(&self) -> PurchaseForm {
        PurchaseForm {
            item_type: self.item_type.clone(),
            item_name: self.item_name.clone(),
            cost: self.cost.clone(),
            necessity: self.necessity.clone(),
            payment: self.payment.clone(),
            installment_interest: self.installment_interest.clone(),
            gift: self.gift.clone(),
            monthly_income: self.monthly_income.clone(),
            weekly_work_hours: self.weekly_work_hours.clone(),
            cheaper_alternative: self.cheaper_alternative.clone(),
            can_wait: self.can_wait.clone(),
            expected_lifespan: self.expected_lifespan.clone(),
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// JSON scoring policy (overrides APP_SCORING_CONFIG)
    #[arg(long)]
    pub(crate) scoring_config: Option<PathBuf>,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let scorer = load_scorer(args.scoring_config.clone())?;
    let answer = args.form().into_answer()?;
    let result = scorer.evaluate(&answer)?;

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Score result unavailable: {err}"),
        }
    } else {
        println!("{}", EvaluationSummary::new(&answer, &result));
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let scorer = load_scorer(args.scoring_config)?;

    println!("Purchase advisor demo");
    for (title, form) in demo_purchases() {
        println!("\n== {title}");
        match score_form(&scorer, form) {
            Ok((answer, result)) => {
                println!("{}", EvaluationSummary::new(&answer, &result));
                println!("Score components:");
                for component in &result.components {
                    println!(
                        "  - {:?}: {:+} ({})",
                        component.rule, component.points, component.note
                    );
                }
            }
            Err(err) => println!("  Evaluation rejected: {err}"),
        }
    }

    Ok(())
}

fn score_form(
    scorer: &PurchaseScorer,
    form: PurchaseForm,
) -> Result<(PurchaseAnswer, ScoreResult), AppError> {
    let answer = form.into_answer()?;
    let result = scorer.evaluate(&answer)?;
    Ok((answer, result))
}

fn household_form() -> PurchaseForm {
    PurchaseForm {
        item_type: "Producto".to_string(),
        gift: Some("No".to_string()),
        monthly_income: "2,400".to_string(),
        weekly_work_hours: "40".to_string(),
        ..PurchaseForm::default()
    }
}

pub(crate) fn demo_purchases() -> Vec<(&'static str, PurchaseForm)> {
    vec![
        (
            "Replacement winter boots",
            PurchaseForm {
                item_name: "Winter boots".to_string(),
                cost: "90".to_string(),
                necessity: "Necesidad".to_string(),
                payment: "Al contado".to_string(),
                cheaper_alternative: "No".to_string(),
                can_wait: "No".to_string(),
                expected_lifespan: "Más de 1 año".to_string(),
                ..household_form()
            },
        ),
        (
            "Concert tickets",
            PurchaseForm {
                item_type: "Servicio".to_string(),
                item_name: "Concert tickets".to_string(),
                cost: "100".to_string(),
                necessity: "Deseo".to_string(),
                payment: "Al contado".to_string(),
                cheaper_alternative: "Sí".to_string(),
                can_wait: "Sí".to_string(),
                expected_lifespan: "Menos de 1 mes".to_string(),
                ..household_form()
            },
        ),
        (
            "Phone upgrade on installments",
            PurchaseForm {
                item_name: "Phone upgrade".to_string(),
                cost: "1,100".to_string(),
                necessity: "Deseo".to_string(),
                payment: "En cuotas".to_string(),
                installment_interest: Some("Sí, con interés".to_string()),
                cheaper_alternative: "Sí".to_string(),
                can_wait: "Tal vez".to_string(),
                expected_lifespan: "Más de 1 año".to_string(),
                ..household_form()
            },
        ),
    ]
}
