use churn_common::PredictionResult;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResultSummaryProps {
    pub result: PredictionResult,
}

/// Prediction label and probability, shared by the form and the dashboard.
#[function_component(ResultSummary)]
pub fn result_summary(props: &ResultSummaryProps) -> Html {
    let result = &props.result;
    let (alert_class, icon) = if result.is_churn() {
        ("alert-warning", "fas fa-exclamation-triangle")
    } else {
        ("alert-success", "fas fa-check-circle")
    };

    html! {
        <div class={classes!("alert", alert_class, "mt-6")}>
            <i class={icon}></i>
            <div class="flex flex-col">
                <span class="text-lg font-semibold" id="prediction-label">
                    {format!("Prediction: {}", result.label())}
                </span>
                <span class="text-lg" id="prediction-probability">
                    {format!("Probability: {}", result.probability_text())}
                </span>
            </div>
        </div>
    }
}
