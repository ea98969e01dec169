use std::rc::Rc;

use churn_common::{
    CustomerForm, FormField, PredictionAction, PredictionRequest, SettleMessages,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::result::ResultSummary;
use crate::api_client::ApiClient;
use crate::common::error::ErrorBanner;
use crate::common::loading::Spinner;
use crate::hooks::use_prediction_call;

const MESSAGES: SettleMessages = SettleMessages::PREDICTION_FORM;

/// Form values, updated one field per input event.
#[derive(Default, PartialEq)]
struct FormState(CustomerForm);

impl Reducible for FormState {
    type Action = (FormField, String);

    fn reduce(self: Rc<Self>, (field, value): Self::Action) -> Rc<Self> {
        let mut form = self.0.clone();
        form.set(field, value);
        Rc::new(Self(form))
    }
}

#[function_component(PredictionForm)]
pub fn prediction_form() -> Html {
    let form = use_reducer(FormState::default);
    let (state, submit) = use_prediction_call(
        |client: ApiClient, request: PredictionRequest| async move {
            client.submit_prediction(&request).await
        },
        MESSAGES,
    );
    let busy = state.is_loading();

    let on_submit = {
        let form = form.clone();
        let state = state.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            match PredictionRequest::from_form(&form.0) {
                Ok(request) => {
                    log::info!("Submitting prediction form");
                    submit.emit(request);
                }
                Err(err) => {
                    log::error!("Prediction form incomplete: {}", err);
                    state.dispatch(PredictionAction::Reject(err.to_string()));
                }
            }
        })
    };

    let numeric_inputs = FormField::NUMERIC.into_iter().map(|field| {
        let oninput = {
            let form = form.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                form.dispatch((field, input.value()));
            })
        };

        html! {
            <div class="form-control">
                <label class="label">
                    <span class="label-text">{field.label()}</span>
                </label>
                <input
                    type="text"
                    inputmode="decimal"
                    id={field.input_id()}
                    name={field.input_id()}
                    class="input input-bordered w-full"
                    value={form.0.get(field).to_string()}
                    {oninput}
                    required={true}
                />
            </div>
        }
    });

    let choice_inputs = FormField::CATEGORICAL.into_iter().map(|field| {
        let onchange = {
            let form = form.clone();
            Callback::from(move |e: Event| {
                if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                    form.dispatch((field, select.value()));
                }
            })
        };
        let current = form.0.get(field);

        html! {
            <div class="form-control">
                <label class="label">
                    <span class="label-text">{field.label()}</span>
                </label>
                <select
                    id={field.input_id()}
                    name={field.input_id()}
                    class="select select-bordered w-full"
                    {onchange}
                    required={true}
                >
                    <option value="" selected={current.is_empty()} disabled={true}>
                        {format!("Select {}", field.label())}
                    </option>
                    { for field.options().into_iter().map(|option| html! {
                        <option value={option} selected={current == option}>{option}</option>
                    }) }
                </select>
            </div>
        }
    });

    let outcome = if let Some(message) = state.error_message(&MESSAGES) {
        html! { <ErrorBanner message={message.to_string()} /> }
    } else if let Some(result) = state.result() {
        html! { <ResultSummary result={result.clone()} /> }
    } else {
        html! {}
    };

    html! {
        <div class="card bg-base-100 shadow max-w-2xl mx-auto">
            <div class="card-body">
                <h2 class="card-title text-3xl mb-4">{"Customer Churn Prediction"}</h2>

                <form onsubmit={on_submit} class="flex flex-col gap-4">
                    { for numeric_inputs }
                    { for choice_inputs }

                    <button type="submit" class="btn btn-primary mt-2" disabled={busy}>
                        if busy {
                            <Spinner />
                        } else {
                            {"Predict Churn"}
                        }
                    </button>
                </form>

                { outcome }
            </div>
        </div>
    }
}
