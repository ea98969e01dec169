use churn_common::charts::dashboard_charts;
use churn_common::{ChartId, SettleMessages};
use yew::prelude::*;

use super::chart::ChartPanel;
use crate::api_client::ApiClient;
use crate::common::error::ErrorBanner;
use crate::common::loading::{LoadingSize, Spinner};
use crate::components::prediction::ResultSummary;
use crate::hooks::use_prediction_call;

const MESSAGES: SettleMessages = SettleMessages::DASHBOARD;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let (state, refresh) = use_prediction_call(
        |client: ApiClient, _: ()| async move { client.fetch_latest_prediction().await },
        MESSAGES,
    );
    let enlarged = use_state(|| None::<ChartId>);

    // Fetch on mount
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let on_refresh = {
        let refresh = refresh.clone();
        Callback::from(move |_: MouseEvent| {
            log::debug!("Dashboard refresh triggered");
            refresh.emit(());
        })
    };

    let on_chart_click = {
        let enlarged = enlarged.clone();
        Callback::from(move |id: ChartId| {
            enlarged.set(ChartId::toggle(*enlarged, id));
        })
    };

    let body = if let Some(message) = state.error_message(&MESSAGES) {
        html! { <ErrorBanner message={message.to_string()} /> }
    } else if let Some(result) = state.shown_result() {
        // While a refresh is in flight the previous charts stay up
        html! {
            <>
                <ResultSummary result={result.clone()} />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 mt-6">
                    { for dashboard_charts(result).into_iter().map(|series| {
                        let key = series.id.dom_id();
                        let is_enlarged = *enlarged == Some(series.id);
                        html! {
                            <ChartPanel
                                {key}
                                series={series}
                                enlarged={is_enlarged}
                                on_click={on_chart_click.clone()}
                            />
                        }
                    }) }
                </div>
            </>
        }
    } else if state.is_loading() {
        html! {
            <div class="flex justify-center items-center py-12">
                <Spinner size={LoadingSize::Large} />
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title text-3xl justify-center mb-4">{"Churn Prediction Dashboard"}</h2>

                <button class="btn btn-primary w-full" onclick={on_refresh}>
                    if state.is_loading() {
                        <Spinner />
                    }
                    {"Get Latest Prediction"}
                </button>

                { body }
            </div>
        </div>
    }
}
