use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::dashboard::Dashboard;
use crate::components::layout::layout::Layout;
use crate::components::prediction::PredictionForm;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Prediction,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Prediction => {
            log::trace!("Rendering Prediction page");
            html! { <Layout><PredictionForm /></Layout> }
        }
        Route::Dashboard => {
            log::trace!("Rendering Dashboard page");
            html! { <Layout><Dashboard /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! {
                <Layout>
                    <div class="card bg-base-100 shadow">
                        <div class="card-body items-center text-center">
                            <h1 class="card-title text-2xl">{"404 Not Found"}</h1>
                            <Link<Route> to={Route::Prediction} classes="btn btn-primary mt-4">
                                {"Back to Prediction"}
                            </Link<Route>>
                        </div>
                    </div>
                </Layout>
            }
        }
    }
}
