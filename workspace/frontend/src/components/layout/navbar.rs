use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let current = use_route::<Route>();
    let link_class = |route: Route| {
        classes!(
            "btn",
            "btn-ghost",
            (current.as_ref() == Some(&route)).then_some("btn-active")
        )
    };

    html! {
        <div class="navbar bg-primary text-primary-content shadow">
            <div class="flex-1 px-2">
                <span class="text-xl font-bold">{"Churn Prediction App"}</span>
            </div>
            <div class="flex-none">
                <ul class="menu menu-horizontal px-1 gap-2">
                    <li><Link<Route> to={Route::Prediction} classes={link_class(Route::Prediction)}>{"Prediction"}</Link<Route>></li>
                    <li><Link<Route> to={Route::Dashboard} classes={link_class(Route::Dashboard)}>{"Dashboard"}</Link<Route>></li>
                </ul>
            </div>
        </div>
    }
}
