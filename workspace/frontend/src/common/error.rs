use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: AttrValue,
}

/// Inline error banner shown under a page's controls.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div role="alert" class="alert alert-error mt-6">
            <i class="fas fa-times-circle"></i>
            <span id="error-banner">{&props.message}</span>
        </div>
    }
}
