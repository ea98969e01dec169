use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub size: LoadingSize,
}

#[derive(Clone, PartialEq, Default)]
pub enum LoadingSize {
    #[default]
    Small,
    Large,
}

impl LoadingSize {
    fn class(&self) -> &'static str {
        match self {
            LoadingSize::Small => "loading-sm",
            LoadingSize::Large => "loading-lg",
        }
    }
}

/// Busy indicator; buttons swap their label for it while a call is in flight.
#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    html! {
        <span class={classes!("loading", "loading-spinner", props.size.class())}></span>
    }
}
