use std::cell::RefCell;
use std::future::Future;
use std::ops::Deref;
use std::rc::Rc;

use churn_common::{PredictionAction, PredictionOutcome, PredictionState, SettleMessages};
use yew::prelude::*;

use crate::api_client::ApiClient;
use crate::settings;

/// Tracks whether the calling component is still mounted.
///
/// Requests are not cancelled on navigation, so a response may arrive after
/// its page is gone; callers check this flag before touching page state.
#[hook]
pub fn use_is_mounted() -> Rc<RefCell<bool>> {
    let mounted = use_mut_ref(|| false);

    {
        let mounted = mounted.clone();
        use_effect_with((), move |_| {
            *mounted.borrow_mut() = true;
            move || {
                *mounted.borrow_mut() = false;
            }
        });
    }

    mounted
}

/// A page's [`PredictionState`] together with the messages it settles with.
pub struct PageRequest {
    current: PredictionState,
    messages: SettleMessages,
}

impl Reducible for PageRequest {
    type Action = PredictionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self {
            current: self.current.apply(action, &self.messages),
            messages: self.messages,
        })
    }
}

impl Deref for PageRequest {
    type Target = PredictionState;

    fn deref(&self) -> &Self::Target {
        &self.current
    }
}

/// Drives one page's prediction request through [`PredictionState`].
///
/// Returns the state handle and a callback that starts a call with the given
/// input. Every emit dispatches `Begin` and then exactly one `Settle`.
/// Overlapping calls are allowed; the last one to resolve wins.
#[hook]
pub fn use_prediction_call<I, F, Fut>(
    call: F,
    messages: SettleMessages,
) -> (UseReducerHandle<PageRequest>, Callback<I>)
where
    I: 'static,
    F: Fn(ApiClient, I) -> Fut + 'static,
    Fut: Future<Output = PredictionOutcome> + 'static,
{
    let state = use_reducer(move || PageRequest {
        current: PredictionState::default(),
        messages,
    });
    let client = use_context::<ApiClient>().unwrap_or_else(|| {
        log::warn!("No ApiClient in context, falling back to global settings");
        ApiClient::from_settings(&settings::get_settings())
    });
    let call = use_state(|| Rc::new(call));
    let mounted = use_is_mounted();

    let trigger = {
        let state = state.clone();

        use_callback((), move |input: I, _| {
            let state = state.clone();
            let call = call.clone();
            let client = client.clone();
            let mounted = mounted.clone();

            state.dispatch(PredictionAction::Begin);

            wasm_bindgen_futures::spawn_local(async move {
                let outcome = (*call)(client, input).await;

                if !*mounted.borrow() {
                    log::debug!("Page torn down before the response arrived, ignoring it");
                    return;
                }

                state.dispatch(PredictionAction::Settle(outcome));
            });
        })
    };

    (state, trigger)
}
