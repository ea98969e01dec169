use yew::prelude::*;
use super::navbar::Navbar;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

/// Page shell: persistent top navigation bar above the routed view.
#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <Navbar />
            <main class="container mx-auto flex-1 p-6">
                { for props.children.iter() }
            </main>
        </div>
    }
}
