use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Fades its children in the first time they scroll into view.
#[component]
pub fn Reveal(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(el);
    let (revealed, set_revealed) = signal(false);

    // latch: once shown, stays shown
    Effect::new(move |_| {
        if visible.get() {
            set_revealed.set(true);
        }
    });

    view! {
        <div
            node_ref=el
            class=move || {
                let state = if revealed.get() { "revealed" } else { "" };
                format!("reveal {state} {class}")
            }
        >
            {children()}
        </div>
    }
}
