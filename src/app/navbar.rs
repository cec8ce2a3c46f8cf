use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location};
use leptos_use::use_window_scroll;

use crate::content::OWNER;
use crate::nav::{is_active, NavItem, NAV_ITEMS};

const SCROLLED_PAST: f64 = 50.0;
const MENU_OPEN_ICON: &str = "M4 6h16M4 12h16M4 18h16";
const MENU_CLOSE_ICON: &str = "M6 18L18 6M6 6l12 12";

#[component]
pub fn Navbar() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| scroll_y.get() > SCROLLED_PAST);
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class=move || {
            if scrolled.get() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-slate-950/95 backdrop-blur-md py-4 border-b border-slate-800 shadow-lg"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 py-6"
            }
        }>
            <div class="max-w-7xl mx-auto px-6 flex justify-between items-center">
                <A
                    href="/"
                    attr:class="text-2xl font-bold bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent hover:scale-105 transition-transform"
                >
                    {OWNER.initials}
                </A>
                <div class="hidden md:flex space-x-1">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|item| view! { <NavLink item=item /> })
                        .collect_view()}
                </div>
                <button
                    class="md:hidden text-slate-400 hover:text-purple-400 transition-colors"
                    aria-label="Toggle navigation"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <svg
                        class="w-6 h-6"
                        fill="none"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        viewBox="0 0 24 24"
                        stroke="currentColor"
                    >
                        <path d=move || {
                            if menu_open.get() { MENU_CLOSE_ICON } else { MENU_OPEN_ICON }
                        } />
                    </svg>
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-slate-950/95 backdrop-blur-md border-t border-slate-800">
                    <div class="px-6 py-4 space-y-2">
                        {NAV_ITEMS
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <div on:click=move |_| set_menu_open.set(false)>
                                        <NavLink item=item mobile=true />
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn NavLink(item: NavItem, #[prop(optional)] mobile: bool) -> impl IntoView {
    let pathname = use_location().pathname;
    let active = move || is_active(item.path, &pathname.get());
    let class = move || {
        let base = if mobile {
            "block px-4 py-2 rounded-lg transition-colors"
        } else {
            "relative px-4 py-2 rounded-lg transition-all"
        };
        let state = match (active(), mobile) {
            (true, true) => "text-purple-400 bg-purple-500/10",
            (true, false) => "text-purple-400 bg-purple-500/10 border border-purple-500/30",
            (false, true) => "text-slate-400 hover:text-purple-400 hover:bg-slate-800/50",
            (false, false) => "text-slate-400 hover:text-purple-400 border border-transparent",
        };
        format!("{base} {state}")
    };

    view! {
        <A href=item.path attr:class=class>
            {item.name}
        </A>
    }
}
