mod about;
mod avatar;
mod contact;
mod experience;
mod homepage;
mod navbar;
mod projects;
mod reveal;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::contact::relay::RelayConfig;
use crate::content::OWNER;

use about::AboutPage;
use contact::ContactPage;
use experience::ExperiencePage;
use homepage::HomePage;
use navbar::Navbar;
use projects::ProjectsPage;
use skills::SkillsPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-slate-950 text-white antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(RelayConfig::from_build_env(OWNER.email));

    view! {
        <Title formatter=|title| format!("{} - {title}", OWNER.name) />
        <Router>
            <Navbar />
            <main class="flex flex-col flex-grow w-full">
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/projects") view=ProjectsPage />
                    <Route path=path!("/experience") view=ExperiencePage />
                    <Route path=path!("/skills") view=SkillsPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Not Found" />
        <div class="min-h-screen flex flex-col items-center justify-center gap-6 px-6 text-center">
            <h1 class="text-5xl font-bold">"404"</h1>
            <p class="text-xl text-slate-400">"This page doesn't exist."</p>
            <A
                href="/"
                attr:class="px-6 py-3 rounded-lg bg-purple-600 hover:bg-purple-500 transition-colors"
            >
                "Back home"
            </A>
        </div>
    }
}
