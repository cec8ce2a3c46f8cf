use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::content::OWNER;

use super::reveal::Reveal;

struct QuickLink {
    name: &'static str,
    path: &'static str,
    icon: &'static str,
    accent: &'static str,
}

const QUICK_LINKS: [QuickLink; 4] = [
    QuickLink {
        name: "View Projects",
        path: "/projects",
        icon: "🚀",
        accent: "from-purple-600 to-pink-600",
    },
    QuickLink {
        name: "My Experience",
        path: "/experience",
        icon: "💼",
        accent: "from-blue-600 to-cyan-600",
    },
    QuickLink {
        name: "Skills & Tech",
        path: "/skills",
        icon: "⚡",
        accent: "from-green-600 to-emerald-600",
    },
    QuickLink {
        name: "Get In Touch",
        path: "/contact",
        icon: "📧",
        accent: "from-orange-600 to-red-600",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <div class="min-h-screen flex items-center pt-24 pb-16">
            <section class="max-w-6xl mx-auto px-6 w-full">
                <Reveal class="text-center">
                    <span class="inline-block px-4 py-2 mb-6 rounded-full bg-purple-500/10 border border-purple-500/30 text-purple-300 text-sm">
                        {OWNER.role}
                    </span>
                    <h1 class="text-5xl md:text-7xl font-bold mb-6">
                        <span class="bg-gradient-to-r from-purple-400 via-pink-400 to-purple-400 bg-clip-text text-transparent">
                            {OWNER.name}
                        </span>
                    </h1>
                    <p class="text-xl md:text-2xl text-slate-300 mb-4 max-w-3xl mx-auto">
                        "Building agent runtimes, tool-calling systems, and RAG retrieval platforms"
                    </p>
                    <p class="text-lg text-slate-400 mb-10">
                        "Evaluation + LLMOps for reliable AI systems"
                    </p>
                    <div class="flex flex-wrap justify-center gap-4 mb-16">
                        <A
                            href="/contact"
                            attr:class="px-8 py-3 rounded-lg font-semibold bg-gradient-to-r from-purple-600 to-pink-600 hover:from-purple-500 hover:to-pink-500 shadow-lg shadow-purple-500/50 transition-all"
                        >
                            "Get In Touch"
                        </A>
                        <A
                            href="/projects"
                            attr:class="px-8 py-3 rounded-lg font-semibold border border-slate-700 hover:border-purple-500/50 hover:bg-slate-800/50 transition-all"
                        >
                            "View My Work"
                        </A>
                    </div>
                </Reveal>
                <Reveal class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    {QUICK_LINKS
                        .into_iter()
                        .map(|link| {
                            view! {
                                <A
                                    href=link.path
                                    attr:class="group block bg-slate-900/50 border border-slate-800 p-6 rounded-xl hover:border-purple-500/50 hover:-translate-y-1 transition-all text-center"
                                >
                                    <div class="text-4xl mb-3 group-hover:scale-110 transition-transform">
                                        {link.icon}
                                    </div>
                                    <h3 class="font-semibold text-slate-200 group-hover:text-purple-400 transition-colors">
                                        {link.name}
                                    </h3>
                                    <div class=format!(
                                        "h-1 w-0 group-hover:w-full mt-3 mx-auto bg-gradient-to-r {} transition-all duration-500 rounded",
                                        link.accent,
                                    ) />
                                </A>
                            }
                        })
                        .collect_view()}
                </Reveal>
            </section>
        </div>
    }
}
