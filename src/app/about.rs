use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{ACHIEVEMENTS, HIGHLIGHTS};

use super::avatar::DeveloperIllustration;
use super::reveal::Reveal;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About" />
        <div class="min-h-screen pt-24 pb-16">
            <section class="max-w-6xl mx-auto px-6">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center mb-16">
                    <Reveal>
                        <h1 class="text-5xl md:text-6xl font-bold mb-6 bg-gradient-to-r from-white to-slate-400 bg-clip-text text-transparent">
                            "About Me"
                        </h1>
                        <p class="text-lg text-slate-300 mb-4 leading-relaxed">
                            "I'm a GenAI / AI Platform Engineer specializing in building agent runtimes, tool-calling systems, and RAG retrieval platforms."
                        </p>
                        <p class="text-lg text-slate-400 leading-relaxed">
                            "Passionate about creating intelligent systems that solve real-world problems through cutting-edge AI technology and robust engineering practices."
                        </p>
                    </Reveal>
                    <Reveal>
                        <DeveloperIllustration />
                    </Reveal>
                </div>
                <Reveal class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6 mb-16">
                    {HIGHLIGHTS
                        .iter()
                        .map(|item| {
                            view! {
                                <div class="group bg-slate-900/50 border border-slate-800 p-6 rounded-xl hover:border-purple-500/50 transition-all">
                                    <div class="text-4xl mb-4">{item.icon.clone()}</div>
                                    <h3 class="text-lg font-semibold mb-2 group-hover:text-purple-400 transition-colors">
                                        {item.title.clone()}
                                    </h3>
                                    <p class="text-sm text-slate-400">{item.description.clone()}</p>
                                    <div class=format!(
                                        "h-1 w-0 group-hover:w-full mt-4 bg-gradient-to-r {} transition-all duration-500 rounded",
                                        item.accent,
                                    ) />
                                </div>
                            }
                        })
                        .collect_view()}
                </Reveal>
                <Reveal class="bg-slate-900/50 border border-slate-800 p-8 rounded-xl">
                    <h3 class="text-2xl font-bold mb-6">"Proven Execution"</h3>
                    <ul class="space-y-3">
                        {ACHIEVEMENTS
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <li class="flex items-start gap-3 text-slate-300">
                                        <span class="text-purple-400 mt-1">"▹"</span>
                                        <span>{item}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </Reveal>
            </section>
        </div>
    }
}
