use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{Position, EXPERIENCE};

use super::reveal::Reveal;

#[component]
pub fn ExperiencePage() -> impl IntoView {
    view! {
        <Title text="Experience" />
        <div class="min-h-screen pt-24 pb-16">
            <section class="max-w-5xl mx-auto px-6">
                <Reveal class="text-center mb-16">
                    <h1 class="text-5xl md:text-6xl font-bold mb-4 bg-gradient-to-r from-white to-slate-400 bg-clip-text text-transparent">
                        "Professional Experience"
                    </h1>
                    <p class="text-xl text-slate-400 max-w-2xl mx-auto">
                        "Building AI systems and platforms that make a difference"
                    </p>
                </Reveal>
                <div class="space-y-8">
                    {EXPERIENCE
                        .iter()
                        .map(|position| view! { <PositionCard position=position.clone() /> })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}

#[component]
fn PositionCard(position: Position) -> impl IntoView {
    view! {
        <Reveal class="relative bg-slate-900/50 border border-slate-800 p-8 rounded-xl hover:border-purple-500/50 transition-all">
            <div class=format!(
                "absolute left-0 top-0 h-full w-1 rounded-l-xl bg-gradient-to-b {}",
                position.accent,
            ) />
            <div class="flex flex-col md:flex-row md:items-start md:justify-between gap-2 mb-4">
                <div>
                    <h3 class="text-2xl font-bold text-white">{position.title}</h3>
                    <p class="text-lg text-purple-400">{position.company}</p>
                </div>
                <span class="text-sm text-slate-400 whitespace-nowrap">{position.period}</span>
            </div>
            <p class="text-slate-400 mb-4 italic">{position.description}</p>
            <ul class="space-y-2 mb-6">
                {position
                    .achievements
                    .into_iter()
                    .map(|achievement| {
                        view! {
                            <li class="flex items-start gap-3 text-slate-300">
                                <span class="text-purple-400 mt-1">"▹"</span>
                                <span>{achievement}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="flex flex-wrap gap-2">
                {position
                    .tech
                    .into_iter()
                    .map(|tech| {
                        view! {
                            <span class="px-3 py-1 bg-purple-500/10 border border-purple-500/20 text-purple-300 rounded-full text-xs">
                                {tech}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </Reveal>
    }
}
