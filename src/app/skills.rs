use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::SKILLS;

use super::reveal::Reveal;

#[component]
pub fn SkillsPage() -> impl IntoView {
    view! {
        <Title text="Skills" />
        <div class="min-h-screen pt-24 pb-16">
            <section class="max-w-7xl mx-auto px-6">
                <Reveal class="text-center mb-16">
                    <h1 class="text-5xl md:text-6xl font-bold mb-4 bg-gradient-to-r from-white to-slate-400 bg-clip-text text-transparent">
                        "Skills & Expertise"
                    </h1>
                    <p class="text-xl text-slate-400 max-w-2xl mx-auto">
                        "Technologies and practices I work with daily"
                    </p>
                </Reveal>
                <Reveal class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {SKILLS
                        .iter()
                        .map(|category| {
                            view! {
                                <div class="group bg-slate-900/50 border border-slate-800 p-6 rounded-xl hover:border-purple-500/50 transition-all">
                                    <div class="flex items-center gap-3 mb-4">
                                        <div class="text-3xl group-hover:scale-110 transition-transform">
                                            {category.icon.clone()}
                                        </div>
                                        <h3 class="text-xl font-semibold group-hover:text-purple-400 transition-colors">
                                            {category.title.clone()}
                                        </h3>
                                    </div>
                                    <ul class="space-y-2">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <li class="flex items-center gap-2 text-slate-300 text-sm">
                                                        <span class=format!(
                                                            "w-1.5 h-1.5 rounded-full bg-gradient-to-r {}",
                                                            category.accent,
                                                        ) />
                                                        <span>{skill.clone()}</span>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </Reveal>
            </section>
        </div>
    }
}
