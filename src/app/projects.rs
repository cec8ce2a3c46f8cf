use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use crate::projects::{CategoryFilter, Project, ProjectFilter, PROJECTS};

use super::reveal::Reveal;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let filter = RwSignal::new(ProjectFilter::new(PROJECTS.clone()));
    let selected = Memo::new(move |_| filter.with(|f| f.selected()));
    let visible = Memo::new(move |_| {
        filter.with(|f| f.visible_projects().into_iter().cloned().collect::<Vec<_>>())
    });

    view! {
        <Title text="Projects" />
        <div class="min-h-screen pt-24 pb-16 relative z-0">
            <section class="max-w-7xl mx-auto px-6 relative z-10">
                <Reveal class="text-center mb-12">
                    <h1 class="text-5xl md:text-6xl font-bold mb-4 bg-gradient-to-r from-white to-slate-400 bg-clip-text text-transparent">
                        "Projects"
                    </h1>
                    <p class="text-xl text-slate-400 max-w-2xl mx-auto">
                        "Showcasing my work in AI, agent systems, and cloud infrastructure"
                    </p>
                </Reveal>
                <div class="flex justify-center gap-4 mb-12 flex-wrap relative z-10">
                    {CategoryFilter::options()
                        .map(|option| {
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if selected.get() == option {
                                            "px-6 py-2 rounded-lg font-medium transition-all bg-gradient-to-r from-purple-600 to-pink-600 text-white shadow-lg shadow-purple-500/50 hover:from-purple-500 hover:to-pink-500"
                                        } else {
                                            "px-6 py-2 rounded-lg font-medium transition-all bg-slate-800/50 border border-slate-700 text-slate-400 hover:border-purple-500/50 hover:bg-slate-800 hover:text-slate-300"
                                        }
                                    }
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        filter.update(|f| f.select_category(option));
                                    }
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {move || {
                        let projects = visible.get();
                        if projects.is_empty() {
                            Either::Left(
                                view! {
                                    <div class="col-span-full text-center py-12">
                                        <p class="text-slate-400 text-lg">
                                            "No projects found in this category."
                                        </p>
                                    </div>
                                },
                            )
                        } else {
                            Either::Right(
                                projects
                                    .into_iter()
                                    .map(|project| view! { <ProjectCard project=project /> })
                                    .collect_view(),
                            )
                        }
                    }}
                </div>
            </section>
        </div>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="group bg-slate-900/50 border border-slate-800 p-6 rounded-xl hover:border-purple-500/50 transition-all hover:-translate-y-2">
            <div class="text-5xl mb-4 group-hover:scale-110 transition-transform duration-300">
                {project.icon}
            </div>
            <h3 class="text-xl font-semibold mb-2 text-white group-hover:text-purple-400 transition-colors">
                {project.title}
            </h3>
            <p class="text-slate-400 text-sm mb-4 leading-relaxed">{project.description}</p>
            <div class="flex flex-wrap gap-2 mb-4">
                {project
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
            <div class=format!(
                "h-1 w-0 group-hover:w-full bg-gradient-to-r {} transition-all duration-500 rounded",
                project.accent,
            ) />
        </div>
    }
}
