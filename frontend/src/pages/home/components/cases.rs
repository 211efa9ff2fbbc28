use crate::{
    components::motion::{Reveal, Transition},
    pages::home::{
        components::project_modal::ProjectModal, repository::Project,
        view_model::use_cases_view_model,
    },
    utils::geometry::SectionId,
};
use leptos::*;

#[component]
pub fn Cases() -> impl IntoView {
    let vm = use_cases_view_model();
    let selected = vm.selected;
    let cards = vm
        .projects()
        .into_iter()
        .enumerate()
        .map(|(index, project)| {
            let vm = vm.clone();
            let on_open = Callback::new(move |project: Project| {
                vm.activate(&project);
            });
            view! { <CaseCard project=project index=index on_open=on_open/> }
        })
        .collect_view();

    view! {
        <section id=SectionId::Cases.anchor() class="cases-section">
            <div class="container">
                <Reveal class="section-header">
                    <div class="section-badge">"Our Portfolio"</div>
                    <h2 class="section-title">"Featured Projects"</h2>
                    <p class="section-subtitle">
                        "Explore our successful Telegram Mini Apps and web solutions"
                    </p>
                </Reveal>

                <div class="cases-grid">{cards}</div>
            </div>

            <ProjectModal
                project=Signal::derive(move || selected.get())
                on_close=Callback::new(move |_| selected.set(None))
            />
        </section>
    }
}

#[component]
fn CaseCard(project: Project, index: usize, on_open: Callback<Project>) -> impl IntoView {
    let clicked = project.clone();
    let Project {
        title,
        description,
        category,
        image,
        technologies,
        features,
        ..
    } = project;

    view! {
        <Reveal
            class="case-card"
            transition=Transition::staggered(0.6, index)
            on_click=move |_| on_open.call(clicked.clone())
        >
            <div class="case-card-bg"></div>
            <div class="case-image-wrapper">
                <img src=image alt=title.clone() class="case-image" loading="lazy"/>
            </div>

            <div class="case-content">
                <div class="case-category">{category}</div>
                <h3 class="case-title">{title}</h3>
                <p class="case-description">{description}</p>

                <div class="case-features">
                    {features
                        .into_iter()
                        .map(|feature| view! { <span class="case-feature-tag">{feature}</span> })
                        .collect_view()}
                </div>

                <div class="case-technologies">
                    {technologies
                        .into_iter()
                        .map(|tech| view! { <span class="tech-tag">{tech}</span> })
                        .collect_view()}
                </div>
            </div>
        </Reveal>
    }
}
