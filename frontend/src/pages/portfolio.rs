use yew::prelude::*;

use crate::components::section::RevealSection;
use crate::content::{project_filters, projects_of_kind, Project, ProjectFilter};

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    html! {
        <article class="project-card">
            <img src={project.image} alt={project.title} loading="lazy" />
            <div class="project-body">
                <span class="project-category">{project.category}</span>
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <blockquote>
                    {format!("« {} »", project.testimonial)}
                    <cite>{project.client}</cite>
                </blockquote>
                <div class="project-meta">
                    <span>{format!("Livré en {}", project.delivery_time)}</span>
                    <span class="tech-list">
                        { for project.technologies.iter().map(|tech| html! { <span class="tech">{*tech}</span> }) }
                    </span>
                </div>
            </div>
        </article>
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let filter = use_state(|| None::<&'static str>);

    let filter_button = |option: ProjectFilter| {
        let filter = filter.clone();
        let active = *filter == option.kind;
        let onclick = Callback::from(move |_: MouseEvent| filter.set(option.kind));
        html! {
            <button class={classes!("filter-button", active.then(|| "active"))} {onclick}>
                {option.label}
                <span class="filter-count">{option.count}</span>
            </button>
        }
    };
    let projects = projects_of_kind(*filter);

    html! {
        <div class="portfolio-page">
            <section class="page-hero">
                <h1>{"Portfolio "}<span class="accent">{"sites autonomes"}</span></h1>
                <p>{"Des clients formés et autonomes dans la gestion de leur site."}</p>
            </section>

            <RevealSection title="Réalisations">
                <div class="filter-bar">
                    { for project_filters().into_iter().map(filter_button) }
                </div>
                if projects.is_empty() {
                    <p class="blog-empty">{"Aucun projet dans cette catégorie pour le moment."}</p>
                } else {
                    <div class="project-grid">
                        { for projects.into_iter().map(|project| html! {
                            <ProjectCard project={*project} />
                        }) }
                    </div>
                }
            </RevealSection>
        </div>
    }
}
