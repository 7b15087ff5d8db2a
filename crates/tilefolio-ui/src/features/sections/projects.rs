//! Project cards; each opens the detail overlay in place.

use tilefolio_content::Project;
use yew::prelude::*;

use crate::components::overlay::show_overlay;
use crate::core::overlay::OverlayContent;

#[derive(Properties, PartialEq)]
pub(crate) struct ProjectListProps {
    pub projects: Vec<Project>,
}

#[function_component(ProjectList)]
pub(crate) fn project_list(props: &ProjectListProps) -> Html {
    html! {
        <div class="project-grid">
            {for props.projects.iter().map(|project| {
                let onclick = {
                    let project = project.clone();
                    Callback::from(move |_: MouseEvent| {
                        show_overlay(OverlayContent::Project(Box::new(project.clone())));
                    })
                };
                html! {
                    <button type="button" class="project-card" {onclick}>
                        <h3 class="project-card__title">{project.title.clone()}</h3>
                        <p class="project-card__summary">{project.summary.clone()}</p>
                        <ul class="project-card__tech">
                            {for project.tech.iter().map(|tech| html! { <li class="chip">{tech.clone()}</li> })}
                        </ul>
                        <p class="project-card__impact">{project.impact.clone()}</p>
                    </button>
                }
            })}
        </div>
    }
}
