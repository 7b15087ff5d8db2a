//! Section page dispatch and the generic body.

use tilefolio_content::{ContentItem, SectionCopy, SectionId};
use yew::prelude::*;

use crate::app::AppCtx;
use crate::components::section::SectionShell;
use crate::features::sections::about::AboutBody;
use crate::features::sections::contact::ContactForm;
use crate::features::sections::projects::ProjectList;

#[derive(Properties, PartialEq)]
pub(crate) struct SectionPageProps {
    pub id: SectionId,
}

#[function_component(SectionPage)]
pub(crate) fn section_page(props: &SectionPageProps) -> Html {
    let Some(app) = use_context::<AppCtx>() else {
        return html! {};
    };
    let Some(copy) = app.content.section(props.id).cloned() else {
        tracing::warn!(section = %props.id, "no copy for section");
        return html! {};
    };

    let (aside, extra) = match props.id {
        SectionId::About => (
            None,
            html! { <AboutBody testimonials={app.content.testimonials.clone()} /> },
        ),
        SectionId::Projects => (
            None,
            html! { <ProjectList projects={app.content.projects.clone()} /> },
        ),
        SectionId::Contact => (
            Some(html! {
                <a class="route-section__mail" href={format!("mailto:{}", app.content.contact.email)}>
                    {app.content.contact.email.clone()}
                </a>
            }),
            html! { <ContactForm settings={app.content.contact.clone()} /> },
        ),
        SectionId::Resume | SectionId::Skills | SectionId::Blog => (None, html! {}),
    };

    html! {
        <SectionShell copy={copy.clone()} {aside}>
            {generic_body(&copy)}
            {extra}
        </SectionShell>
    }
}

fn generic_body(copy: &SectionCopy) -> Html {
    html! {
        <>
            {for copy.paragraphs.iter().map(|paragraph| html! {
                <p class="route-section__paragraph">{paragraph.clone()}</p>
            })}
            if !copy.items.is_empty() {
                <ul class="route-section__items">
                    {for copy.items.iter().map(item)}
                </ul>
            }
        </>
    }
}

fn item(entry: &ContentItem) -> Html {
    html! {
        <li class="route-section__item">
            <h3>{entry.title.clone()}</h3>
            {for entry.subtitle.iter().map(|subtitle| html! {
                <p class="route-section__item-subtitle">{subtitle.clone()}</p>
            })}
            {for entry.detail.iter().map(|detail| html! {
                <p class="route-section__item-detail">{detail.clone()}</p>
            })}
            if !entry.tags.is_empty() {
                <ul class="route-section__tags">
                    {for entry.tags.iter().map(|tag| html! { <li class="chip">{tag.clone()}</li> })}
                </ul>
            }
        </li>
    }
}
