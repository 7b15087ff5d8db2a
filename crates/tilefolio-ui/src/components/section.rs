//! Shared shell for content pages.
//!
//! # Design
//! - Colors come from the tile that links to the section, resolved against
//!   the active theme.
//! - The rail collapses (`data-empty`) when there is neither a kicker nor
//!   aside content.

use tilefolio_content::SectionCopy;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

use crate::app::{Route, use_theme};
use crate::components::icon::Icon;
use crate::core::section::{SECTION_TIP, section_style};

#[derive(Properties, PartialEq)]
pub(crate) struct SectionShellProps {
    pub copy: SectionCopy,
    /// Extra rail content below the facts.
    #[prop_or_default]
    pub aside: Option<Html>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SectionShell)]
pub(crate) fn section_shell(props: &SectionShellProps) -> Html {
    let theme = use_theme();
    let navigator = use_navigator();
    let on_back = Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
    });
    let copy = &props.copy;
    let style = section_style(theme.descriptor(), copy.tile_key);
    let rail_empty = copy.kicker.is_none() && copy.facts.is_empty() && props.aside.is_none();
    let class = classes!(
        "route-section",
        format!("route-section--{}", theme.name.as_str()),
        format!("route-section--{}", copy.id.as_str()),
    );

    html! {
        <section {class} style={style.inline()}>
            <div class="route-section__animation" aria-hidden="true"></div>
            <div class="route-section__backdrop" aria-hidden="true"></div>
            <div class="route-section__ornament" aria-hidden="true"></div>
            <div class="route-section__inner">
                <a href="/" class="route-section__back" aria-label="Back to home" onclick={on_back}>
                    <span aria-hidden="true">{"←"}</span>
                    <span>{"Back"}</span>
                </a>
                <aside class="route-section__rail" data-empty={rail_empty.to_string()}>
                    {for copy.kicker.iter().map(|kicker| html! {
                        <p class="route-section__kicker">{kicker.clone()}</p>
                    })}
                    if !copy.facts.is_empty() {
                        <dl class="route-section__facts">
                            {for copy.facts.iter().map(|fact| html! {
                                <div class="route-section__fact">
                                    <dt>{fact.label.clone()}</dt>
                                    <dd>{fact.value.clone()}</dd>
                                </div>
                            })}
                        </dl>
                    }
                    {props.aside.clone().unwrap_or_default()}
                </aside>
                <div class="route-section__main">
                    <div class="route-section__title-row">
                        {for style.icon.map(|icon| html! {
                            <Icon {icon} class={classes!("route-section__icon")} />
                        })}
                        <h1 class="route-section__title">{copy.title.clone()}</h1>
                    </div>
                    {for copy.description.iter().map(|description| html! {
                        <p class="route-section__description">{description.clone()}</p>
                    })}
                    <p class="route-section__tip">{SECTION_TIP}</p>
                    <div class="route-section__content">
                        { for props.children.iter() }
                    </div>
                </div>
            </div>
        </section>
    }
}
