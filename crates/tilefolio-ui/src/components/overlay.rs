//! Detail overlay for tiles and projects.
//!
//! # Design
//! - Open/close state lives in the [`AppStore`]; this component mirrors the
//!   `/tile/:key` route into it and applies scroll-lock changes.
//! - Closing a tile overlay navigates home; closing a project overlay stays on
//!   the current page.
//! - The scroll lock is released unconditionally on unmount.

use gloo::events::EventListener;
use gloo::utils::window;
use tilefolio_content::{Project, TileKey, TileLink};
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::{Link, Routable, use_navigator, use_route};
use yewdux::prelude::{Dispatch, use_selector};

use crate::app::{AppCtx, Route, apply_scroll_lock, use_theme};
use crate::components::icon::Icon;
use crate::core::catalog::TileDefinition;
use crate::core::overlay::{OverlayContent, ScrollLock, paragraph_runs};
use crate::core::store::{AppStore, close_overlay, open_overlay};

/// Open the overlay from anywhere and apply the resulting scroll lock.
pub(crate) fn show_overlay(content: OverlayContent) {
    let mut lock = None;
    Dispatch::<AppStore>::new().reduce_mut(|store| lock = open_overlay(store, content));
    if let Some(lock) = lock {
        apply_scroll_lock(lock);
    }
}

/// Close the overlay and release the scroll lock.
pub(crate) fn hide_overlay() {
    let mut lock = ScrollLock::Release;
    Dispatch::<AppStore>::new().reduce_mut(|store| lock = close_overlay(store));
    apply_scroll_lock(lock);
}

#[function_component(DetailOverlay)]
pub(crate) fn detail_overlay() -> Html {
    let content = use_selector(|store: &AppStore| store.overlay.content().cloned());
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let app = use_context::<AppCtx>();
    let theme = use_theme();

    use_effect_with_deps(
        |tile: &Option<TileKey>| {
            match tile {
                Some(key) => show_overlay(OverlayContent::Tile(*key)),
                None => {
                    let showing_tile = Dispatch::<AppStore>::new()
                        .get()
                        .overlay
                        .content()
                        .is_some_and(OverlayContent::is_route_driven);
                    if showing_tile {
                        hide_overlay();
                    }
                }
            }
            || ()
        },
        route.as_ref().and_then(Route::tile_key),
    );

    use_effect_with_deps(
        |_| move || apply_scroll_lock(ScrollLock::Release),
        (),
    );

    let is_tile = (*content).as_ref().is_some_and(OverlayContent::is_route_driven);
    let close = use_callback(
        move |(), is_tile: &bool| {
            hide_overlay();
            if *is_tile {
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Home);
                }
            }
        },
        is_tile,
    );

    {
        let open = content.is_some();
        use_effect_with_deps(
            move |(open, close): &(bool, Callback<()>)| {
                let listener = open.then(|| {
                    let close = close.clone();
                    EventListener::new(&window(), "keydown", move |event| {
                        let escape = event
                            .dyn_ref::<KeyboardEvent>()
                            .is_some_and(|key| key.key() == "Escape");
                        if escape {
                            close.emit(());
                        }
                    })
                });
                move || drop(listener)
            },
            (open, close.clone()),
        );
    }

    let Some(content) = (*content).clone() else {
        return html! {};
    };
    let body = match content {
        OverlayContent::Tile(key) => app.map_or_else(
            || html! {},
            |app| {
                let definition = TileDefinition::resolve(app.content.tiles.get(key), theme.descriptor());
                tile_body(&definition)
            },
        ),
        OverlayContent::Project(project) => project_body(&project),
    };

    html! {
        <div class="detail-overlay" role="presentation">
            <div
                class="detail-overlay__backdrop"
                aria-hidden="true"
                onclick={close.reform(|_: MouseEvent| ())}
            ></div>
            <div
                class="detail-overlay__panel"
                role="dialog"
                aria-modal="true"
                aria-labelledby="detail-overlay-title"
            >
                <button
                    type="button"
                    class="detail-overlay__close"
                    aria-label="Close modal"
                    onclick={close.reform(|_: MouseEvent| ())}
                >
                    {"×"}
                </button>
                {body}
            </div>
        </div>
    }
}

fn tile_body(definition: &TileDefinition) -> Html {
    let style = format!(
        "background: {}; color: {};",
        definition.color, definition.text_color
    );
    let action = definition.link.as_ref().map(|link| match link {
        TileLink::External(href) => html! {
            <a class="detail-overlay__action" href={href.clone()} target="_blank" rel="noreferrer">
                {"Open"}
                <span class="sr-only">{"Opens in a new tab"}</span>
            </a>
        },
        TileLink::Internal(path) => {
            let to = Route::recognize(path).unwrap_or(Route::Home);
            html! {
                <Link<Route> {to} classes={classes!("detail-overlay__action")}>{"Open"}</Link<Route>>
            }
        }
    });
    html! {
        <article class="detail-overlay__tile" {style}>
            <Icon icon={definition.icon} class={classes!("detail-overlay__icon")} />
            <h2 id="detail-overlay-title" class="detail-overlay__title">{definition.title.clone()}</h2>
            {for definition.description.iter().map(|description| html! {
                <p class="detail-overlay__description">{description.clone()}</p>
            })}
            {action.unwrap_or_default()}
        </article>
    }
}

fn project_body(project: &Project) -> Html {
    let sections = if project.details.is_empty() {
        html! {
            <>
                <p class="detail-overlay__summary">{project.summary.clone()}</p>
                <p class="detail-overlay__impact">{project.impact.clone()}</p>
            </>
        }
    } else {
        html! {
            {for project.details.iter().map(|section| html! {
                <section class="detail-overlay__section">
                    <h3>{section.title.clone()}</h3>
                    {for section.content.iter().map(|paragraph| paragraph_html(paragraph))}
                </section>
            })}
        }
    };
    html! {
        <article class="detail-overlay__project">
            <h2 id="detail-overlay-title" class="detail-overlay__title">{project.title.clone()}</h2>
            <ul class="detail-overlay__chips">
                {for project.tech.iter().map(|tech| html! { <li class="chip">{tech.clone()}</li> })}
            </ul>
            {sections}
            {for project.link.iter().map(|href| html! {
                <a class="detail-overlay__action" href={href.clone()} target="_blank" rel="noreferrer">
                    {"View project"}
                    <span class="sr-only">{"Opens in a new tab"}</span>
                </a>
            })}
        </article>
    }
}

fn paragraph_html(paragraph: &str) -> Html {
    html! {
        <p>
            {for paragraph_runs(paragraph).into_iter().map(|run| {
                if run.strong {
                    html! { <strong>{run.text.to_string()}</strong> }
                } else {
                    html! { {run.text.to_string()} }
                }
            })}
        </p>
    }
}
