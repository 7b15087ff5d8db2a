//! Browser shell: boot, providers, and routing.
//!
//! # Design
//! - Content and tuning are parsed once at boot; failures degrade to defaults
//!   or an empty start screen and are logged.
//! - The theme session lives in [`ThemeProvider`]; shared overlay and motion
//!   state live in the yewdux [`AppStore`].

use std::rc::Rc;

use gloo::events::EventListener;
use gloo::utils::window;
use tilefolio_content::SiteContent;
use tracing::{error, info};
use web_sys::{Element, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

use crate::components::overlay::DetailOverlay;
use crate::components::page_background::PageBackground;
use crate::core::config::UiConfig;
use crate::core::geometry::{Point, Rect, Viewport};
use crate::core::store::AppStore;
use crate::features::home::HomePage;
use crate::features::sections::SectionPage;

mod logging;
mod preferences;
mod routes;
mod scheduler;
mod style;
mod theme;

pub(crate) use preferences::BrowserStore;
pub(crate) use routes::Route;
pub(crate) use scheduler::BrowserScheduler;
pub(crate) use style::{apply_scroll_lock, set_element_property, set_root_property};
use theme::ThemeProvider;
pub(crate) use theme::use_theme;

/// Parsed content and tuning shared with every page.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct AppCtx {
    pub content: Rc<SiteContent>,
    pub config: Rc<UiConfig>,
}

#[function_component(TilefolioApp)]
fn tilefolio_app() -> Html {
    let config = use_memo(|_| Rc::new(load_config()), ());
    let content = use_memo(|_| load_content().map(Rc::new), ());
    use_reduced_motion_watch();

    let config = (*config).clone();
    let body = match (*content).clone() {
        Some(content) => {
            let context = AppCtx {
                content,
                config: config.clone(),
            };
            html! {
                <ContextProvider<AppCtx> {context}>
                    <Switch<Route> render={switch} />
                    <DetailOverlay />
                </ContextProvider<AppCtx>>
            }
        }
        None => html! { <main class="metro-shell metro-shell--empty" /> },
    };

    html! {
        <ThemeProvider
            tuning={config.theme.clone()}
            storage_key={AttrValue::from(config.storage.theme.clone())}
        >
            <BrowserRouter>
                <PageBackground tint_key={AttrValue::from(config.storage.tile_tint.clone())} />
                {body}
            </BrowserRouter>
        </ThemeProvider>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::Tile { .. } => html! { <HomePage /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
        other => other
            .section()
            .map(|id| html! { <SectionPage {id} /> })
            .unwrap_or_default(),
    }
}

fn load_config() -> UiConfig {
    UiConfig::embedded().unwrap_or_else(|err| {
        error!(error = %err, "ui config rejected; using defaults");
        UiConfig::default()
    })
}

fn load_content() -> Option<SiteContent> {
    match SiteContent::embedded() {
        Ok(content) => Some(content),
        Err(err) => {
            error!(error = %err, "site content failed to load");
            None
        }
    }
}

/// Mirror `prefers-reduced-motion` into the store, live.
#[hook]
fn use_reduced_motion_watch() {
    use_effect_with_deps(
        |_| {
            let listener = window()
                .match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
                .map(|query| {
                    set_reduced_motion(query.matches());
                    let watched = query.clone();
                    EventListener::new(&query, "change", move |_| {
                        set_reduced_motion(watched.matches());
                    })
                });
            move || drop(listener)
        },
        (),
    );
}

fn set_reduced_motion(reduced: bool) {
    Dispatch::<AppStore>::new().reduce_mut(|store| store.reduced_motion = reduced);
}

/// Current window size, or the fallback before layout.
pub(crate) fn viewport() -> Viewport {
    let window = window();
    let width = window.inner_width().ok().and_then(|value| value.as_f64());
    let height = window.inner_height().ok().and_then(|value| value.as_f64());
    match (width, height) {
        (Some(width), Some(height)) => Viewport::new(width, height),
        _ => Viewport::FALLBACK,
    }
}

/// Viewport-relative bounding box of `element`.
pub(crate) fn element_rect(element: &Element) -> Rect {
    let bounds = element.get_bounding_client_rect();
    Rect::new(bounds.left(), bounds.top(), bounds.width(), bounds.height())
}

/// Viewport-relative pointer position of a mouse or pointer event.
pub(crate) fn event_point(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    logging::init_logging();
    info!("tilefolio starting");
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<TilefolioApp>::with_root(root).render();
    } else {
        yew::Renderer::<TilefolioApp>::new().render();
    }
}
