//! Start screen view.

use gloo::utils::window;
use tracing::warn;
use yew::prelude::*;
use yew_router::prelude::{Routable, use_navigator};

use crate::app::{AppCtx, BrowserStore, Route, use_theme};
use crate::components::grid::DraggableGrid;
use crate::components::header::Header;
use crate::core::catalog::themed_tiles;
use crate::core::grid::Activation;
use crate::core::preferences::TintHandoff;
use crate::core::theme::{ThemeName, descriptor};

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    use_context::<AppCtx>().map_or_else(|| html! {}, |app| html! { <HomeScreen {app} /> })
}

#[derive(Properties, PartialEq)]
struct HomeScreenProps {
    app: AppCtx,
}

#[function_component(HomeScreen)]
fn home_screen(props: &HomeScreenProps) -> Html {
    let theme = use_theme();
    let navigator = use_navigator();
    let app = &props.app;
    let catalog = use_memo(
        |(name, content)| themed_tiles(content, descriptor(*name)),
        (theme.name, app.content.clone()),
    );

    let on_activate = {
        let tint_key = app.config.storage.tile_tint.clone();
        Callback::from(move |activation: Activation| match activation {
            Activation::External(href) => open_external(&href),
            Activation::Navigate { path, tint } => {
                TintHandoff::new(BrowserStore::Session, tint_key.as_str()).write(tint);
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::recognize(&path).unwrap_or(Route::NotFound));
                }
            }
            Activation::Overlay(key) => {
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::tile(key));
                }
            }
        })
    };

    let look = theme.descriptor();
    html! {
        <main class={classes!("metro-shell", format!("metro-shell--{}", theme.name.as_str()))}>
            <Header profile={app.content.profile.clone()} />
            <DraggableGrid
                {catalog}
                theme={theme.name}
                tuning={app.config.grid.clone()}
                glow={look.pointer_glow}
                glass={look.glass_surface}
                retro={theme.name == ThemeName::Retro}
                {on_activate}
            />
        </main>
    }
}

fn open_external(href: &str) {
    if let Err(err) = window().open_with_url_and_target_and_features(href, "_blank", "noopener,noreferrer") {
        warn!(?err, href, "unable to open external link");
    }
}
