//! Page background tint handed off by the last activated tile.

use yew::prelude::*;
use yew_router::prelude::use_location;

use crate::app::{BrowserStore, set_root_property};
use crate::core::preferences::TintHandoff;

const PAGE_BACKGROUND_VAR: &str = "--metro-page-bg";

#[derive(Properties, PartialEq)]
pub(crate) struct PageBackgroundProps {
    /// Session storage key of the handoff.
    pub tint_key: AttrValue,
}

/// Reads the handoff once per route change and clears it.
#[function_component(PageBackground)]
pub(crate) fn page_background(props: &PageBackgroundProps) -> Html {
    let path = use_location().map(|location| location.path().to_string());
    let key = props.tint_key.clone();
    use_effect_with_deps(
        move |_| {
            let tint = TintHandoff::new(BrowserStore::Session, key.as_str()).take();
            set_root_property(PAGE_BACKGROUND_VAR, tint.as_deref());
            || ()
        },
        path,
    );
    html! {}
}
