//! Single grid tile.
//!
//! # Design
//! - Stateless with respect to the grid: every gesture is forwarded to the
//!   owner through callbacks.
//! - Glow variables are written straight onto the element so pointer moves do
//!   not re-render the grid.

use tilefolio_content::{GridSpan, TileLink, TileSize};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::app::{element_rect, event_point, set_element_property};
use crate::components::icon::Icon;
use crate::core::catalog::TileDefinition;
use crate::core::geometry::{Point, Rect};
use crate::core::grid::effects::TileGlow;

const RETRO_TITLE_STYLE: &str = "font-size: 6px; letter-spacing: 0.35em;";
const RETRO_DESCRIPTION_STYLE: &str = "font-size: 6px; letter-spacing: 0.28em;";

#[derive(Properties, PartialEq)]
pub(crate) struct TileCardProps {
    pub instance_id: AttrValue,
    pub definition: TileDefinition,
    pub size: TileSize,
    #[prop_or_default]
    pub hidden: bool,
    #[prop_or_default]
    pub glass: bool,
    #[prop_or_default]
    pub retro: bool,
    /// Glow for a pointer position; `None` when effects are off.
    pub glow: Callback<(Rect, Point), Option<TileGlow>>,
    pub on_press: Callback<(PointerEvent, Rect)>,
    pub on_activate: Callback<()>,
    pub on_context_menu: Callback<Point>,
    pub on_keydown: Callback<(KeyboardEvent, Rect)>,
}

#[function_component(TileCard)]
pub(crate) fn tile_card(props: &TileCardProps) -> Html {
    let node = use_node_ref();
    let definition = &props.definition;

    let onpointermove = {
        let node = node.clone();
        let glow = props.glow.clone();
        Callback::from(move |event: PointerEvent| {
            let Some(element) = node.cast::<HtmlElement>() else {
                return;
            };
            if let Some(value) = glow.emit((element_rect(&element), event_point(&event))) {
                write_glow(&element, value);
            }
        })
    };
    let onpointerleave = {
        let node = node.clone();
        Callback::from(move |_: PointerEvent| {
            if let Some(element) = node.cast::<HtmlElement>() {
                write_glow(&element, TileGlow::NEUTRAL);
            }
        })
    };
    let onpointerdown = {
        let on_press = props.on_press.clone();
        Callback::from(move |event: PointerEvent| {
            if event.button() != 0 {
                return;
            }
            let rect = event
                .current_target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                .map_or(Rect::new(0.0, 0.0, 0.0, 0.0), |element| element_rect(&element));
            on_press.emit((event, rect));
        })
    };
    let onclick = props.on_activate.reform(|_: MouseEvent| ());
    let oncontextmenu = {
        let on_context_menu = props.on_context_menu.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_context_menu.emit(event_point(&event));
        })
    };
    let onkeydown = {
        let node = node.clone();
        let on_keydown = props.on_keydown.clone();
        Callback::from(move |event: KeyboardEvent| {
            let rect = node
                .cast::<web_sys::Element>()
                .map_or(Rect::new(0.0, 0.0, 0.0, 0.0), |element| element_rect(&element));
            on_keydown.emit((event, rect));
        })
    };

    let external = definition.link.as_ref().is_some_and(TileLink::is_external);
    let class = classes!(
        "metro-tile",
        format!("metro-tile--{}", props.size.as_str()),
        format!("metro-tile--{}", definition.contrast.as_str()),
        props.hidden.then_some("metro-tile--hidden"),
        props.glass.then_some("metro-tile--glass"),
        props.retro.then_some("metro-tile--retro"),
    );
    let style = tile_style(definition, props.size.span(), props.glass, props.hidden);

    html! {
        <div
            ref={node}
            {class}
            {style}
            role={if definition.link.is_some() { "link" } else { "button" }}
            tabindex="0"
            aria-label={definition.title.clone()}
            aria-hidden={props.hidden.then_some("true")}
            data-instance-id={props.instance_id.clone()}
            data-tile-key={definition.key.as_str()}
            {onpointerdown}
            {onpointermove}
            {onpointerleave}
            {onclick}
            {oncontextmenu}
            {onkeydown}
        >
            <span class="metro-tile__glow" aria-hidden="true"></span>
            <Icon icon={definition.icon} class={classes!("metro-tile__icon")} />
            <div class="metro-tile__body">
                <h3
                    class="metro-tile__title"
                    style={props.retro.then_some(RETRO_TITLE_STYLE)}
                >
                    {definition.title.clone()}
                </h3>
                {for definition.description.iter().map(|description| html! {
                    <p
                        class="metro-tile__description"
                        style={props.retro.then_some(RETRO_DESCRIPTION_STYLE)}
                    >
                        {description.clone()}
                    </p>
                })}
            </div>
            if external {
                <span class="sr-only">{"Opens in a new tab"}</span>
            }
        </div>
    }
}

/// Static skeleton shown before the first generation pass.
#[derive(Properties, PartialEq)]
pub(crate) struct PlaceholderTileProps {
    pub size: TileSize,
}

#[function_component(PlaceholderTile)]
pub(crate) fn placeholder_tile(props: &PlaceholderTileProps) -> Html {
    let span = props.size.span();
    html! {
        <div
            class={classes!("metro-tile", "metro-tile--placeholder", format!("metro-tile--{}", props.size.as_str()))}
            style={format!("grid-column: span {}; grid-row: span {};", span.cols, span.rows)}
            aria-hidden="true"
        ></div>
    }
}

fn tile_style(definition: &TileDefinition, span: GridSpan, glass: bool, hidden: bool) -> String {
    let background = if glass {
        format!(
            "background: linear-gradient(135deg, rgba(255,255,255,0.22), rgba(255,255,255,0.06)), {}; backdrop-filter: blur(18px);",
            definition.color
        )
    } else {
        format!("background: {};", definition.color)
    };
    let mut style = format!(
        "grid-column: span {}; grid-row: span {}; color: {}; {background}",
        span.cols, span.rows, definition.text_color
    );
    if hidden {
        style.push_str(" visibility: hidden;");
    }
    style
}

fn write_glow(element: &HtmlElement, glow: TileGlow) {
    for (name, value) in glow.style_vars() {
        set_element_property(element, name, Some(&value));
    }
}
