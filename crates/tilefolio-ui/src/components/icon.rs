//! Themed icon rendering.

use yew::prelude::*;

use crate::core::icons::{IconRef, pixel_cells};

#[derive(Properties, PartialEq)]
pub(crate) struct IconProps {
    pub icon: IconRef,
    #[prop_or_default]
    pub class: Classes,
}

/// Iconify glyph span, or an 8x8 SVG for pixel icons.
#[function_component(Icon)]
pub(crate) fn icon(props: &IconProps) -> Html {
    match props.icon {
        IconRef::Glyph { .. } => html! {
            <span class={classes!(props.icon.css_class(), props.class.clone())} aria-hidden="true"></span>
        },
        IconRef::Pixel(pattern) => html! {
            <svg
                class={classes!("pixel-icon", props.class.clone())}
                viewBox="0 0 8 8"
                fill="currentColor"
                shape-rendering="crispEdges"
                aria-hidden="true"
            >
                {for pixel_cells(pattern).into_iter().map(|(column, row)| html! {
                    <rect x={column.to_string()} y={row.to_string()} width="1" height="1" />
                })}
            </svg>
        },
    }
}
