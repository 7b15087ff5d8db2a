//! Tile resize menu.
//!
//! # Design
//! - Positioned on the anchor point, centered.
//! - A press outside the menu, another context menu, or Escape asks the owner
//!   to close it.
//! - A transparent backdrop sits under the menu so the dismissing press never
//!   lands on a tile.

use gloo::events::EventListener;
use gloo::utils::window;
use tilefolio_content::TileSize;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, Node};
use yew::prelude::*;

use crate::core::grid::ContextMenuState;

#[derive(Properties, PartialEq)]
pub(crate) struct ContextMenuProps {
    pub state: ContextMenuState,
    pub on_select: Callback<TileSize>,
    pub on_close: Callback<()>,
}

#[function_component(ContextMenu)]
pub(crate) fn context_menu(props: &ContextMenuProps) -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |on_close: &Callback<()>| {
                let target = window();
                let outside = |on_close: Callback<()>, node: NodeRef| {
                    move |event: &Event| {
                        if !contains_target(&node, event) {
                            on_close.emit(());
                        }
                    }
                };
                let pointer = EventListener::new(
                    &target,
                    "pointerdown",
                    outside(on_close.clone(), node.clone()),
                );
                let context = EventListener::new(
                    &target,
                    "contextmenu",
                    outside(on_close.clone(), node),
                );
                let escape = {
                    let on_close = on_close.clone();
                    EventListener::new(&target, "keydown", move |event| {
                        let escaped = event
                            .dyn_ref::<KeyboardEvent>()
                            .is_some_and(|key| key.key() == "Escape");
                        if escaped {
                            on_close.emit(());
                        }
                    })
                };
                move || drop((pointer, context, escape))
            },
            props.on_close.clone(),
        );
    }

    let state = props.state;
    let style = format!(
        "position: fixed; z-index: 41; left: {:.0}px; top: {:.0}px; transform: translate(-50%, -50%);",
        state.anchor.x, state.anchor.y
    );

    let swallow = Callback::from(|event: MouseEvent| {
        event.prevent_default();
        event.stop_propagation();
    });

    html! {
        <>
        <div
            class="tile-context-menu__backdrop"
            aria-hidden="true"
            style="position: fixed; inset: 0; z-index: 40;"
            onclick={swallow.clone()}
            oncontextmenu={swallow}
        ></div>
        <div ref={node} class="tile-context-menu" role="menu" aria-label="Resize tile" {style}>
            {for TileSize::ALL.into_iter().map(|size| {
                let checked = size == state.current_size;
                html! {
                    <button
                        type="button"
                        role="menuitemradio"
                        aria-checked={checked.to_string()}
                        class={classes!("tile-context-menu__item", checked.then_some("is-active"))}
                        onclick={props.on_select.reform(move |_: MouseEvent| size)}
                    >
                        {size.label()}
                    </button>
                }
            })}
        </div>
        </>
    }
}

fn contains_target(node: &NodeRef, event: &Event) -> bool {
    let Some(menu) = node.cast::<Element>() else {
        return false;
    };
    event
        .target()
        .and_then(|target| target.dyn_into::<Node>().ok())
        .is_some_and(|target| menu.contains(Some(&target)))
}
