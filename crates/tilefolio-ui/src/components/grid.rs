//! Browser binding for [`GridEngine`].
//!
//! # Design
//! - The engine lives in a hook-owned slot; timers call back into it through a
//!   weak reference so a late timer after unmount is a no-op.
//! - Every handler mutates the engine and re-renders only when the visible
//!   state changed. Parallax frames write straight onto the grid element.
//! - A new generation pass replaces the instance set whenever the theme
//!   changes.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::EventListener;
use gloo::utils::{document, window};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tilefolio_content::{TileKey, TileSize, TileTable};
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::app::{BrowserScheduler, element_rect, event_point, set_element_property, viewport};
use crate::components::context_menu::ContextMenu;
use crate::components::icon::Icon;
use crate::components::tile::{PlaceholderTile, TileCard};
use crate::core::catalog::TileDefinition;
use crate::core::config::GridTuning;
use crate::core::geometry::{Point, Rect};
use crate::core::grid::drag::DragPreview;
use crate::core::grid::effects::{ParallaxOffset, PointerKind, TileGlow};
use crate::core::grid::{Activation, GridEngine, GridTask, GridTaskOutcome, Step};
use crate::core::instances::{InstanceGenerator, InstanceId, placeholder_sizes};
use crate::core::scheduler::TaskHandle;
use crate::core::store::AppStore;
use crate::core::theme::ThemeName;

type BrowserGrid = GridEngine<BrowserScheduler<GridTask>>;
type EngineSlot = Rc<RefCell<Option<BrowserGrid>>>;

#[derive(Properties, PartialEq)]
pub(crate) struct DraggableGridProps {
    pub catalog: Rc<TileTable<TileDefinition>>,
    /// Theme the catalog was resolved for; a change regenerates the grid.
    pub theme: ThemeName,
    pub tuning: GridTuning,
    #[prop_or_default]
    pub glow: bool,
    #[prop_or_default]
    pub glass: bool,
    #[prop_or_default]
    pub retro: bool,
    pub on_activate: Callback<Activation>,
}

/// Shared handles captured by tile and window callbacks.
#[derive(Clone)]
struct GridHandles {
    engine: EngineSlot,
    refresh: UseForceUpdateHandle,
}

impl GridHandles {
    /// Run `f` against the engine; re-render when it reports a change.
    fn update(&self, f: impl FnOnce(&mut BrowserGrid) -> bool) {
        let changed = self.engine.borrow_mut().as_mut().is_some_and(f);
        if changed {
            self.refresh.force_update();
        }
    }

    fn read<R>(&self, f: impl FnOnce(&BrowserGrid) -> R) -> Option<R> {
        self.engine.borrow().as_ref().map(f)
    }
}

#[function_component(DraggableGrid)]
pub(crate) fn draggable_grid(props: &DraggableGridProps) -> Html {
    let engine: EngineSlot = use_mut_ref(|| None::<BrowserGrid>);
    let generator = use_mut_ref(|| InstanceGenerator::new(props.tuning.clone()));
    let refresh = use_force_update();
    let surface = use_node_ref();
    let reduced_motion = use_selector(|store: &AppStore| store.reduced_motion);
    let handles = GridHandles {
        engine: engine.clone(),
        refresh: refresh.clone(),
    };

    if engine.borrow().is_none() {
        let on_fire = task_callback(Rc::downgrade(&engine), refresh.clone(), surface.clone());
        *engine.borrow_mut() = Some(GridEngine::new(
            props.tuning.clone(),
            BrowserScheduler::new(on_fire),
        ));
    }

    {
        let handles = handles.clone();
        use_effect_with_deps(
            move |theme: &ThemeName| {
                let mut rng = browser_rng();
                let batch = generator
                    .borrow_mut()
                    .generate(&mut rng, viewport(), &TileKey::ALL);
                debug!(theme = %theme, count = batch.len(), "grid regenerated");
                handles.update(|engine| {
                    engine.replace_instances(batch);
                    true
                });
                || ()
            },
            props.theme,
        );
    }

    {
        let handles = handles.clone();
        let surface = surface.clone();
        use_effect_with_deps(
            move |reduced: &bool| {
                let reduced = *reduced;
                handles.update(|engine| {
                    engine.set_reduced_motion(reduced);
                    false
                });
                if reduced {
                    write_parallax(&surface, ParallaxOffset::ZERO);
                }
                || ()
            },
            *reduced_motion,
        );
    }

    {
        let handles = handles.clone();
        use_effect_with_deps(
            move |_| {
                let listeners = window_listeners(&handles);
                move || {
                    drop(listeners);
                    if let Some(engine) = handles.engine.borrow_mut().as_mut() {
                        engine.teardown();
                    }
                }
            },
            (),
        );
    }

    let on_select_size = {
        let handles = handles.clone();
        use_callback(
            move |size: TileSize, _| handles.update(|engine| engine.select_size(size)),
            (),
        )
    };
    let on_close_menu = {
        let handles = handles.clone();
        use_callback(
            move |(): (), _| handles.update(GridEngine::close_context_menu),
            (),
        )
    };

    let onpointermove = {
        let handles = handles.clone();
        let surface = surface.clone();
        Callback::from(move |event: PointerEvent| {
            let Some(element) = surface.cast::<Element>() else {
                return;
            };
            let rect = element_rect(&element);
            let kind = PointerKind::from_dom(&event.pointer_type());
            handles.update(|engine| {
                engine.grid_pointer_move(rect, event_point(&event), kind);
                false
            });
        })
    };
    let onpointerleave = {
        let handles = handles.clone();
        Callback::from(move |_: PointerEvent| {
            handles.update(|engine| {
                engine.grid_pointer_leave();
                false
            });
        })
    };

    let engine_ref = engine.borrow();
    let Some(grid) = engine_ref.as_ref() else {
        return html! {};
    };

    let body = if grid.is_empty() {
        html! {
            {for placeholder_sizes(TileKey::COUNT).into_iter().map(|size| html! {
                <PlaceholderTile {size} />
            })}
        }
    } else {
        let glow_supported = props.glow;
        html! {
            {for grid.resolved_tiles(&props.catalog).into_iter().map(|tile| {
                let id = tile.id;
                html! {
                    <TileCard
                        key={id.to_string()}
                        instance_id={AttrValue::from(id.to_string())}
                        definition={tile.definition.clone()}
                        size={tile.size}
                        hidden={tile.hidden}
                        glass={props.glass}
                        retro={props.retro}
                        glow={glow_callback(&handles, glow_supported)}
                        on_press={press_callback(&handles, id)}
                        on_activate={activate_callback(&handles, id, props.catalog.clone(), props.on_activate.clone())}
                        on_context_menu={context_menu_callback(&handles, id)}
                        on_keydown={keydown_callback(&handles, id)}
                    />
                }
            })}
        }
    };

    let dragging = grid.drag_session().is_some();
    let style = (!grid.reduced_motion()).then(|| {
        let range = props.tuning.parallax_range_px;
        format!(
            "transform: translate3d(calc(var(--grid-parallax-x) * {range}px), calc(var(--grid-parallax-y) * {range}px), 0);"
        )
    });
    let menu = grid.context_menu().copied();
    let preview = grid.drag_preview();

    html! {
        <div class="metro-grid-shell" {onpointermove} {onpointerleave}>
            <div
                ref={surface}
                class={classes!("metro-grid", dragging.then_some("metro-grid--dragging"))}
                {style}
                aria-busy={grid.is_empty().then_some("true")}
            >
                {body}
            </div>
            if let Some(state) = menu {
                <ContextMenu {state} on_select={on_select_size} on_close={on_close_menu} />
            }
            {preview.map(|preview| drag_preview(preview, props.catalog.get(preview.key))).unwrap_or_default()}
        </div>
    }
}

fn drag_preview(preview: DragPreview, definition: &TileDefinition) -> Html {
    let rect = preview.rect;
    let style = format!(
        "position: fixed; left: {:.1}px; top: {:.1}px; width: {:.1}px; height: {:.1}px; background: {}; color: {}; pointer-events: none;",
        rect.left, rect.top, rect.width, rect.height, definition.color, definition.text_color
    );
    html! {
        <div
            class={classes!("metro-tile", "metro-tile--preview", format!("metro-tile--{}", preview.size.as_str()))}
            {style}
            aria-hidden="true"
        >
            <Icon icon={definition.icon} class={classes!("metro-tile__icon")} />
            <div class="metro-tile__body">
                <h3 class="metro-tile__title">{definition.title.clone()}</h3>
            </div>
        </div>
    }
}

fn task_callback(
    slot: Weak<RefCell<Option<BrowserGrid>>>,
    refresh: UseForceUpdateHandle,
    surface: NodeRef,
) -> Callback<(TaskHandle, GridTask)> {
    Callback::from(move |(handle, task)| {
        let Some(slot) = slot.upgrade() else {
            return;
        };
        let outcome = slot
            .borrow_mut()
            .as_mut()
            .map_or(GridTaskOutcome::Ignored, |engine| engine.run_task(handle, task));
        match outcome {
            GridTaskOutcome::Reordered | GridTaskOutcome::DragStarted => refresh.force_update(),
            GridTaskOutcome::Parallax(offset) => write_parallax(&surface, offset),
            GridTaskOutcome::Ignored => {}
        }
    })
}

fn write_parallax(surface: &NodeRef, offset: ParallaxOffset) {
    if let Some(element) = surface.cast::<HtmlElement>() {
        for (name, value) in offset.style_vars() {
            set_element_property(&element, name, Some(&value));
        }
    }
}

fn glow_callback(handles: &GridHandles, supported: bool) -> Callback<(Rect, Point), Option<TileGlow>> {
    let handles = handles.clone();
    Callback::from(move |(rect, point)| {
        handles
            .read(|engine| engine.tile_glow(supported, rect, point))
            .flatten()
    })
}

fn press_callback(handles: &GridHandles, id: InstanceId) -> Callback<(PointerEvent, Rect)> {
    let handles = handles.clone();
    Callback::from(move |(event, rect): (PointerEvent, Rect)| {
        handles.update(|engine| {
            engine.press(id, event_point(&event), rect);
            false
        });
    })
}

fn activate_callback(
    handles: &GridHandles,
    id: InstanceId,
    catalog: Rc<TileTable<TileDefinition>>,
    on_activate: Callback<Activation>,
) -> Callback<()> {
    let handles = handles.clone();
    Callback::from(move |()| {
        let activation = handles
            .engine
            .borrow_mut()
            .as_mut()
            .and_then(|engine| engine.activate(id, &catalog));
        if let Some(activation) = activation {
            on_activate.emit(activation);
        }
    })
}

fn context_menu_callback(handles: &GridHandles, id: InstanceId) -> Callback<Point> {
    let handles = handles.clone();
    Callback::from(move |anchor: Point| {
        handles.update(|engine| {
            engine.open_context_menu(id, anchor);
            true
        });
    })
}

fn keydown_callback(handles: &GridHandles, id: InstanceId) -> Callback<(KeyboardEvent, Rect)> {
    let handles = handles.clone();
    Callback::from(move |(event, rect): (KeyboardEvent, Rect)| {
        let dragging = handles
            .read(|engine| engine.drag_session().is_some())
            .unwrap_or_default();
        let step = match event.key().as_str() {
            " " | "Enter" => {
                event.prevent_default();
                handles.update(|engine| engine.toggle_keyboard_drag(id, rect));
                return;
            }
            "Escape" => {
                handles.update(GridEngine::escape);
                return;
            }
            "ArrowLeft" | "ArrowUp" if dragging => Step::Previous,
            "ArrowRight" | "ArrowDown" if dragging => Step::Next,
            _ => return,
        };
        event.prevent_default();
        handles.update(|engine| {
            engine.step_hover(step);
            true
        });
    })
}

/// Window-level listeners: pointer tracking for presses and drags, release,
/// and Escape.
fn window_listeners(handles: &GridHandles) -> [EventListener; 4] {
    let target = window();
    let moved = {
        let handles = handles.clone();
        EventListener::new(&target, "pointermove", move |event| {
            let Some(event) = event.dyn_ref::<PointerEvent>() else {
                return;
            };
            let point = event_point(event);
            let dragging = handles
                .read(|engine| engine.drag_session().is_some())
                .unwrap_or_default();
            if !dragging {
                handles.update(|engine| {
                    engine.pointer_move(point);
                    false
                });
                return;
            }
            let hovered = hovered_attribute(point);
            handles.update(|engine| {
                engine.pointer_move(point);
                let target = hovered.as_deref().and_then(|value| {
                    engine
                        .order()
                        .iter()
                        .copied()
                        .find(|id| id.to_string() == value)
                });
                engine.drag_over(target);
                true
            });
        })
    };
    let released = {
        let handles = handles.clone();
        EventListener::new(&target, "pointerup", move |_| {
            handles.update(|engine| {
                let dragging = engine.drag_session().is_some();
                engine.release();
                dragging && engine.drag_session().is_none()
            });
        })
    };
    let cancelled = {
        let handles = handles.clone();
        EventListener::new(&target, "pointercancel", move |_| {
            handles.update(GridEngine::pointer_cancel);
        })
    };
    let escaped = {
        let handles = handles.clone();
        EventListener::new(&target, "keydown", move |event| {
            let escape = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|key| key.key() == "Escape");
            if escape {
                handles.update(GridEngine::escape);
            }
        })
    };
    [moved, released, cancelled, escaped]
}

/// `data-instance-id` of the tile under `point`, if any.
fn hovered_attribute(point: Point) -> Option<String> {
    #[allow(clippy::cast_possible_truncation)]
    let element = document().element_from_point(point.x as f32, point.y as f32)?;
    element
        .closest("[data-instance-id]")
        .ok()
        .flatten()
        .and_then(|tile| tile.get_attribute("data-instance-id"))
}

fn browser_rng() -> SmallRng {
    SmallRng::seed_from_u64(js_sys::Math::random().to_bits() ^ js_sys::Date::now().to_bits())
}
