//! Draggable tile grid state machine.
//!
//! # Design
//! - [`GridEngine`] exclusively owns the instance map and the grid order.
//! - The order is only ever replaced wholesale: by a committed hover reorder,
//!   a cancelled drag, or a new generation pass.
//! - Deferred work (hover reorder, long-press activation, parallax frames) goes
//!   through a [`TaskScheduler`] and comes back via [`GridEngine::run_task`];
//!   every task carries the handle it was scheduled under, so stale deliveries
//!   are ignored.
//! - Operations naming an id that no longer exists are no-ops.

pub mod drag;
pub mod effects;
pub mod sensor;

use std::collections::HashMap;

use tilefolio_content::{GridSpan, TileKey, TileLink, TileSize, TileTable};
use tracing::{debug, trace};

use crate::core::catalog::TileDefinition;
use crate::core::config::GridTuning;
use crate::core::geometry::{Point, Rect};
use crate::core::instances::{InstanceId, TileInstance};
use crate::core::scheduler::{TaskHandle, TaskScheduler, Timing};

use self::drag::{DragPreview, DragSession, DragSource, PendingHover, move_before};
use self::effects::{ParallaxOffset, ParallaxState, PointerKind, TileGlow};
use self::sensor::{ActivationSensor, Press};

/// Deferred grid work.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridTask {
    /// Sustained hover elapsed; move the dragged tile to `target`.
    CommitReorder {
        /// Hover target.
        target: InstanceId,
    },
    /// Long press elapsed; start a pointer drag.
    ActivateDrag,
    /// Write the latest parallax offset.
    FlushParallax,
}

/// Result of delivering a [`GridTask`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GridTaskOutcome {
    /// Grid order changed.
    Reordered,
    /// A long press turned into a drag.
    DragStarted,
    /// Parallax offset to write.
    Parallax(ParallaxOffset),
    /// Stale, cancelled, or delivered after teardown.
    Ignored,
}

/// Observable grid state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridPhase {
    /// Nothing in progress.
    Idle,
    /// A tile is being dragged with no reorder pending.
    Dragging,
    /// A tile is being dragged and a hover reorder timer is running.
    HoverPendingReorder,
    /// The resize menu is open.
    ContextMenuOpen,
}

/// Open resize menu.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContextMenuState {
    /// Instance being resized.
    pub target: InstanceId,
    /// Its size when the menu opened.
    pub current_size: TileSize,
    /// Screen point the menu is anchored to.
    pub anchor: Point,
}

#[derive(Clone, Debug, PartialEq)]
enum Mode {
    Idle,
    Dragging(DragSession),
    ContextMenu(ContextMenuState),
}

/// Direction for keyboard drags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Towards the start of the order.
    Previous,
    /// Towards the end of the order.
    Next,
}

/// What a primary activation should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Open an absolute URL in a new browsing context.
    External(String),
    /// Navigate in-app, handing the tile color to the next page.
    Navigate {
        /// Route path.
        path: String,
        /// Tile color.
        tint: &'static str,
    },
    /// Open the detail overlay for a tile.
    Overlay(TileKey),
}

/// One instance joined with its themed definition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedTile<'a> {
    /// Instance id.
    pub id: InstanceId,
    /// Themed definition.
    pub definition: &'a TileDefinition,
    /// Instance size, overriding the definition default.
    pub size: TileSize,
    /// Grid span for `size`.
    pub span: GridSpan,
    /// True for the tile being dragged; it keeps its slot but is not painted.
    pub hidden: bool,
}

/// Grid state machine.
#[derive(Debug)]
pub struct GridEngine<S> {
    tuning: GridTuning,
    scheduler: S,
    instances: HashMap<InstanceId, TileInstance>,
    order: Vec<InstanceId>,
    mode: Mode,
    sensor: ActivationSensor,
    parallax: ParallaxState,
    reduced_motion: bool,
    suppress_activation: bool,
    torn_down: bool,
}

impl<S: TaskScheduler<GridTask>> GridEngine<S> {
    /// Empty grid.
    pub fn new(tuning: GridTuning, scheduler: S) -> Self {
        let sensor = ActivationSensor::new(tuning.activation_tolerance_px);
        Self {
            tuning,
            scheduler,
            instances: HashMap::new(),
            order: Vec::new(),
            mode: Mode::Idle,
            sensor,
            parallax: ParallaxState::default(),
            reduced_motion: false,
            suppress_activation: false,
            torn_down: false,
        }
    }

    /// Replace the whole instance set and order with a new generation pass.
    ///
    /// Any drag, press, or open menu belongs to the old set and is dropped.
    pub fn replace_instances(&mut self, batch: Vec<TileInstance>) {
        self.abandon_interactions();
        let order: Vec<InstanceId> = batch.iter().map(|instance| instance.id).collect();
        self.instances = batch
            .into_iter()
            .map(|instance| (instance.id, instance))
            .collect();
        self.order = order;
        debug!(count = self.order.len(), "grid instances replaced");
    }

    /// Current grid order.
    #[must_use]
    pub fn order(&self) -> &[InstanceId] {
        &self.order
    }

    /// Instance by id.
    #[must_use]
    pub fn instance(&self, id: InstanceId) -> Option<&TileInstance> {
        self.instances.get(&id)
    }

    /// Number of living instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True before the first generation pass lands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Observable state.
    #[must_use]
    pub const fn phase(&self) -> GridPhase {
        match &self.mode {
            Mode::Idle => GridPhase::Idle,
            Mode::Dragging(session) if session.pending.is_some() => GridPhase::HoverPendingReorder,
            Mode::Dragging(_) => GridPhase::Dragging,
            Mode::ContextMenu(_) => GridPhase::ContextMenuOpen,
        }
    }

    /// Active drag session.
    #[must_use]
    pub const fn drag_session(&self) -> Option<&DragSession> {
        match &self.mode {
            Mode::Dragging(session) => Some(session),
            _ => None,
        }
    }

    /// Open resize menu.
    #[must_use]
    pub const fn context_menu(&self) -> Option<&ContextMenuState> {
        match &self.mode {
            Mode::ContextMenu(menu) => Some(menu),
            _ => None,
        }
    }

    /// Floating preview for the active drag.
    #[must_use]
    pub fn drag_preview(&self) -> Option<DragPreview> {
        self.drag_session().map(DragSession::preview)
    }

    /// Scheduler, for tests and the browser binding.
    pub const fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Tiles in grid order, resolved against `catalog`.
    #[must_use]
    pub fn resolved_tiles<'a>(
        &self,
        catalog: &'a TileTable<TileDefinition>,
    ) -> Vec<ResolvedTile<'a>> {
        let dragged = self.drag_session().map(DragSession::active);
        self.order
            .iter()
            .filter_map(|id| self.instances.get(id))
            .map(|instance| ResolvedTile {
                id: instance.id,
                definition: catalog.get(instance.key),
                size: instance.size,
                span: instance.size.span(),
                hidden: dragged == Some(instance.id),
            })
            .collect()
    }

    /// Start dragging `id` from `rect`, grabbed at `grab_point`.
    ///
    /// Only starts from idle or an open menu (which it closes). Returns
    /// `false` when the drag did not start.
    pub fn begin_drag(&mut self, id: InstanceId, rect: Rect, grab_point: Point) -> bool {
        self.start_drag(id, rect, grab_point, DragSource::Pointer)
    }

    fn start_drag(
        &mut self,
        id: InstanceId,
        rect: Rect,
        grab_point: Point,
        source: DragSource,
    ) -> bool {
        if self.torn_down || matches!(self.mode, Mode::Dragging(_)) {
            return false;
        }
        let Some(instance) = self.instances.get(&id).copied() else {
            return false;
        };
        if let Some(handle) = self.sensor.abandon() {
            self.scheduler.cancel(handle);
        }
        self.mode = Mode::Dragging(DragSession {
            active: id,
            key: instance.key,
            size: instance.size,
            snapshot: self.order.clone(),
            pending: None,
            origin_rect: rect,
            grab_point,
            pointer: grab_point,
            source,
        });
        self.suppress_activation = true;
        self.cancel_parallax_frame();
        debug!(instance = %id, ?source, "drag started");
        true
    }

    /// Pointer is over `target` (or over nothing) during a drag.
    ///
    /// Hovering a different instance restarts the reorder timer against it;
    /// hovering the same pending target keeps the running timer.
    pub fn drag_over(&mut self, target: Option<InstanceId>) {
        let Mode::Dragging(session) = &mut self.mode else {
            return;
        };
        let target = target.filter(|id| *id != session.active && self.instances.contains_key(id));
        let Some(target) = target else {
            if let Some(pending) = session.pending.take() {
                self.scheduler.cancel(pending.handle);
            }
            return;
        };
        if session.pending.is_some_and(|pending| pending.target == target) {
            return;
        }
        if let Some(pending) = session.pending.take() {
            self.scheduler.cancel(pending.handle);
        }
        let handle = self.scheduler.schedule(
            Timing::After(self.tuning.hover_reorder_delay_ms),
            GridTask::CommitReorder { target },
        );
        session.pending = Some(PendingHover { target, handle });
        trace!(target = %target, "hover reorder scheduled");
    }

    /// Pointer moved to `point` while dragging; updates the preview position.
    pub const fn move_drag_pointer(&mut self, point: Point) {
        if let Mode::Dragging(session) = &mut self.mode {
            session.pointer = point;
        }
    }

    /// Finish the drag, keeping the current order.
    pub fn end_drag(&mut self) -> bool {
        let Mode::Dragging(session) = std::mem::replace(&mut self.mode, Mode::Idle) else {
            return false;
        };
        if let Some(pending) = session.pending {
            self.scheduler.cancel(pending.handle);
        }
        debug!(instance = %session.active, "drag dropped");
        true
    }

    /// Abort the drag, restoring the order captured at drag start.
    pub fn cancel_drag(&mut self) -> bool {
        let Mode::Dragging(session) = std::mem::replace(&mut self.mode, Mode::Idle) else {
            return false;
        };
        if let Some(pending) = session.pending {
            self.scheduler.cancel(pending.handle);
        }
        self.order = session.snapshot;
        debug!(instance = %session.active, "drag cancelled");
        true
    }

    /// Space or Enter on a focused tile: lift it, or drop the tile being dragged.
    pub fn toggle_keyboard_drag(&mut self, id: InstanceId, rect: Rect) -> bool {
        if matches!(self.mode, Mode::Dragging(_)) {
            return self.end_drag();
        }
        self.start_drag(id, rect, rect.center(), DragSource::Keyboard)
    }

    /// Arrow key during a keyboard drag: hover the neighbour of the current
    /// hover target (or of the dragged tile).
    pub fn step_hover(&mut self, step: Step) {
        let Some(session) = self.drag_session() else {
            return;
        };
        let anchor = session.pending_target().unwrap_or(session.active);
        let Some(index) = self.order.iter().position(|id| *id == anchor) else {
            return;
        };
        let next = match step {
            Step::Previous => index.checked_sub(1),
            Step::Next => Some(index + 1).filter(|next| *next < self.order.len()),
        };
        if let Some(next) = next {
            let target = self.order[next];
            self.drag_over(Some(target));
        }
    }

    /// Secondary activation (right click) on `id` at `anchor`.
    ///
    /// Ignored while dragging. While a menu is open it closes the menu instead
    /// of opening another one. Returns `true` when a menu opened.
    pub fn open_context_menu(&mut self, id: InstanceId, anchor: Point) -> bool {
        match self.mode {
            Mode::Dragging(_) => return false,
            Mode::ContextMenu(_) => {
                self.close_context_menu();
                return false;
            }
            Mode::Idle => {}
        }
        let Some(instance) = self.instances.get(&id) else {
            return false;
        };
        self.mode = Mode::ContextMenu(ContextMenuState {
            target: id,
            current_size: instance.size,
            anchor,
        });
        true
    }

    /// Apply `size` to the menu's target and close the menu.
    ///
    /// Only that instance changes; the order is untouched.
    pub fn select_size(&mut self, size: TileSize) -> bool {
        let Some(menu) = self.context_menu().copied() else {
            return false;
        };
        self.mode = Mode::Idle;
        match self.instances.get_mut(&menu.target) {
            Some(instance) => {
                instance.size = size;
                debug!(instance = %menu.target, size = size.as_str(), "tile resized");
                true
            }
            None => false,
        }
    }

    /// Close the menu (outside press, Escape, secondary activation elsewhere).
    pub fn close_context_menu(&mut self) -> bool {
        if matches!(self.mode, Mode::ContextMenu(_)) {
            self.mode = Mode::Idle;
            // The click that dismissed the menu must not reach the tile below.
            self.suppress_activation = true;
            return true;
        }
        false
    }

    /// Escape: cancel a drag or close the menu.
    pub fn escape(&mut self) -> bool {
        match self.mode {
            Mode::Dragging(_) => self.cancel_drag(),
            Mode::ContextMenu(_) => self.close_context_menu(),
            Mode::Idle => false,
        }
    }

    /// Primary pointer press on `id`. Starts the long-press timer.
    ///
    /// A press while the menu is open only dismisses the menu.
    pub fn press(&mut self, id: InstanceId, point: Point, rect: Rect) {
        if self.close_context_menu() {
            return;
        }
        self.suppress_activation = false;
        if self.torn_down
            || matches!(self.mode, Mode::Dragging(_))
            || !self.instances.contains_key(&id)
        {
            return;
        }
        let handle = self.scheduler.schedule(
            Timing::After(self.tuning.activation_delay_ms),
            GridTask::ActivateDrag,
        );
        let replaced = self.sensor.start(Press {
            id,
            origin: point,
            rect,
            handle,
        });
        if let Some(previous) = replaced {
            self.scheduler.cancel(previous);
        }
    }

    /// Pointer moved while pressed or dragging.
    pub fn pointer_move(&mut self, point: Point) {
        if matches!(self.mode, Mode::Dragging(_)) {
            self.move_drag_pointer(point);
            return;
        }
        if let Some(handle) = self.sensor.moved(point) {
            self.scheduler.cancel(handle);
        }
    }

    /// Pointer released: drops a pointer drag, or abandons a pending press.
    pub fn release(&mut self) {
        if let Some(handle) = self.sensor.abandon() {
            self.scheduler.cancel(handle);
        }
        if self
            .drag_session()
            .is_some_and(|session| session.source() == DragSource::Pointer)
        {
            self.end_drag();
        }
    }

    /// The platform cancelled the pointer stream: abandon the press and roll
    /// back a pointer drag to its snapshot. Keyboard drags are left alone.
    pub fn pointer_cancel(&mut self) -> bool {
        if let Some(handle) = self.sensor.abandon() {
            self.scheduler.cancel(handle);
        }
        let pointer_drag = self
            .drag_session()
            .is_some_and(|session| session.source() == DragSource::Pointer);
        pointer_drag && self.cancel_drag()
    }

    /// Primary activation of `id`.
    ///
    /// Returns `None` for the click that ends a drag, while dragging, and for
    /// unknown ids.
    pub fn activate(
        &mut self,
        id: InstanceId,
        catalog: &TileTable<TileDefinition>,
    ) -> Option<Activation> {
        if std::mem::take(&mut self.suppress_activation) {
            return None;
        }
        if matches!(self.mode, Mode::Dragging(_)) {
            return None;
        }
        let instance = self.instances.get(&id)?;
        let definition = catalog.get(instance.key);
        Some(match &definition.link {
            Some(TileLink::External(href)) => Activation::External(href.clone()),
            Some(TileLink::Internal(path)) => Activation::Navigate {
                path: path.clone(),
                tint: definition.color,
            },
            None => Activation::Overlay(instance.key),
        })
    }

    /// Glow for a pointer over a tile; `None` when effects are off.
    #[must_use]
    pub fn tile_glow(&self, theme_supports_glow: bool, rect: Rect, point: Point) -> Option<TileGlow> {
        (theme_supports_glow && !self.reduced_motion).then(|| TileGlow::at(rect, point))
    }

    /// Pointer moved over the grid container occupying `rect`.
    pub fn grid_pointer_move(&mut self, rect: Rect, point: Point, kind: PointerKind) {
        if self.reduced_motion
            || self.torn_down
            || kind == PointerKind::Touch
            || matches!(self.mode, Mode::Dragging(_))
        {
            return;
        }
        if let Some(offset) = ParallaxOffset::at(rect, point) {
            self.request_parallax(offset);
        }
    }

    /// Pointer left the grid container.
    pub fn grid_pointer_leave(&mut self) {
        if self.reduced_motion || self.torn_down {
            return;
        }
        self.request_parallax(ParallaxOffset::ZERO);
    }

    fn request_parallax(&mut self, offset: ParallaxOffset) {
        if self.parallax.request(offset, self.tuning.parallax_epsilon) {
            let handle = self
                .scheduler
                .schedule(Timing::NextFrame, GridTask::FlushParallax);
            self.parallax.set_frame(handle);
        }
    }

    fn cancel_parallax_frame(&mut self) {
        if let Some(handle) = self.parallax.take_frame() {
            self.scheduler.cancel(handle);
        }
    }

    /// Reduced-motion preference changed; enabling it drops pending effects.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
        if reduced {
            self.cancel_parallax_frame();
            self.parallax.reset();
        }
    }

    /// Whether paint effects are disabled.
    #[must_use]
    pub const fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Deliver a scheduled task.
    pub fn run_task(&mut self, handle: TaskHandle, task: GridTask) -> GridTaskOutcome {
        self.scheduler.complete(handle);
        if self.torn_down {
            return GridTaskOutcome::Ignored;
        }
        match task {
            GridTask::CommitReorder { target } => self.commit_reorder(handle, target),
            GridTask::ActivateDrag => {
                let Some(press) = self.sensor.fire(handle) else {
                    return GridTaskOutcome::Ignored;
                };
                if self.begin_drag(press.id, press.rect, press.origin) {
                    GridTaskOutcome::DragStarted
                } else {
                    GridTaskOutcome::Ignored
                }
            }
            GridTask::FlushParallax => self
                .parallax
                .flush(handle)
                .map_or(GridTaskOutcome::Ignored, GridTaskOutcome::Parallax),
        }
    }

    fn commit_reorder(&mut self, handle: TaskHandle, target: InstanceId) -> GridTaskOutcome {
        let Mode::Dragging(session) = &mut self.mode else {
            return GridTaskOutcome::Ignored;
        };
        let current = session
            .pending
            .is_some_and(|pending| pending.handle == handle && pending.target == target);
        if !current {
            return GridTaskOutcome::Ignored;
        }
        session.pending = None;
        match move_before(&self.order, session.active, target) {
            Some(next) => {
                self.order = next;
                debug!(instance = %session.active, target = %target, "hover reorder committed");
                GridTaskOutcome::Reordered
            }
            None => GridTaskOutcome::Ignored,
        }
    }

    fn abandon_interactions(&mut self) {
        if let Mode::Dragging(session) = std::mem::replace(&mut self.mode, Mode::Idle) {
            if let Some(pending) = session.pending {
                self.scheduler.cancel(pending.handle);
            }
        }
        if let Some(handle) = self.sensor.abandon() {
            self.scheduler.cancel(handle);
        }
    }

    /// Cancel every pending task; later deliveries are ignored.
    pub fn teardown(&mut self) {
        self.abandon_interactions();
        self.cancel_parallax_frame();
        self.torn_down = true;
    }
}

#[cfg(test)]
mod tests;
