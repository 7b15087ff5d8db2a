//! Drag session state and order moves.

use tilefolio_content::{TileKey, TileSize};

use crate::core::geometry::{Point, Rect};
use crate::core::instances::InstanceId;
use crate::core::scheduler::TaskHandle;

/// What started the drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragSource {
    /// Long press with a pointer.
    Pointer,
    /// Space or Enter on a focused tile.
    Keyboard,
}

/// Hover target waiting for the reorder delay to elapse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PendingHover {
    pub(crate) target: InstanceId,
    pub(crate) handle: TaskHandle,
}

/// Ephemeral state of one drag gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    pub(crate) active: InstanceId,
    pub(crate) key: TileKey,
    pub(crate) size: TileSize,
    pub(crate) snapshot: Vec<InstanceId>,
    pub(crate) pending: Option<PendingHover>,
    pub(crate) origin_rect: Rect,
    pub(crate) grab_point: Point,
    pub(crate) pointer: Point,
    pub(crate) source: DragSource,
}

impl DragSession {
    /// Instance being dragged.
    #[must_use]
    pub const fn active(&self) -> InstanceId {
        self.active
    }

    /// Hover target whose reorder timer is running.
    #[must_use]
    pub fn pending_target(&self) -> Option<InstanceId> {
        self.pending.map(|pending| pending.target)
    }

    /// Order captured when the drag started.
    #[must_use]
    pub fn snapshot(&self) -> &[InstanceId] {
        &self.snapshot
    }

    /// What started the drag.
    #[must_use]
    pub const fn source(&self) -> DragSource {
        self.source
    }

    /// Floating preview following the pointer.
    #[must_use]
    pub fn preview(&self) -> DragPreview {
        let rect = self.origin_rect;
        DragPreview {
            key: self.key,
            size: self.size,
            rect: Rect::new(
                rect.left + (self.pointer.x - self.grab_point.x),
                rect.top + (self.pointer.y - self.grab_point.y),
                rect.width,
                rect.height,
            ),
        }
    }
}

/// Floating copy of the dragged tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragPreview {
    /// Tile being dragged.
    pub key: TileKey,
    /// Footprint at drag start.
    pub size: TileSize,
    /// Viewport rectangle, sized to the tile at drag start.
    pub rect: Rect,
}

/// Copy of `order` with `moved` placed at `target`'s position; everything in
/// between shifts by one. `None` when either id is missing or they are equal.
#[must_use]
pub fn move_before(
    order: &[InstanceId],
    moved: InstanceId,
    target: InstanceId,
) -> Option<Vec<InstanceId>> {
    if moved == target {
        return None;
    }
    let from = order.iter().position(|id| *id == moved)?;
    let to = order.iter().position(|id| *id == target)?;
    let mut next = order.to_vec();
    let item = next.remove(from);
    next.insert(to, item);
    Some(next)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tilefolio_content::TileKey;

    use super::*;
    use crate::core::config::GridTuning;
    use crate::core::geometry::Viewport;
    use crate::core::instances::InstanceGenerator;

    fn ids(count: usize) -> Vec<InstanceId> {
        let mut generator = InstanceGenerator::new(GridTuning::default());
        let mut rng = StdRng::seed_from_u64(5);
        generator
            .generate(&mut rng, Viewport::new(100.0, 100.0), &TileKey::ALL)
            .into_iter()
            .take(count)
            .map(|instance| instance.id)
            .collect()
    }

    #[test]
    fn moving_forward_shifts_intermediate_items_back() {
        let order = ids(5);
        let next = move_before(&order, order[0], order[3]).unwrap();
        assert_eq!(next, vec![order[1], order[2], order[3], order[0], order[4]]);
    }

    #[test]
    fn moving_backward_shifts_intermediate_items_forward() {
        let order = ids(5);
        let next = move_before(&order, order[4], order[1]).unwrap();
        assert_eq!(next, vec![order[0], order[4], order[1], order[2], order[3]]);
    }

    #[test]
    fn self_and_unknown_moves_are_rejected() {
        let order = ids(4);
        let stranger = ids(5)[4];
        assert_eq!(move_before(&order, order[1], order[1]), None);
        assert_eq!(move_before(&order, stranger, order[1]), None);
        assert_eq!(move_before(&order, order[1], stranger), None);
    }
}
