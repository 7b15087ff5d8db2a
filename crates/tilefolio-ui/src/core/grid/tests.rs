use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tilefolio_content::{SiteContent, TileKey, TileSize, TileTable};

use super::drag::move_before;
use super::effects::{ParallaxOffset, PointerKind};
use super::*;
use crate::core::catalog::{TileDefinition, themed_tiles};
use crate::core::config::GridTuning;
use crate::core::geometry::{Point, Rect, Viewport};
use crate::core::instances::{InstanceGenerator, InstanceId, TileInstance};
use crate::core::scheduler::VirtualScheduler;
use crate::core::theme::{ThemeName, descriptor};

type Engine = GridEngine<VirtualScheduler<GridTask>>;

const TILE: Rect = Rect::new(0.0, 0.0, 160.0, 160.0);
const GRID: Rect = Rect::new(0.0, 0.0, 1000.0, 800.0);

fn batch(seed: u64) -> Vec<TileInstance> {
    let mut generator = InstanceGenerator::new(GridTuning::default());
    let mut rng = StdRng::seed_from_u64(seed);
    generator.generate(&mut rng, Viewport::new(800.0, 600.0), &TileKey::ALL)
}

fn engine(seed: u64) -> (Engine, Vec<InstanceId>) {
    let mut engine = GridEngine::new(GridTuning::default(), VirtualScheduler::new());
    engine.replace_instances(batch(seed));
    let order = engine.order().to_vec();
    (engine, order)
}

fn foreign_id() -> InstanceId {
    let mut generator = InstanceGenerator::new(GridTuning::default());
    let mut rng = StdRng::seed_from_u64(99);
    generator.generate(&mut rng, Viewport::new(100.0, 100.0), &TileKey::ALL);
    generator.generate(&mut rng, Viewport::new(100.0, 100.0), &TileKey::ALL)[0].id
}

fn advance(engine: &mut Engine, millis: u64) -> Vec<GridTaskOutcome> {
    let due = engine.scheduler_mut().advance(millis);
    due.into_iter()
        .map(|(handle, task)| engine.run_task(handle, task))
        .collect()
}

fn catalog() -> TileTable<TileDefinition> {
    let content = SiteContent::embedded().unwrap();
    themed_tiles(&content, descriptor(ThemeName::Metro))
}

fn assert_permutation(engine: &Engine, expected: &HashSet<InstanceId>) {
    let order: HashSet<InstanceId> = engine.order().iter().copied().collect();
    assert_eq!(order.len(), engine.order().len(), "duplicate ids in order");
    assert_eq!(&order, expected);
}

#[test]
fn only_the_last_sustained_hover_commits() {
    let (mut engine, ids) = engine(1);
    let (active, a, b, c) = (ids[0], ids[3], ids[5], ids[7]);
    assert!(engine.begin_drag(active, TILE, Point::new(10.0, 10.0)));

    engine.drag_over(Some(a));
    assert_eq!(engine.phase(), GridPhase::HoverPendingReorder);
    assert!(advance(&mut engine, 100).is_empty());
    engine.drag_over(Some(b));
    assert!(advance(&mut engine, 50).is_empty());
    engine.drag_over(Some(c));
    assert!(advance(&mut engine, 219).is_empty());
    assert_eq!(engine.order(), ids.as_slice());

    assert_eq!(advance(&mut engine, 1), vec![GridTaskOutcome::Reordered]);
    assert_eq!(engine.scheduler_mut().now(), 370);
    assert_eq!(engine.order(), move_before(&ids, active, c).unwrap().as_slice());
    assert_eq!(engine.phase(), GridPhase::Dragging);
    assert_eq!(engine.scheduler_mut().cancelled().len(), 2);
    assert!(advance(&mut engine, 1000).is_empty());
}

#[test]
fn re_hovering_the_pending_target_keeps_its_timer() {
    let (mut engine, ids) = engine(2);
    engine.begin_drag(ids[1], TILE, Point::default());
    engine.drag_over(Some(ids[4]));
    advance(&mut engine, 200);
    engine.drag_over(Some(ids[4]));
    assert_eq!(advance(&mut engine, 20), vec![GridTaskOutcome::Reordered]);
}

#[test]
fn leaving_all_targets_clears_the_pending_reorder() {
    let (mut engine, ids) = engine(3);
    engine.begin_drag(ids[0], TILE, Point::default());
    engine.drag_over(Some(ids[2]));
    engine.drag_over(None);
    assert_eq!(engine.phase(), GridPhase::Dragging);
    assert!(advance(&mut engine, 500).is_empty());
    assert_eq!(engine.order(), ids.as_slice());
}

#[test]
fn hovering_the_dragged_tile_never_schedules() {
    let (mut engine, ids) = engine(4);
    engine.begin_drag(ids[2], TILE, Point::default());
    engine.drag_over(Some(ids[2]));
    assert_eq!(engine.scheduler_mut().pending_count(), 0);
    assert_eq!(engine.phase(), GridPhase::Dragging);
    assert!(advance(&mut engine, 1000).is_empty());
    assert_eq!(engine.order(), ids.as_slice());
}

#[test]
fn cancel_restores_the_pre_drag_order() {
    let (mut engine, ids) = engine(5);
    engine.begin_drag(ids[0], TILE, Point::default());
    for target in [ids[6], ids[2], ids[9]] {
        engine.drag_over(Some(target));
        assert_eq!(advance(&mut engine, 220), vec![GridTaskOutcome::Reordered]);
    }
    assert_ne!(engine.order(), ids.as_slice());
    engine.drag_over(Some(ids[11]));
    assert!(engine.cancel_drag());
    assert_eq!(engine.order(), ids.as_slice());
    assert_eq!(engine.phase(), GridPhase::Idle);
    assert!(advance(&mut engine, 1000).is_empty());
}

#[test]
fn drop_keeps_the_committed_order_and_drops_pending_hover() {
    let (mut engine, ids) = engine(6);
    engine.begin_drag(ids[0], TILE, Point::default());
    engine.drag_over(Some(ids[3]));
    advance(&mut engine, 220);
    let committed = engine.order().to_vec();
    engine.drag_over(Some(ids[8]));
    assert!(engine.end_drag());
    assert!(advance(&mut engine, 1000).is_empty());
    assert_eq!(engine.order(), committed.as_slice());
    assert!(!engine.end_drag());
    assert!(!engine.cancel_drag());
}

#[test]
fn stale_ids_are_no_ops() {
    let (mut engine, ids) = engine(7);
    let stranger = foreign_id();
    assert!(!engine.begin_drag(stranger, TILE, Point::default()));
    assert!(!engine.open_context_menu(stranger, Point::default()));
    engine.begin_drag(ids[0], TILE, Point::default());
    engine.drag_over(Some(stranger));
    assert_eq!(engine.scheduler_mut().pending_count(), 0);
    assert_eq!(engine.activate(stranger, &catalog()), None);
}

#[test]
fn resize_changes_only_the_target_instance() {
    let (mut engine, ids) = engine(8);
    let target = ids[4];
    let sizes_before: Vec<TileSize> = ids
        .iter()
        .map(|id| engine.instance(*id).unwrap().size)
        .collect();
    let new_size = TileSize::ALL
        .into_iter()
        .find(|size| *size != sizes_before[4])
        .unwrap();

    assert!(engine.open_context_menu(target, Point::new(40.0, 60.0)));
    let menu = *engine.context_menu().unwrap();
    assert_eq!(menu.current_size, sizes_before[4]);
    assert_eq!(menu.anchor, Point::new(40.0, 60.0));
    assert!(engine.select_size(new_size));

    assert_eq!(engine.phase(), GridPhase::Idle);
    assert_eq!(engine.order(), ids.as_slice());
    for (index, id) in ids.iter().enumerate() {
        let size = engine.instance(*id).unwrap().size;
        if *id == target {
            assert_eq!(size, new_size);
        } else {
            assert_eq!(size, sizes_before[index]);
        }
    }
    let catalog = catalog();
    let resolved = engine.resolved_tiles(&catalog);
    assert_eq!(resolved[4].size, new_size);
    assert_eq!(resolved[4].span, new_size.span());
}

#[test]
fn context_menu_closes_on_every_exit_path() {
    let (mut engine, ids) = engine(9);
    assert!(engine.open_context_menu(ids[0], Point::default()));
    assert!(!engine.open_context_menu(ids[1], Point::default()));
    assert_eq!(engine.phase(), GridPhase::Idle);

    engine.open_context_menu(ids[0], Point::default());
    assert!(engine.escape());
    assert_eq!(engine.context_menu(), None);

    engine.open_context_menu(ids[0], Point::default());
    assert!(engine.close_context_menu());
    assert!(!engine.select_size(TileSize::Large));

    engine.open_context_menu(ids[0], Point::default());
    engine.replace_instances(batch(10));
    assert_eq!(engine.phase(), GridPhase::Idle);
}

#[test]
fn context_menu_is_ignored_while_dragging() {
    let (mut engine, ids) = engine(11);
    engine.begin_drag(ids[0], TILE, Point::default());
    assert!(!engine.open_context_menu(ids[1], Point::default()));
    assert!(matches!(engine.phase(), GridPhase::Dragging));
}

#[test]
fn drag_from_open_menu_closes_the_menu() {
    let (mut engine, ids) = engine(12);
    engine.open_context_menu(ids[0], Point::default());
    assert!(engine.begin_drag(ids[1], TILE, Point::default()));
    assert_eq!(engine.context_menu(), None);
    assert!(!engine.begin_drag(ids[2], TILE, Point::default()));
}

#[test]
fn activation_routes_by_link_kind() {
    let (mut engine, ids) = engine(13);
    let catalog = catalog();
    let find = |key: TileKey| ids.iter().copied().find(|id| id.key() == key).unwrap();

    assert_eq!(
        engine.activate(find(TileKey::Github), &catalog),
        Some(Activation::External(
            "https://github.com/your-handle".to_string()
        ))
    );
    assert_eq!(
        engine.activate(find(TileKey::Profile), &catalog),
        Some(Activation::Navigate {
            path: "/about".to_string(),
            tint: catalog.get(TileKey::Profile).color,
        })
    );
    assert_eq!(
        engine.activate(find(TileKey::Lms), &catalog),
        Some(Activation::Overlay(TileKey::Lms))
    );
}

#[test]
fn the_click_ending_a_drag_does_not_activate() {
    let (mut engine, ids) = engine(14);
    let catalog = catalog();
    engine.press(ids[0], Point::new(5.0, 5.0), TILE);
    assert_eq!(advance(&mut engine, 200), vec![GridTaskOutcome::DragStarted]);
    engine.release();
    assert_eq!(engine.phase(), GridPhase::Idle);
    assert_eq!(engine.activate(ids[0], &catalog), None);

    engine.press(ids[0], Point::new(5.0, 5.0), TILE);
    engine.release();
    assert!(engine.activate(ids[0], &catalog).is_some());
}

#[test]
fn dismissing_the_menu_does_not_activate_the_tile_underneath() {
    let (mut engine, ids) = engine(30);
    let catalog = catalog();
    let profile = ids
        .iter()
        .copied()
        .find(|id| id.key() == TileKey::Profile)
        .unwrap();

    assert!(engine.open_context_menu(ids[0], Point::default()));
    engine.press(profile, Point::new(5.0, 5.0), TILE);
    assert_eq!(engine.context_menu(), None);
    assert!(!engine.close_context_menu());
    assert!(advance(&mut engine, 300).is_empty());
    engine.release();
    assert_eq!(engine.activate(profile, &catalog), None);

    engine.open_context_menu(ids[0], Point::default());
    assert!(engine.close_context_menu());
    assert_eq!(engine.activate(profile, &catalog), None);

    engine.press(profile, Point::new(5.0, 5.0), TILE);
    engine.release();
    assert!(engine.activate(profile, &catalog).is_some());
}

#[test]
fn pointer_cancel_rolls_back_committed_reorders() {
    let (mut engine, ids) = engine(31);
    engine.press(ids[0], Point::new(5.0, 5.0), TILE);
    assert_eq!(advance(&mut engine, 200), vec![GridTaskOutcome::DragStarted]);
    engine.drag_over(Some(ids[6]));
    assert_eq!(advance(&mut engine, 220), vec![GridTaskOutcome::Reordered]);
    assert_ne!(engine.order(), ids.as_slice());

    assert!(engine.pointer_cancel());
    assert_eq!(engine.order(), ids.as_slice());
    assert_eq!(engine.phase(), GridPhase::Idle);
    assert!(advance(&mut engine, 1000).is_empty());
}

#[test]
fn pointer_cancel_leaves_keyboard_drags_and_pending_presses_clean() {
    let (mut engine, ids) = engine(32);
    engine.press(ids[0], Point::new(5.0, 5.0), TILE);
    assert!(!engine.pointer_cancel());
    assert!(advance(&mut engine, 300).is_empty());
    assert_eq!(engine.phase(), GridPhase::Idle);

    assert!(engine.toggle_keyboard_drag(ids[0], TILE));
    assert!(!engine.pointer_cancel());
    assert!(matches!(engine.phase(), GridPhase::Dragging));
}

#[test]
fn short_or_moving_presses_do_not_start_a_drag() {
    let (mut engine, ids) = engine(15);
    engine.press(ids[0], Point::new(5.0, 5.0), TILE);
    assert!(advance(&mut engine, 199).is_empty());
    engine.release();
    assert!(advance(&mut engine, 100).is_empty());
    assert_eq!(engine.phase(), GridPhase::Idle);

    engine.press(ids[0], Point::new(5.0, 5.0), TILE);
    engine.pointer_move(Point::new(5.0, 25.0));
    assert!(advance(&mut engine, 300).is_empty());
    assert_eq!(engine.phase(), GridPhase::Idle);

    engine.press(ids[0], Point::new(5.0, 5.0), TILE);
    engine.pointer_move(Point::new(12.0, 9.0));
    assert_eq!(advance(&mut engine, 200), vec![GridTaskOutcome::DragStarted]);
}

#[test]
fn preview_follows_the_pointer_at_captured_size() {
    let (mut engine, ids) = engine(16);
    let rect = Rect::new(100.0, 200.0, 320.0, 160.0);
    engine.begin_drag(ids[0], rect, Point::new(110.0, 210.0));
    engine.pointer_move(Point::new(160.0, 180.0));
    let preview = engine.drag_preview().unwrap();
    assert_eq!(preview.rect, Rect::new(150.0, 170.0, 320.0, 160.0));
    assert_eq!(preview.key, ids[0].key());

    let catalog = catalog();
    let resolved = engine.resolved_tiles(&catalog);
    assert!(resolved[0].hidden);
    assert!(resolved[1..].iter().all(|tile| !tile.hidden));
}

#[test]
fn keyboard_drag_moves_through_neighbours() {
    let (mut engine, ids) = engine(17);
    assert!(engine.toggle_keyboard_drag(ids[2], TILE));
    engine.step_hover(Step::Next);
    engine.step_hover(Step::Next);
    assert_eq!(
        engine.drag_session().unwrap().pending_target(),
        Some(ids[4])
    );
    assert_eq!(advance(&mut engine, 220), vec![GridTaskOutcome::Reordered]);
    assert_eq!(engine.order()[4], ids[2]);
    assert!(engine.toggle_keyboard_drag(ids[2], TILE));
    assert_eq!(engine.phase(), GridPhase::Idle);

    engine.toggle_keyboard_drag(ids[0], TILE);
    engine.step_hover(Step::Previous);
    assert_eq!(engine.phase(), GridPhase::Dragging);
    assert!(engine.escape());
}

#[test]
fn keyboard_drags_survive_pointer_release() {
    let (mut engine, ids) = engine(18);
    engine.toggle_keyboard_drag(ids[0], TILE);
    engine.release();
    assert_eq!(engine.phase(), GridPhase::Dragging);
}

#[test]
fn parallax_writes_are_coalesced_per_frame() {
    let (mut engine, _) = engine(19);
    engine.grid_pointer_move(GRID, Point::new(900.0, 400.0), PointerKind::Mouse);
    engine.grid_pointer_move(GRID, Point::new(1000.0, 800.0), PointerKind::Mouse);
    assert_eq!(engine.scheduler_mut().pending_count(), 1);
    assert_eq!(
        advance(&mut engine, 16),
        vec![GridTaskOutcome::Parallax(ParallaxOffset { x: 1.0, y: 1.0 })]
    );

    engine.grid_pointer_move(GRID, Point::new(1000.5, 800.5), PointerKind::Mouse);
    assert_eq!(engine.scheduler_mut().pending_count(), 0);

    engine.grid_pointer_leave();
    assert_eq!(
        advance(&mut engine, 16),
        vec![GridTaskOutcome::Parallax(ParallaxOffset::ZERO)]
    );
}

#[test]
fn touch_and_drags_do_not_drive_parallax() {
    let (mut engine, ids) = engine(20);
    engine.grid_pointer_move(GRID, Point::new(900.0, 400.0), PointerKind::Touch);
    assert_eq!(engine.scheduler_mut().pending_count(), 0);
    engine.begin_drag(ids[0], TILE, Point::default());
    engine.grid_pointer_move(GRID, Point::new(900.0, 400.0), PointerKind::Mouse);
    assert_eq!(engine.scheduler_mut().pending_count(), 0);
}

#[test]
fn reduced_motion_disables_pointer_effects() {
    let (mut engine, _) = engine(21);
    engine.grid_pointer_move(GRID, Point::new(900.0, 400.0), PointerKind::Mouse);
    engine.set_reduced_motion(true);
    assert!(advance(&mut engine, 16).is_empty());

    for x in [0.0, 250.0, 500.0, 750.0, 1000.0] {
        engine.grid_pointer_move(GRID, Point::new(x, x / 2.0), PointerKind::Mouse);
    }
    engine.grid_pointer_leave();
    assert_eq!(engine.scheduler_mut().pending_count(), 0);
    assert_eq!(engine.tile_glow(true, TILE, Point::new(10.0, 10.0)), None);

    engine.set_reduced_motion(false);
    assert!(engine.tile_glow(true, TILE, Point::new(10.0, 10.0)).is_some());
    assert_eq!(engine.tile_glow(false, TILE, Point::new(10.0, 10.0)), None);
}

#[test]
fn deliveries_after_teardown_are_ignored() {
    let (mut engine, ids) = engine(22);
    engine.begin_drag(ids[0], TILE, Point::default());
    engine.drag_over(Some(ids[5]));
    let due = engine.scheduler_mut().advance(220);
    assert_eq!(due.len(), 1);

    engine.grid_pointer_move(GRID, Point::new(10.0, 10.0), PointerKind::Mouse);
    engine.teardown();
    assert_eq!(engine.scheduler_mut().pending_count(), 0);
    for (handle, task) in due {
        assert_eq!(engine.run_task(handle, task), GridTaskOutcome::Ignored);
    }
    assert_eq!(engine.order(), ids.as_slice());
    assert!(!engine.begin_drag(ids[1], TILE, Point::default()));
}

#[test]
fn regeneration_replaces_order_and_ends_the_drag() {
    let (mut engine, ids) = engine(23);
    engine.begin_drag(ids[0], TILE, Point::default());
    engine.drag_over(Some(ids[1]));

    let next = batch(24);
    let expected: Vec<InstanceId> = next.iter().map(|instance| instance.id).collect();
    engine.replace_instances(next);

    assert_eq!(engine.phase(), GridPhase::Idle);
    assert_eq!(engine.order(), expected.as_slice());
    assert!(advance(&mut engine, 1000).is_empty());
}

#[derive(Clone, Debug)]
enum Op {
    Press(usize),
    Release,
    PointerCancel,
    BeginDrag(usize),
    DragOver(Option<usize>),
    Step(bool),
    Advance(u64),
    EndDrag,
    CancelDrag,
    OpenMenu(usize),
    SelectSize(usize),
    Escape,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..40).prop_map(Op::Press),
        Just(Op::Release),
        Just(Op::PointerCancel),
        (0usize..40).prop_map(Op::BeginDrag),
        proptest::option::of(0usize..40).prop_map(Op::DragOver),
        any::<bool>().prop_map(Op::Step),
        (0u64..400).prop_map(Op::Advance),
        Just(Op::EndDrag),
        Just(Op::CancelDrag),
        (0usize..40).prop_map(Op::OpenMenu),
        (0usize..3).prop_map(Op::SelectSize),
        Just(Op::Escape),
    ]
}

proptest! {
    #[test]
    fn order_is_always_a_permutation_of_the_instance_set(
        seed in any::<u64>(),
        ops in proptest::collection::vec(op(), 1..80),
    ) {
        let (mut engine, ids) = engine(seed);
        let expected: HashSet<InstanceId> = ids.iter().copied().collect();
        let pick = |index: usize| ids[index % ids.len()];
        for op in ops {
            match op {
                Op::Press(index) => engine.press(pick(index), Point::default(), TILE),
                Op::Release => engine.release(),
                Op::PointerCancel => {
                    engine.pointer_cancel();
                }
                Op::BeginDrag(index) => {
                    engine.begin_drag(pick(index), TILE, Point::default());
                }
                Op::DragOver(target) => engine.drag_over(target.map(pick)),
                Op::Step(forward) => {
                    engine.step_hover(if forward { Step::Next } else { Step::Previous });
                }
                Op::Advance(millis) => {
                    advance(&mut engine, millis);
                }
                Op::EndDrag => {
                    engine.end_drag();
                }
                Op::CancelDrag => {
                    engine.cancel_drag();
                }
                Op::OpenMenu(index) => {
                    engine.open_context_menu(pick(index), Point::default());
                }
                Op::SelectSize(index) => {
                    engine.select_size(TileSize::ALL[index]);
                }
                Op::Escape => {
                    engine.escape();
                }
            }
            assert_permutation(&engine, &expected);
        }
    }
}
