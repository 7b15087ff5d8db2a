//! Viewport-sized working sets of tile instances.
//!
//! A generation pass estimates how many tiles fill the viewport, emits one
//! instance per distinct key, fills the rest at random, then shuffles the
//! whole batch. Each pass is tagged with a generation counter so ids never
//! repeat across passes.

use std::fmt::{self, Display, Formatter};

use rand::Rng;
use rand::seq::SliceRandom;
use tilefolio_content::{TileKey, TileSize};
use tracing::debug;

use crate::core::config::GridTuning;
use crate::core::geometry::Viewport;

/// Identity of one placed tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId {
    key: TileKey,
    generation: u64,
    ordinal: usize,
    suffix: u16,
}

impl InstanceId {
    /// Logical key of the instance.
    #[must_use]
    pub const fn key(self) -> TileKey {
        self.key
    }

    /// Generation pass that created the instance.
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.generation
    }

    /// Position in the pass before shuffling; the first `key count` ordinals
    /// are the coverage instances.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self.ordinal
    }
}

impl Display for InstanceId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}-g{}-{}-{:04x}",
            self.key, self.generation, self.ordinal, self.suffix
        )
    }
}

/// One placed occurrence of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileInstance {
    /// Unique id.
    pub id: InstanceId,
    /// Logical tile.
    pub key: TileKey,
    /// Current footprint.
    pub size: TileSize,
}

/// Number of instances needed to fill `viewport` with `key_count` distinct keys.
///
/// The viewport estimate is capped at `max_instances`, but the coverage floor
/// of `coverage_multiplier` instances per key always wins.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn estimate_instance_count(viewport: Viewport, key_count: usize, tuning: &GridTuning) -> usize {
    let cols = (viewport.width / tuning.tile_footprint).ceil().max(1.0);
    let rows = (viewport.height / tuning.tile_footprint).ceil().max(1.0);
    let estimate = (cols * rows * tuning.density)
        .min(tuning.max_instances as f64)
        .round() as usize;
    estimate.max(key_count * tuning.coverage_multiplier)
}

/// Footprints for the skeleton grid shown before the first generation pass:
/// at least 16 tiles, two per key, cycling medium, wide, large.
#[must_use]
pub fn placeholder_sizes(key_count: usize) -> Vec<TileSize> {
    let count = (key_count * 2).max(16);
    TileSize::ALL.into_iter().cycle().take(count).collect()
}

/// Produces instance batches; one generator per grid.
#[derive(Clone, Debug)]
pub struct InstanceGenerator {
    tuning: GridTuning,
    generation: u64,
}

impl InstanceGenerator {
    /// Generator that has not run yet.
    #[must_use]
    pub const fn new(tuning: GridTuning) -> Self {
        Self {
            tuning,
            generation: 0,
        }
    }

    /// Number of completed passes.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Run one generation pass.
    ///
    /// Duplicate keys in `keys` are ignored. An empty key list yields an
    /// empty batch.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        viewport: Viewport,
        keys: &[TileKey],
    ) -> Vec<TileInstance> {
        let mut distinct: Vec<TileKey> = Vec::with_capacity(keys.len());
        for key in keys {
            if !distinct.contains(key) {
                distinct.push(*key);
            }
        }
        if distinct.is_empty() {
            return Vec::new();
        }

        self.generation += 1;
        let generation = self.generation;
        let target = estimate_instance_count(viewport, distinct.len(), &self.tuning);

        let mut instances = Vec::with_capacity(target);
        for ordinal in 0..target {
            let key = if ordinal < distinct.len() {
                distinct[ordinal]
            } else {
                distinct[rng.random_range(0..distinct.len())]
            };
            let size = TileSize::ALL[rng.random_range(0..TileSize::ALL.len())];
            let id = InstanceId {
                key,
                generation,
                ordinal,
                suffix: rng.random(),
            };
            instances.push(TileInstance { id, key, size });
        }
        instances.shuffle(rng);

        debug!(
            generation,
            count = instances.len(),
            width = viewport.width,
            height = viewport.height,
            "generated tile instances"
        );
        instances
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn generator() -> InstanceGenerator {
        InstanceGenerator::new(GridTuning::default())
    }

    #[test]
    fn placeholder_grid_has_a_floor_and_cycles_sizes() {
        let small = placeholder_sizes(3);
        assert_eq!(small.len(), 16);
        assert_eq!(&small[..4], &[TileSize::Medium, TileSize::Wide, TileSize::Large, TileSize::Medium]);
        assert_eq!(placeholder_sizes(TileKey::COUNT).len(), 20);
    }

    #[test]
    fn estimate_respects_cap_and_floor() {
        let tuning = GridTuning::default();
        // 1920x1080 -> 12 x 7 cells * 1.4 = 117.6, capped at 48.
        assert_eq!(
            estimate_instance_count(Viewport::new(1920.0, 1080.0), 10, &tuning),
            48
        );
        // 320x480 -> 2 x 3 cells * 1.4 = 8.4, floored at 30.
        assert_eq!(
            estimate_instance_count(Viewport::new(320.0, 480.0), 10, &tuning),
            30
        );
        // Floor beats cap when there are many keys.
        assert_eq!(
            estimate_instance_count(Viewport::new(1920.0, 1080.0), 20, &tuning),
            60
        );
        // Degenerate viewports still count as one cell.
        assert_eq!(estimate_instance_count(Viewport::new(0.0, 0.0), 1, &tuning), 3);
    }

    #[test]
    fn ids_are_unique_within_and_across_passes() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut generator = generator();
        let first = generator.generate(&mut rng, Viewport::new(1280.0, 720.0), &TileKey::ALL);
        let second = generator.generate(&mut rng, Viewport::new(1280.0, 720.0), &TileKey::ALL);
        let mut seen = HashSet::new();
        for instance in first.iter().chain(second.iter()) {
            assert!(seen.insert(instance.id), "duplicate id {}", instance.id);
            assert_eq!(instance.id.key(), instance.key);
        }
        assert_eq!(generator.generation(), 2);
        assert!(first.iter().all(|instance| instance.id.generation() == 1));
    }

    #[test]
    fn id_strings_embed_key_and_generation() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut generator = generator();
        let batch = generator.generate(&mut rng, Viewport::new(100.0, 100.0), &[TileKey::Github]);
        assert_eq!(batch.len(), 3);
        for instance in &batch {
            assert!(instance.id.to_string().starts_with("github-g1-"));
        }
    }

    #[test]
    fn empty_key_list_generates_nothing() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut generator = generator();
        assert!(
            generator
                .generate(&mut rng, Viewport::new(800.0, 600.0), &[])
                .is_empty()
        );
        assert_eq!(generator.generation(), 0);
    }

    #[test]
    fn duplicate_keys_count_once_for_the_floor() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut generator = generator();
        let batch = generator.generate(
            &mut rng,
            Viewport::new(100.0, 100.0),
            &[TileKey::Lms, TileKey::Lms, TileKey::Talk],
        );
        assert_eq!(batch.len(), 6);
    }

    #[test]
    fn coverage_instances_are_spread_uniformly() {
        const RUNS: usize = 3000;
        let mut rng = StdRng::seed_from_u64(0x7173);
        let mut generator = generator();
        let viewport = Viewport::new(320.0, 480.0);
        let key_count = TileKey::ALL.len();
        let mut hits: Vec<usize> = Vec::new();

        for _ in 0..RUNS {
            let batch = generator.generate(&mut rng, viewport, &TileKey::ALL);
            if hits.is_empty() {
                hits = vec![0; batch.len()];
            }
            for (position, instance) in batch.iter().enumerate() {
                if instance.id.ordinal() < key_count {
                    hits[position] += 1;
                }
            }
        }

        // 30 slots, 10 coverage instances per run: expect RUNS / 3 per slot.
        let expected = RUNS / 3;
        for (position, count) in hits.iter().enumerate() {
            assert!(
                count.abs_diff(expected) < expected / 5,
                "slot {position} saw {count} coverage instances, expected about {expected}"
            );
        }
    }

    proptest! {
        #[test]
        fn every_key_is_covered(width in 0.0f64..4000.0, height in 0.0f64..4000.0, seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut generator = generator();
            let batch = generator.generate(&mut rng, Viewport::new(width, height), &TileKey::ALL);
            for key in TileKey::ALL {
                prop_assert!(batch.iter().any(|instance| instance.key == key));
            }
            prop_assert!(batch.len() >= TileKey::ALL.len() * 3);
            prop_assert!(batch.len() <= 48.max(TileKey::ALL.len() * 3));
        }
    }
}
