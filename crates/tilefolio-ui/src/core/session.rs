//! Process-wide theme session.
//!
//! The session is the only writer of the persisted theme preference and of
//! the global theme style variables. It is created once at startup and
//! threaded to consumers explicitly.

use tracing::{debug, info, warn};

use crate::core::config::ThemeTuning;
use crate::core::geometry::{Point, Viewport};
use crate::core::preferences::PreferenceStore;
use crate::core::scheduler::{TaskHandle, TaskScheduler, Timing};
use crate::core::theme::{StyleSink, ThemeDescriptor, ThemeName, apply_theme, descriptor};

/// Deferred theme session work.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeTask {
    /// The ripple finished playing.
    EndTransition,
}

/// Ripple played while switching themes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleTransition {
    /// Screen point the ripple grows from.
    pub origin: Point,
    /// Distance from the origin to the farthest viewport corner.
    pub radius: f64,
    /// Background of the outgoing theme.
    pub color: &'static str,
    /// Animation length.
    pub duration_ms: u32,
    /// Increases with every switch so the overlay restarts its animation.
    pub iteration: u64,
}

impl RippleTransition {
    /// `--theme-ripple-*` custom properties for the overlay.
    #[must_use]
    pub fn style_vars(&self) -> [(&'static str, String); 5] {
        [
            ("--theme-ripple-x", format!("{}px", self.origin.x)),
            ("--theme-ripple-y", format!("{}px", self.origin.y)),
            ("--theme-ripple-radius", format!("{}px", self.radius)),
            ("--theme-ripple-duration", format!("{}ms", self.duration_ms)),
            ("--theme-ripple-color", self.color.to_string()),
        ]
    }
}

/// Current theme, its persistence, and the switch transition.
#[derive(Debug)]
pub struct ThemeSession<P, S, D> {
    tuning: ThemeTuning,
    storage_key: String,
    store: P,
    scheduler: S,
    sink: D,
    current: ThemeName,
    transition: Option<RippleTransition>,
    end_timer: Option<TaskHandle>,
    iteration: u64,
    torn_down: bool,
}

impl<P, S, D> ThemeSession<P, S, D>
where
    P: PreferenceStore,
    S: TaskScheduler<ThemeTask>,
    D: StyleSink,
{
    /// Start a session from the persisted preference, falling back to the
    /// configured default, and project it onto `sink`.
    pub fn initialize(
        tuning: ThemeTuning,
        storage_key: impl Into<String>,
        store: P,
        scheduler: S,
        sink: D,
    ) -> Self {
        let storage_key = storage_key.into();
        let current = match store.get(&storage_key) {
            Ok(Some(raw)) => ThemeName::parse(raw.trim()).unwrap_or_else(|| {
                debug!(value = %raw, "ignoring unknown persisted theme");
                tuning.default_theme
            }),
            Ok(None) => tuning.default_theme,
            Err(error) => {
                warn!(%error, "theme preference unreadable; using default");
                tuning.default_theme
            }
        };
        let mut session = Self {
            tuning,
            storage_key,
            store,
            scheduler,
            sink,
            current,
            transition: None,
            end_timer: None,
            iteration: 0,
            torn_down: false,
        };
        apply_theme(&mut session.sink, descriptor(current));
        debug!(theme = %current, "theme session initialised");
        session
    }

    /// Active theme descriptor.
    #[must_use]
    pub fn current(&self) -> &'static ThemeDescriptor {
        descriptor(self.current)
    }

    /// Active theme name.
    #[must_use]
    pub const fn name(&self) -> ThemeName {
        self.current
    }

    /// Ripple currently playing.
    #[must_use]
    pub const fn transition(&self) -> Option<&RippleTransition> {
        self.transition.as_ref()
    }

    /// Style sink receiving the theme variables.
    #[must_use]
    pub const fn sink(&self) -> &D {
        &self.sink
    }

    /// Preference store holding the persisted theme.
    #[must_use]
    pub const fn store(&self) -> &P {
        &self.store
    }

    /// Scheduler, for tests and the browser binding.
    pub const fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Switch to `name`, rippling out from `origin` (or the viewport center).
    ///
    /// Returns `false` when `name` is already active.
    pub fn set(&mut self, name: ThemeName, origin: Option<Point>, viewport: Viewport) -> bool {
        if name == self.current || self.torn_down {
            return false;
        }
        let outgoing = descriptor(self.current);
        let origin = origin.unwrap_or_else(|| viewport.center());
        self.iteration += 1;
        self.transition = Some(RippleTransition {
            origin,
            radius: viewport.farthest_corner_distance(origin),
            color: outgoing.background,
            duration_ms: self.tuning.ripple_duration_ms,
            iteration: self.iteration,
        });
        if let Some(previous) = self.end_timer.take() {
            self.scheduler.cancel(previous);
        }
        self.end_timer = Some(self.scheduler.schedule(
            Timing::After(self.tuning.ripple_duration_ms),
            ThemeTask::EndTransition,
        ));

        self.current = name;
        apply_theme(&mut self.sink, descriptor(name));
        if let Err(error) = self.store.set(&self.storage_key, name.as_str()) {
            warn!(%error, theme = %name, "theme preference not saved");
        }
        info!(from = %outgoing.name, to = %name, "theme changed");
        true
    }

    /// Advance to the next theme in cycle order.
    pub fn cycle(&mut self, origin: Option<Point>, viewport: Viewport) -> ThemeName {
        let next = self.current.next();
        self.set(next, origin, viewport);
        self.current
    }

    /// Deliver a scheduled task; returns `true` when the ripple was cleared.
    pub fn run_task(&mut self, handle: TaskHandle, task: ThemeTask) -> bool {
        self.scheduler.complete(handle);
        match task {
            ThemeTask::EndTransition => {
                if self.torn_down || self.end_timer != Some(handle) {
                    return false;
                }
                self.end_timer = None;
                self.transition = None;
                true
            }
        }
    }

    /// Cancel the pending transition timer; later deliveries are ignored.
    pub fn teardown(&mut self) {
        if let Some(handle) = self.end_timer.take() {
            self.scheduler.cancel(handle);
        }
        self.transition = None;
        self.torn_down = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::preferences::MemoryPreferenceStore;
    use crate::core::scheduler::VirtualScheduler;
    use crate::core::theme::{RecordingStyleSink, style_variables};

    type Session =
        ThemeSession<MemoryPreferenceStore, VirtualScheduler<ThemeTask>, RecordingStyleSink>;

    const VIEWPORT: Viewport = Viewport::new(800.0, 600.0);

    fn session(store: MemoryPreferenceStore) -> Session {
        ThemeSession::initialize(
            ThemeTuning::default(),
            "metro-theme",
            store,
            VirtualScheduler::new(),
            RecordingStyleSink::default(),
        )
    }

    fn fire(session: &mut Session, millis: u64) -> Vec<bool> {
        let due = session.scheduler_mut().advance(millis);
        due.into_iter()
            .map(|(handle, task)| session.run_task(handle, task))
            .collect()
    }

    #[test]
    fn starts_from_a_valid_persisted_theme() {
        let session = session(MemoryPreferenceStore::with_entry("metro-theme", "retro"));
        assert_eq!(session.name(), ThemeName::Retro);
        assert_eq!(session.sink().theme_attribute, Some(ThemeName::Retro));
        assert_eq!(
            session.sink().property("--metro-background"),
            Some(descriptor(ThemeName::Retro).background)
        );
    }

    #[test]
    fn unknown_missing_or_unreadable_preferences_use_the_default() {
        let unknown = session(MemoryPreferenceStore::with_entry("metro-theme", "sepia"));
        assert_eq!(unknown.name(), ThemeName::Metro);
        let missing = session(MemoryPreferenceStore::new());
        assert_eq!(missing.name(), ThemeName::Metro);
        let failing =
            session(MemoryPreferenceStore::with_entry("metro-theme", "neon").failing_reads());
        assert_eq!(failing.name(), ThemeName::Metro);
    }

    #[test]
    fn switching_projects_every_variable_and_persists() {
        let mut session = session(MemoryPreferenceStore::new());
        assert!(session.set(ThemeName::Neon, None, VIEWPORT));
        let neon = descriptor(ThemeName::Neon);
        assert!(std::ptr::eq(session.current(), neon));
        for (name, value) in style_variables(neon) {
            assert_eq!(session.sink().property(&name), Some(value.as_str()), "{name}");
        }
        assert_eq!(session.sink().theme_attribute, Some(ThemeName::Neon));
        assert_eq!(session.store().peek("metro-theme"), Some("neon"));
    }

    #[test]
    fn setting_the_active_theme_is_a_no_op() {
        let mut session = session(MemoryPreferenceStore::new());
        let writes = session.sink().writes;
        assert!(!session.set(ThemeName::Metro, None, VIEWPORT));
        assert_eq!(session.sink().writes, writes);
        assert_eq!(session.transition(), None);
        assert_eq!(session.scheduler_mut().pending_count(), 0);
    }

    #[test]
    fn ripple_covers_the_viewport_with_the_outgoing_background() {
        let mut session = session(MemoryPreferenceStore::new());
        session.set(ThemeName::Solar, Some(Point::new(0.0, 0.0)), VIEWPORT);
        let ripple = *session.transition().unwrap();
        assert_eq!(ripple.origin, Point::new(0.0, 0.0));
        assert!((ripple.radius - 1000.0).abs() < 1e-9);
        assert_eq!(ripple.color, descriptor(ThemeName::Metro).background);
        assert_eq!(ripple.duration_ms, 2200);
        assert_eq!(ripple.iteration, 1);
        assert_eq!(ripple.style_vars()[2], ("--theme-ripple-radius", "1000px".to_string()));
    }

    #[test]
    fn ripple_defaults_to_the_viewport_center() {
        let mut session = session(MemoryPreferenceStore::new());
        session.set(ThemeName::Glass, None, VIEWPORT);
        let ripple = session.transition().unwrap();
        assert_eq!(ripple.origin, Point::new(400.0, 300.0));
        assert!((ripple.radius - 500.0).abs() < 1e-9);
    }

    #[test]
    fn transition_clears_after_its_duration() {
        let mut session = session(MemoryPreferenceStore::new());
        session.set(ThemeName::Pastel, None, VIEWPORT);
        assert!(fire(&mut session, 2199).is_empty());
        assert!(session.transition().is_some());
        assert_eq!(fire(&mut session, 1), vec![true]);
        assert_eq!(session.transition(), None);
    }

    #[test]
    fn rapid_switches_restart_the_timer() {
        let mut session = session(MemoryPreferenceStore::new());
        session.set(ThemeName::Pastel, None, VIEWPORT);
        fire(&mut session, 1000);
        session.set(ThemeName::Neon, None, VIEWPORT);
        assert_eq!(session.transition().unwrap().iteration, 2);
        assert_eq!(
            session.transition().unwrap().color,
            descriptor(ThemeName::Pastel).background
        );
        assert!(fire(&mut session, 2199).is_empty());
        assert_eq!(fire(&mut session, 1), vec![true]);
        assert_eq!(session.scheduler_mut().cancelled().len(), 1);
    }

    #[test]
    fn cycling_walks_every_theme_and_wraps() {
        let mut session = session(MemoryPreferenceStore::new());
        let visited: Vec<ThemeName> = (0..ThemeName::ALL.len())
            .map(|_| session.cycle(None, VIEWPORT))
            .collect();
        assert_eq!(visited.last(), Some(&ThemeName::Metro));
        assert_eq!(&visited[..visited.len() - 1], &ThemeName::ALL[1..]);
    }

    #[test]
    fn picking_a_theme_directly_skips_the_cycle() {
        let mut session = session(MemoryPreferenceStore::new());
        assert!(session.set(ThemeName::Glass, Some(Point::new(10.0, 10.0)), VIEWPORT));
        assert_eq!(session.name(), ThemeName::Glass);
        assert_eq!(session.store().peek("metro-theme"), Some("glass"));
        assert_eq!(session.transition().unwrap().origin, Point::new(10.0, 10.0));
        assert_eq!(session.cycle(None, VIEWPORT), ThemeName::Orchid);
    }

    #[test]
    fn write_failures_still_switch_the_theme() {
        let mut session = session(MemoryPreferenceStore::new().failing_writes());
        assert!(session.set(ThemeName::Orchid, None, VIEWPORT));
        assert_eq!(session.name(), ThemeName::Orchid);
        assert_eq!(session.store().peek("metro-theme"), None);
    }

    #[test]
    fn teardown_cancels_the_pending_transition() {
        let mut session = session(MemoryPreferenceStore::new());
        session.set(ThemeName::Retro, None, VIEWPORT);
        let due = session.scheduler_mut().advance(2200);
        session.teardown();
        for (handle, task) in due {
            assert!(!session.run_task(handle, task));
        }
        assert!(!session.set(ThemeName::Neon, None, VIEWPORT));
        assert_eq!(session.name(), ThemeName::Retro);
    }
}
