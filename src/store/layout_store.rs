//! Window layout persistence
//!
//! Maps a `WindowLayout` to the flat value schema in `config::keys` and
//! back. None of the operations here fail: a missing namespace, a missing
//! value, a failed read or write and a failed placement query all degrade to
//! documented defaults. Losing a saved layout is cosmetic, so the host
//! always receives a usable layout.

use crate::config::keys::{self, defaults};
use crate::domain::layout::WindowLayout;
use crate::domain::placement::{PlacementSource, ShowState};
use crate::store::SettingsStore;

/// Loads, saves and snapshots window layouts over a settings backend
///
/// Holds no layout state between calls; every operation reads or writes the
/// backend directly.
#[derive(Debug)]
pub struct WindowLayoutStore<S: SettingsStore> {
    store: S,
}

impl<S: SettingsStore> WindowLayoutStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying backend
    pub fn backend(&self) -> &S {
        &self.store
    }

    /// Loads the layout to apply to a newly created window
    ///
    /// On the first launch this returns the default layout shown maximized
    /// and clears the first-launch flag in the store, so it is not read-only.
    pub fn load(&self) -> WindowLayout {
        let mut layout = WindowLayout::default();

        layout.is_first_launch = self.read_or(keys::FIRST_LAUNCH, defaults::FIRST_LAUNCH) != 0;

        if layout.is_first_launch {
            log::info!("First launch detected, opening maximized");
            layout.is_maximized = true;
            self.write_best_effort(keys::FIRST_LAUNCH, 0);
        } else {
            layout.x = self.read_or(keys::X, defaults::X) as i32;
            layout.y = self.read_or(keys::Y, defaults::Y) as i32;
            layout.width = self.read_or(keys::WIDTH, defaults::WIDTH) as i32;
            layout.height = self.read_or(keys::HEIGHT, defaults::HEIGHT) as i32;
            layout.is_maximized = self.read_or(keys::MAXIMIZED, defaults::MAXIMIZED) != 0;
        }

        layout
    }

    /// Persists a layout, typically one obtained from `query_live`
    ///
    /// Each value is written on its own; a failure on one does not stop the
    /// others. The first-launch flag is never written here.
    pub fn save(&self, layout: &WindowLayout) {
        self.write_best_effort(keys::X, layout.x as u32);
        self.write_best_effort(keys::Y, layout.y as u32);
        self.write_best_effort(keys::WIDTH, layout.width as u32);
        self.write_best_effort(keys::HEIGHT, layout.height as u32);
        self.write_best_effort(keys::MAXIMIZED, u32::from(layout.is_maximized));
    }

    /// Snapshots a live window
    ///
    /// Geometry always comes from the restored rectangle, so a maximized
    /// window saves its pre-maximize bounds. `is_first_launch` is left at
    /// its type default on both the success and the failure path.
    pub fn query_live(&self, window: &impl PlacementSource) -> WindowLayout {
        let mut layout = WindowLayout::default();

        match window.placement() {
            Ok(placement) => {
                layout.is_maximized = placement.show_state == ShowState::Maximized;
                layout.x = placement.restored.x;
                layout.y = placement.restored.y;
                layout.width = placement.restored.w;
                layout.height = placement.restored.h;
            }
            Err(err) => {
                log::debug!("Placement query failed, using default layout: {err}");
            }
        }

        layout
    }

    fn read_or(&self, name: &str, default: u32) -> u32 {
        match self.store.read_u32(name) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(err) => {
                log::debug!("Reading {name} failed, using default {default}: {err}");
                default
            }
        }
    }

    fn write_best_effort(&self, name: &str, value: u32) {
        if let Err(err) = self.store.write_u32(name, value) {
            log::debug!("Writing {name} failed, value not persisted: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::core::Rect;
    use crate::domain::layout::USE_DEFAULT_POSITION;
    use crate::domain::placement::{WindowError, WindowPlacement};
    use crate::store::{MemoryStore, StoreError};
    use std::cell::RefCell;

    struct FixedPlacement(Result<WindowPlacement, WindowError>);

    impl PlacementSource for FixedPlacement {
        fn placement(&self) -> Result<WindowPlacement, WindowError> {
            self.0.clone()
        }
    }

    /// Backend that fails one named value and records every write attempt
    struct FlakyStore {
        inner: MemoryStore,
        failing: &'static str,
        attempts: RefCell<Vec<String>>,
    }

    impl SettingsStore for FlakyStore {
        fn read_u32(&self, name: &str) -> Result<Option<u32>, StoreError> {
            if name == self.failing {
                return Err(StoreError::Read {
                    name: name.to_string(),
                    code: 5,
                });
            }
            self.inner.read_u32(name)
        }

        fn write_u32(&self, name: &str, value: u32) -> Result<(), StoreError> {
            self.attempts.borrow_mut().push(name.to_string());
            if name == self.failing {
                return Err(StoreError::Write {
                    name: name.to_string(),
                    code: 5,
                });
            }
            self.inner.write_u32(name, value)
        }
    }

    fn returning_store() -> WindowLayoutStore<MemoryStore> {
        WindowLayoutStore::new(MemoryStore::with_values([(keys::FIRST_LAUNCH, 0)]))
    }

    #[test]
    fn first_load_on_empty_store_is_maximized_first_launch() {
        let store = WindowLayoutStore::new(MemoryStore::new());

        let layout = store.load();

        assert_eq!(
            layout,
            WindowLayout {
                x: USE_DEFAULT_POSITION,
                y: USE_DEFAULT_POSITION,
                width: 1280,
                height: 720,
                is_maximized: true,
                is_first_launch: true,
            }
        );
        assert_eq!(store.backend().get(keys::FIRST_LAUNCH), Some(0));
    }

    #[test]
    fn first_load_writes_only_the_first_launch_flag() {
        let store = WindowLayoutStore::new(MemoryStore::new());
        store.load();

        let backend = store.backend();
        for name in [keys::X, keys::Y, keys::WIDTH, keys::HEIGHT, keys::MAXIMIZED] {
            assert_eq!(backend.get(name), None, "{name} should not be written by load");
        }
    }

    #[test]
    fn second_load_uses_normal_path_defaults() {
        let store = WindowLayoutStore::new(MemoryStore::new());
        store.load();

        let layout = store.load();

        assert_eq!(
            layout,
            WindowLayout {
                x: 100,
                y: 100,
                width: 1280,
                height: 720,
                is_maximized: false,
                is_first_launch: false,
            }
        );
    }

    #[test]
    fn seeded_store_loads_exact_values() {
        let store = WindowLayoutStore::new(MemoryStore::with_values([
            (keys::X, 50),
            (keys::Y, 60),
            (keys::WIDTH, 800),
            (keys::HEIGHT, 600),
            (keys::MAXIMIZED, 1),
            (keys::FIRST_LAUNCH, 0),
        ]));

        assert_eq!(
            store.load(),
            WindowLayout {
                x: 50,
                y: 60,
                width: 800,
                height: 600,
                is_maximized: true,
                is_first_launch: false,
            }
        );
    }

    #[test]
    fn any_nonzero_maximized_value_means_maximized() {
        let store = WindowLayoutStore::new(MemoryStore::with_values([
            (keys::MAXIMIZED, 7),
            (keys::FIRST_LAUNCH, 0),
        ]));
        assert!(store.load().is_maximized);
    }

    #[test]
    fn save_then_load_round_trips_geometry() {
        let store = returning_store();
        let layouts = [
            WindowLayout {
                x: 200,
                y: 150,
                width: 1024,
                height: 768,
                is_maximized: false,
                is_first_launch: true,
            },
            WindowLayout {
                x: -1600,
                y: -20,
                width: 1400,
                height: 900,
                is_maximized: true,
                is_first_launch: false,
            },
        ];

        for saved in layouts {
            store.save(&saved);
            let loaded = store.load();
            assert!(saved.same_geometry(&loaded), "{saved:?} != {loaded:?}");
            assert!(!loaded.is_first_launch);
        }
    }

    #[test]
    fn negative_coordinates_are_stored_as_twos_complement() {
        let store = returning_store();
        store.save(&WindowLayout {
            x: -8,
            y: 0,
            width: 640,
            height: 480,
            is_maximized: false,
            is_first_launch: false,
        });

        assert_eq!(store.backend().get(keys::X), Some(u32::MAX - 7));
        assert_eq!(store.backend().get(keys::MAXIMIZED), Some(0));
    }

    #[test]
    fn save_never_writes_first_launch() {
        let store = WindowLayoutStore::new(MemoryStore::new());
        store.save(&WindowLayout::default());

        assert_eq!(store.backend().get(keys::FIRST_LAUNCH), None);
        assert!(store.load().is_first_launch);
    }

    #[test]
    fn save_on_unwritable_store_is_silent() {
        let backend = MemoryStore::new();
        backend.set_writable(false);
        let store = WindowLayoutStore::new(backend);

        store.save(&WindowLayout {
            x: 1,
            y: 2,
            width: 3,
            height: 4,
            is_maximized: true,
            is_first_launch: false,
        });

        assert!(store.backend().is_empty());
    }

    #[test]
    fn save_attempts_every_value_after_a_failure() {
        let store = WindowLayoutStore::new(FlakyStore {
            inner: MemoryStore::new(),
            failing: keys::X,
            attempts: RefCell::new(Vec::new()),
        });

        store.save(&WindowLayout {
            x: 10,
            y: 20,
            width: 30,
            height: 40,
            is_maximized: true,
            is_first_launch: false,
        });

        let backend = store.backend();
        assert_eq!(
            *backend.attempts.borrow(),
            vec![keys::X, keys::Y, keys::WIDTH, keys::HEIGHT, keys::MAXIMIZED]
        );
        assert_eq!(backend.inner.get(keys::X), None);
        assert_eq!(backend.inner.get(keys::Y), Some(20));
        assert_eq!(backend.inner.get(keys::MAXIMIZED), Some(1));
    }

    #[test]
    fn failed_read_falls_back_to_that_field_default() {
        let store = WindowLayoutStore::new(FlakyStore {
            inner: MemoryStore::with_values([
                (keys::X, 50),
                (keys::Y, 60),
                (keys::WIDTH, 800),
                (keys::HEIGHT, 600),
                (keys::FIRST_LAUNCH, 0),
            ]),
            failing: keys::WIDTH,
            attempts: RefCell::new(Vec::new()),
        });

        let layout = store.load();

        assert_eq!((layout.x, layout.y), (50, 60));
        assert_eq!(layout.width, 1280);
        assert_eq!(layout.height, 600);
    }

    #[test]
    fn first_launch_repeats_while_flag_cannot_be_cleared() {
        let backend = MemoryStore::new();
        backend.set_writable(false);
        let store = WindowLayoutStore::new(backend);

        let expected = WindowLayout {
            x: USE_DEFAULT_POSITION,
            y: USE_DEFAULT_POSITION,
            width: 1280,
            height: 720,
            is_maximized: true,
            is_first_launch: true,
        };
        assert_eq!(store.load(), expected);
        assert_eq!(store.load(), expected);
        assert_eq!(store.backend().get(keys::FIRST_LAUNCH), None);
    }

    #[test]
    fn extreme_stored_coordinate_yields_saturated_edges() {
        let store = WindowLayoutStore::new(MemoryStore::with_values([
            (keys::FIRST_LAUNCH, 0),
            (keys::X, 0x7FFF_FFF0),
        ]));

        let layout = store.load();
        let restored = Rect::new(layout.x, layout.y, layout.width, layout.height);

        assert_eq!(layout.x, 0x7FFF_FFF0);
        assert_eq!(restored.right(), i32::MAX);
        assert_eq!(restored.bottom(), 820);
    }

    #[test]
    fn unreadable_store_takes_first_launch_path() {
        let backend = MemoryStore::with_values([(keys::FIRST_LAUNCH, 0), (keys::X, 5)]);
        backend.set_readable(false);
        let store = WindowLayoutStore::new(backend);

        let layout = store.load();

        assert!(layout.is_first_launch);
        assert!(layout.is_maximized);
        assert!(layout.uses_default_position());
    }

    #[test]
    fn query_live_uses_restored_rect_when_maximized() {
        let store = returning_store();
        let window = FixedPlacement(Ok(WindowPlacement {
            show_state: ShowState::Maximized,
            restored: Rect::new(120, 80, 1024, 700),
        }));

        let layout = store.query_live(&window);

        assert!(layout.is_maximized);
        assert_eq!(
            (layout.x, layout.y, layout.width, layout.height),
            (120, 80, 1024, 700)
        );
    }

    #[test]
    fn query_live_only_maximized_state_counts() {
        let store = returning_store();
        for show_state in [ShowState::Normal, ShowState::Minimized, ShowState::Other(10)] {
            let window = FixedPlacement(Ok(WindowPlacement {
                show_state,
                restored: Rect::new(0, 0, 800, 600),
            }));
            assert!(!store.query_live(&window).is_maximized, "{show_state:?}");
        }
    }

    #[test]
    fn query_live_failure_returns_type_defaults() {
        let store = returning_store();
        let window = FixedPlacement(Err(WindowError::PlacementFailed { handle: 0x1234 }));

        assert_eq!(store.query_live(&window), WindowLayout::default());
    }

    #[test]
    fn snapshot_of_maximized_window_restores_after_relaunch() {
        let store = returning_store();
        let window = FixedPlacement(Ok(WindowPlacement {
            show_state: ShowState::Maximized,
            restored: Rect::new(300, 200, 900, 650),
        }));

        store.save(&store.query_live(&window));
        let layout = store.load();

        assert_eq!(
            layout,
            WindowLayout {
                x: 300,
                y: 200,
                width: 900,
                height: 650,
                is_maximized: true,
                is_first_launch: false,
            }
        );
    }
}
