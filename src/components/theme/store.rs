// Owner of the theme preference.
//
// Constructed with the default theme, reconciled with storage once by
// `initialize`, then mutated only by `set_theme`/`toggle_theme`.
// Every mutation applies the root attribute and writes storage before
// listeners hear about it.

use std::rc::Rc;

use super::error::ThemeError;
use super::root::DocumentRoot;
use super::storage::PreferenceStorage;
use super::themes::Theme;

/// Where the preference lives. The starting theme is always
/// `Theme::default()`, which leaves the root unmarked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeConfig {
    pub storage_key: &'static str,
    pub attribute: &'static str,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme",
            attribute: "data-theme",
        }
    }
}

/// What consumers observe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeSnapshot {
    pub value: Theme,
    pub initialized: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

type Listener = Rc<dyn Fn(ThemeSnapshot)>;

pub struct ThemeStore<S, R> {
    config: ThemeConfig,
    value: Theme,
    initialized: bool,
    storage: S,
    root: R,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: usize,
}

impl<S, R> ThemeStore<S, R>
where
    S: PreferenceStorage,
    R: DocumentRoot,
{
    pub fn new(storage: S, root: R) -> Self {
        Self::with_config(ThemeConfig::default(), storage, root)
    }

    pub fn with_config(config: ThemeConfig, storage: S, root: R) -> Self {
        Self {
            value: Theme::default(),
            config,
            initialized: false,
            storage,
            root,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn get_theme(&self) -> ThemeSnapshot {
        ThemeSnapshot {
            value: self.value,
            initialized: self.initialized,
        }
    }

    /// Adopts the persisted theme, if any. Runs once; later calls are ignored.
    pub fn initialize(&mut self) {
        if self.initialized {
            log::debug!("theme store already initialized");
            return;
        }

        match self.remembered() {
            Ok(Some(theme)) => {
                self.value = theme;
                self.apply();
            }
            Ok(None) => {}
            Err(e) => log::debug!("ignoring remembered theme: {e}"),
        }

        self.initialized = true;
        self.notify();
    }

    /// An explicit choice made before `initialize` supersedes whatever is
    /// stored, so it also completes initialization.
    pub fn set_theme(&mut self, next: Theme) {
        self.value = next;
        self.initialized = true;
        self.apply();
        self.remember();
        self.notify();
    }

    pub fn toggle_theme(&mut self) {
        self.set_theme(self.value.opposite());
    }

    pub fn subscribe(&mut self, listener: impl Fn(ThemeSnapshot) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn remembered(&self) -> Result<Option<Theme>, ThemeError> {
        match self.storage.read(self.config.storage_key)? {
            Some(tag) => Ok(Some(Theme::try_from(tag.as_str())?)),
            None => Ok(None),
        }
    }

    fn remember(&mut self) {
        if let Err(e) = self
            .storage
            .write(self.config.storage_key, self.value.tag())
        {
            log::warn!("failed to remember theme {}: {e}", self.value.tag());
        }
    }

    fn apply(&mut self) {
        let attribute = self.config.attribute;
        let applied = if self.value.marks_root() {
            self.root.set_attribute(attribute, self.value.tag())
        } else {
            self.root.remove_attribute(attribute)
        };

        if let Err(e) = applied {
            log::warn!("failed to apply theme {}: {e}", self.value.tag());
        }
    }

    fn notify(&self) {
        let snapshot = self.get_theme();
        for (_, listener) in &self.listeners {
            listener(snapshot);
        }
    }
}

impl<S, R> std::fmt::Debug for ThemeStore<S, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("config", &self.config)
            .field("value", &self.value)
            .field("initialized", &self.initialized)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::components::theme::root::MemoryRoot;
    use crate::components::theme::storage::MemoryStorage;

    fn store_with(storage: MemoryStorage) -> (ThemeStore<MemoryStorage, MemoryRoot>, MemoryRoot) {
        let root = MemoryRoot::default();
        (ThemeStore::new(storage, root.clone()), root)
    }

    #[test]
    fn toggling_alternates_with_parity() {
        for n in 0..7 {
            let (mut store, _) = store_with(MemoryStorage::default());
            store.initialize();
            for _ in 0..n {
                store.toggle_theme();
            }
            let expected = if n % 2 == 0 { Theme::Ruthless } else { Theme::Tron };
            assert_eq!(store.get_theme().value, expected, "after {n} toggles");
        }
    }

    #[test]
    fn set_theme_is_immediately_visible() {
        let (mut store, _) = store_with(MemoryStorage::default());
        store.initialize();
        for theme in [Theme::Tron, Theme::Ruthless, Theme::Tron] {
            store.set_theme(theme);
            assert_eq!(store.get_theme().value, theme);
        }
    }

    #[test]
    fn initialize_adopts_remembered_alternate() {
        let (mut store, root) = store_with(MemoryStorage::with("theme", "tron"));
        store.initialize();

        assert_eq!(
            store.get_theme(),
            ThemeSnapshot {
                value: Theme::Tron,
                initialized: true
            }
        );
        assert_eq!(root.get("data-theme").as_deref(), Some("tron"));
    }

    #[test]
    fn initialize_without_remembered_theme_keeps_default() {
        let (mut store, root) = store_with(MemoryStorage::default());
        store.initialize();

        assert_eq!(store.get_theme().value, Theme::Ruthless);
        assert!(store.get_theme().initialized);
        assert!(root.is_bare());
    }

    #[test]
    fn initialize_treats_unknown_tag_as_absent() {
        let storage = MemoryStorage::with("theme", "neon");
        let (mut store, root) = store_with(storage.clone());
        store.initialize();

        assert_eq!(store.get_theme().value, Theme::Ruthless);
        assert!(root.get("data-theme").is_none());
        assert_eq!(storage.get("theme").as_deref(), Some("neon"));
    }

    #[test]
    fn initialize_survives_unavailable_storage() {
        let (mut store, root) = store_with(MemoryStorage::unavailable());
        store.initialize();

        assert_eq!(store.get_theme().value, Theme::Ruthless);
        assert!(store.get_theme().initialized);
        assert!(root.is_bare());
    }

    #[test]
    fn uninitialized_store_reports_default_whatever_is_stored() {
        let (store, root) = store_with(MemoryStorage::with("theme", "tron"));

        assert_eq!(
            store.get_theme(),
            ThemeSnapshot {
                value: Theme::Ruthless,
                initialized: false
            }
        );
        assert!(root.is_bare());
    }

    #[test]
    fn initialize_runs_once() {
        let storage = MemoryStorage::with("theme", "tron");
        let (mut store, _) = store_with(storage);
        store.initialize();
        store.set_theme(Theme::Ruthless);
        store.initialize();

        assert_eq!(store.get_theme().value, Theme::Ruthless);
    }

    #[test]
    fn explicit_choice_before_initialize_wins() {
        let storage = MemoryStorage::with("theme", "tron");
        let (mut store, root) = store_with(storage.clone());
        store.set_theme(Theme::Ruthless);
        store.initialize();

        assert_eq!(store.get_theme().value, Theme::Ruthless);
        assert!(store.get_theme().initialized);
        assert!(root.is_bare());
        assert_eq!(storage.get("theme").as_deref(), Some("ruthless"));
    }

    #[test]
    fn set_theme_writes_attribute_and_storage() {
        let storage = MemoryStorage::default();
        let (mut store, root) = store_with(storage.clone());
        store.initialize();

        store.set_theme(Theme::Tron);
        assert_eq!(root.get("data-theme").as_deref(), Some("tron"));
        assert_eq!(storage.get("theme").as_deref(), Some("tron"));

        store.set_theme(Theme::Ruthless);
        assert!(root.get("data-theme").is_none());
        assert_eq!(storage.get("theme").as_deref(), Some("ruthless"));
    }

    #[test]
    fn setting_the_same_theme_twice_is_stable() {
        let storage = MemoryStorage::default();
        let (mut store, root) = store_with(storage.clone());
        store.initialize();

        store.set_theme(Theme::Ruthless);
        let once = (store.get_theme(), root.get("data-theme"), storage.get("theme"));
        store.set_theme(Theme::Ruthless);
        let twice = (store.get_theme(), root.get("data-theme"), storage.get("theme"));

        assert_eq!(once, twice);
        assert_eq!(storage.writes(), 2);
    }

    #[test]
    fn set_theme_without_storage_is_session_only() {
        let (mut store, root) = store_with(MemoryStorage::unavailable());
        store.initialize();
        store.toggle_theme();

        assert_eq!(store.get_theme().value, Theme::Tron);
        assert_eq!(root.get("data-theme").as_deref(), Some("tron"));
    }

    #[test]
    fn remembered_theme_round_trips_into_a_fresh_store() {
        let storage = MemoryStorage::default();
        let (mut store, _) = store_with(storage.clone());
        store.initialize();
        store.set_theme(Theme::Tron);

        let remembered = storage.get("theme").expect("theme to be remembered");
        let (mut fresh, _) = store_with(MemoryStorage::with("theme", &remembered));
        fresh.initialize();

        assert_eq!(fresh.get_theme().value, Theme::Tron);
    }

    #[test]
    fn listeners_observe_applied_state() {
        let storage = MemoryStorage::default();
        let (mut store, root) = store_with(storage.clone());
        let seen = Rc::new(RefCell::new(Vec::new()));

        let observer = {
            let seen = seen.clone();
            let root = root.clone();
            let storage = storage.clone();
            move |snapshot: ThemeSnapshot| {
                seen.borrow_mut().push((
                    snapshot,
                    root.get("data-theme"),
                    storage.get("theme"),
                ));
            }
        };
        store.subscribe(observer);

        store.initialize();
        store.toggle_theme();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(
            seen[0],
            (
                ThemeSnapshot {
                    value: Theme::Ruthless,
                    initialized: true
                },
                None,
                None
            )
        );
        assert_eq!(
            seen[1],
            (
                ThemeSnapshot {
                    value: Theme::Tron,
                    initialized: true
                },
                Some("tron".to_owned()),
                Some("tron".to_owned())
            )
        );
    }

    #[test]
    fn unsubscribed_listeners_are_silent() {
        let (mut store, _) = store_with(MemoryStorage::default());
        let calls = Rc::new(RefCell::new(0));

        let id = {
            let calls = calls.clone();
            store.subscribe(move |_| *calls.borrow_mut() += 1)
        };
        store.initialize();
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.toggle_theme();

        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn config_overrides_key_and_attribute() {
        let storage = MemoryStorage::with("site-theme", "tron");
        let root = MemoryRoot::default();
        let config = ThemeConfig {
            storage_key: "site-theme",
            attribute: "data-scheme",
        };
        let mut store = ThemeStore::with_config(config, storage, root.clone());
        store.initialize();

        assert_eq!(store.get_theme().value, Theme::Tron);
        assert_eq!(root.get("data-scheme").as_deref(), Some("tron"));
    }

    #[test]
    fn custom_config_still_starts_unmarked_on_the_primary_theme() {
        let root = MemoryRoot::default();
        let config = ThemeConfig {
            storage_key: "site-theme",
            attribute: "data-scheme",
        };
        let mut store = ThemeStore::with_config(config, MemoryStorage::default(), root.clone());

        assert_eq!(
            store.get_theme(),
            ThemeSnapshot {
                value: Theme::Ruthless,
                initialized: false
            }
        );
        assert!(!store.get_theme().value.marks_root());
        assert!(root.is_bare());

        store.initialize();
        assert_eq!(store.get_theme().value, Theme::Ruthless);
        assert!(root.is_bare());
    }
}
