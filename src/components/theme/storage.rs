use super::error::ThemeError;

/// A string-keyed durable slot for preferences.
pub trait PreferenceStorage {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// `window.localStorage`, looked up on every access.
/// Values are stored raw, without JSON quoting.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, ThemeError> {
        web_sys::window()
            .ok_or(ThemeError::StorageUnavailable)?
            .local_storage()
            .map_err(|e| ThemeError::StorageAccess(format!("{e:?}")))?
            .ok_or(ThemeError::StorageUnavailable)
    }
}

impl PreferenceStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| ThemeError::StorageAccess(format!("{e:?}")))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| ThemeError::StorageAccess(format!("{e:?}")))
    }
}

#[cfg(test)]
pub(crate) use memory::MemoryStorage;

#[cfg(test)]
mod memory {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Shared in-memory slots. Clones see the same data, so a test can keep
    /// a handle while the store owns another.
    #[derive(Debug, Default, Clone)]
    pub(crate) struct MemoryStorage {
        slots: Rc<RefCell<HashMap<String, String>>>,
        unavailable: bool,
        writes: Rc<RefCell<usize>>,
    }

    impl MemoryStorage {
        pub(crate) fn with(key: &str, value: &str) -> Self {
            let storage = Self::default();
            storage
                .slots
                .borrow_mut()
                .insert(key.to_owned(), value.to_owned());
            storage
        }

        pub(crate) fn unavailable() -> Self {
            Self {
                unavailable: true,
                ..Self::default()
            }
        }

        pub(crate) fn get(&self, key: &str) -> Option<String> {
            self.slots.borrow().get(key).cloned()
        }

        pub(crate) fn writes(&self) -> usize {
            *self.writes.borrow()
        }
    }

    impl PreferenceStorage for MemoryStorage {
        fn read(&self, key: &str) -> Result<Option<String>, ThemeError> {
            if self.unavailable {
                return Err(ThemeError::StorageUnavailable);
            }
            Ok(self.get(key))
        }

        fn write(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
            if self.unavailable {
                return Err(ThemeError::StorageUnavailable);
            }
            *self.writes.borrow_mut() += 1;
            self.slots
                .borrow_mut()
                .insert(key.to_owned(), value.to_owned());
            Ok(())
        }
    }
}
