use super::error::ThemeError;

/// The document-level element styling rules key off.
pub trait DocumentRoot {
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError>;
    fn remove_attribute(&mut self, name: &str) -> Result<(), ThemeError>;
}

/// `document.documentElement` of the current window.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserRoot;

impl BrowserRoot {
    fn element() -> Result<web_sys::Element, ThemeError> {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
            .ok_or(ThemeError::RootUnavailable)
    }
}

impl DocumentRoot for BrowserRoot {
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError> {
        Self::element()?
            .set_attribute(name, value)
            .map_err(|e| ThemeError::RootAccess(format!("{e:?}")))
    }

    fn remove_attribute(&mut self, name: &str) -> Result<(), ThemeError> {
        Self::element()?
            .remove_attribute(name)
            .map_err(|e| ThemeError::RootAccess(format!("{e:?}")))
    }
}

#[cfg(test)]
pub(crate) use memory::MemoryRoot;

#[cfg(test)]
mod memory {
    use super::*;
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::Rc;

    #[derive(Debug, Default, Clone)]
    pub(crate) struct MemoryRoot {
        attributes: Rc<RefCell<BTreeMap<String, String>>>,
    }

    impl MemoryRoot {
        pub(crate) fn get(&self, name: &str) -> Option<String> {
            self.attributes.borrow().get(name).cloned()
        }

        pub(crate) fn is_bare(&self) -> bool {
            self.attributes.borrow().is_empty()
        }
    }

    impl DocumentRoot for MemoryRoot {
        fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError> {
            self.attributes
                .borrow_mut()
                .insert(name.to_owned(), value.to_owned());
            Ok(())
        }

        fn remove_attribute(&mut self, name: &str) -> Result<(), ThemeError> {
            self.attributes.borrow_mut().remove(name);
            Ok(())
        }
    }
}
