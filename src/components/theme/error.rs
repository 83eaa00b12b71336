#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("preference storage is unavailable")]
    StorageUnavailable,

    #[error("preference storage access failed: {0}")]
    StorageAccess(String),

    #[error("document root is unavailable")]
    RootUnavailable,

    #[error("failed to update document root: {0}")]
    RootAccess(String),

    #[error("unrecognized theme tag `{0}`")]
    UnrecognizedTag(String),

    #[error("{component} read the theme context outside of WithTheme")]
    InvalidUsage { component: &'static str },
}

impl ThemeError {
    /// Runtime environment limitations are swallowed by the store.
    /// Only wiring defects propagate.
    pub fn is_absorbed(&self) -> bool {
        !matches!(self, Self::InvalidUsage { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_invalid_usage_escapes() {
        assert!(ThemeError::StorageUnavailable.is_absorbed());
        assert!(ThemeError::RootAccess("detached".into()).is_absorbed());
        assert!(ThemeError::UnrecognizedTag("neon".into()).is_absorbed());
        assert!(!ThemeError::InvalidUsage { component: "Header" }.is_absorbed());
    }

    #[test]
    fn invalid_usage_names_the_component() {
        let error = ThemeError::InvalidUsage {
            component: "portfolio::components::ThemeToggle",
        };
        assert_eq!(
            error.to_string(),
            "portfolio::components::ThemeToggle read the theme context outside of WithTheme"
        );
    }
}
