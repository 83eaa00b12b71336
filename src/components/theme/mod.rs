pub mod error;
pub mod root;
pub mod storage;
pub mod store;
pub mod theme_ctx;
pub mod themes;
pub mod toggle;

pub mod prelude {
    pub use super::error::ThemeError;
    pub use super::store::{ThemeConfig, ThemeSnapshot, ThemeStore};
    pub use super::theme_ctx::{ThemeCtx, ThemeCtxSub, ThemeHandle, WithTheme};
    pub use super::themes::{Palette, Theme};
    pub use super::toggle::{ThemeToggle, ToggleFace};
}
