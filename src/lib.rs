pub mod app;
pub mod components;
pub mod static_content;

pub use app::App;
