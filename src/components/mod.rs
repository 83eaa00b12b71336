pub mod imports;

mod colored;
mod contact;
mod default_styling;
mod header;
mod hero;
mod journey;
mod projects;
mod tech_stack;
mod title;

pub use colored::Colored;
pub use contact::Contact;
pub use default_styling::DefaultStyling;
pub use header::Header;
pub use hero::Hero;
pub use journey::Journey;
pub use projects::Projects;
pub use tech_stack::TechStack;
pub use title::PageTitle;

pub mod theme;
pub use theme::theme_ctx::WithTheme;
pub use theme::toggle::ThemeToggle;
