pub use crate::components::theme::theme_ctx::imports::*;
pub use crate::components::Colored;

pub use std::rc::Rc;

pub use gloo_console as console;
pub use serde::Serialize;
pub use stylist::yew::Global;
pub use web_sys::{HtmlInputElement, HtmlTextAreaElement};

pub use stylist::css;
pub use yew::prelude::*;

/// Smoothly scrolls the element with `id` into view, if it exists.
pub fn scroll_to_section(id: &str) {
    let Some(element) = gloo_utils::document().get_element_by_id(id) else {
        console::log!(format!("no section with id {id}"));
        return;
    };

    let mut options = web_sys::ScrollIntoViewOptions::new();
    options.behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Section anchors the navigation scrolls to, in page order.
pub mod sections {
    pub const HERO: &str = "hero";
    pub const JOURNEY: &str = "journey";
    pub const STACK: &str = "stack";
    pub const PROJECTS: &str = "projects";
    pub const CONTACT: &str = "contact";
}
