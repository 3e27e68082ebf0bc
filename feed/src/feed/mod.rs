//! Feed module
//!
//! Template-driven rendering of feed records.

pub mod renderer;
pub mod templates;

pub use renderer::{
    render_owned_post, render_placeholder, render_post, render_sentinel, render_status,
    Renderable, NO_MORE_MESSAGE,
};
pub use templates::{home_templates, my_posts_templates, SENTINEL_ID};
