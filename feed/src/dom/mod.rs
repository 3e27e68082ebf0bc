//! Document model
//!
//! An in-memory stand-in for the browser DOM: element trees, detached
//! fragments, the live document and named templates.

pub mod document;
pub mod element;
pub mod template;

pub use document::{Document, Fragment};
pub use element::{escape, Element, Selector};
pub use template::{Template, TemplateRegistry};
