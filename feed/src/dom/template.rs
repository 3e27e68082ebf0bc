//! Declarative templates
//!
//! The `<template>` elements of a page: named content that is cloned, never
//! mutated in place.

use std::collections::HashMap;

use super::document::Fragment;
use crate::error::RenderError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    id: String,
    content: Fragment,
}

impl Template {
    pub fn new(id: &str, content: Fragment) -> Self {
        Self {
            id: id.to_string(),
            content,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// A deep copy of the template's content
    pub fn instantiate(&self) -> Fragment {
        self.content.clone()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Template>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, template: Template) -> Self {
        self.register(template);
        self
    }

    /// Registers `template`, replacing any template with the same id
    pub fn register(&mut self, template: Template) {
        self.templates.insert(template.id.clone(), template);
    }

    pub fn get(&self, id: &str) -> Result<&Template, RenderError> {
        self.templates
            .get(id)
            .ok_or_else(|| RenderError::UnknownTemplate(id.to_string()))
    }

    pub fn instantiate(&self, id: &str) -> Result<Fragment, RenderError> {
        self.get(id).map(Template::instantiate)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }
}
