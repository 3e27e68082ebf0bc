//! Default templates
//!
//! The markup the site's feed pages ship in their `<template>` elements.
//! Slot class names are the contract with the renderer.

use crate::dom::{Element, Fragment, Template, TemplateRegistry};

pub const POST_TEMPLATE: &str = "post-template";
pub const NO_POST_TEMPLATE: &str = "no-post-template";
pub const SENTINEL_TEMPLATE: &str = "sentinel-template";
pub const TAG_TEMPLATE: &str = "tag-template";
pub const WAITING_MODERATION_TEMPLATE: &str = "waiting-moderation-info";
pub const MODERATING_TEMPLATE: &str = "moderating-info";
pub const DENIED_TEMPLATE: &str = "denied-info";
pub const APPROVED_TEMPLATE: &str = "approved-info";

/// Id of the sentinel element inside `sentinel-template`
pub const SENTINEL_ID: &str = "sentinel";

/// Templates of the home and author pages
pub fn home_templates() -> TemplateRegistry {
    shared_templates()
        .with(Template::new(POST_TEMPLATE, home_post()))
        .with(Template::new(
            TAG_TEMPLATE,
            Fragment::from(Element::new("span").with_class("post-tag badge")),
        ))
}

/// Templates of the my-posts page
pub fn my_posts_templates() -> TemplateRegistry {
    shared_templates()
        .with(Template::new(POST_TEMPLATE, owned_post()))
        .with(Template::new(
            WAITING_MODERATION_TEMPLATE,
            status_block("status-waiting", "Waiting for moderation", false),
        ))
        .with(Template::new(
            MODERATING_TEMPLATE,
            status_block("status-moderating", "Moderation started", true),
        ))
        .with(Template::new(DENIED_TEMPLATE, denied_block()))
        .with(Template::new(
            APPROVED_TEMPLATE,
            status_block("status-approved", "Approved", true),
        ))
}

fn shared_templates() -> TemplateRegistry {
    TemplateRegistry::new()
        .with(Template::new(
            SENTINEL_TEMPLATE,
            Fragment::from(
                Element::new("div")
                    .with_id(SENTINEL_ID)
                    .with_class("sentinel text-center")
                    .with_child(
                        Element::new("div")
                            .with_class("spinner-border")
                            .with_attr("role", "status"),
                    ),
            ),
        ))
        .with(Template::new(
            NO_POST_TEMPLATE,
            Fragment::from(
                Element::new("div")
                    .with_class("container-msg")
                    .with_child(Element::new("p").with_text("No memes here yet")),
            ),
        ))
}

fn home_post() -> Fragment {
    Fragment::from(
        Element::new("div")
            .with_class("post-container card")
            .with_child(
                Element::new("div")
                    .with_class("card-header")
                    .with_child(
                        Element::new("a")
                            .with_class("author-link")
                            .with_attr("href", "")
                            .with_child(
                                Element::new("img")
                                    .with_class("author-img rounded-circle")
                                    .with_attr("src", "")
                                    .with_attr("alt", "Author"),
                            ),
                    )
                    .with_child(
                        Element::new("a")
                            .with_class("author-link")
                            .with_attr("href", "")
                            .with_child(Element::new("span").with_class("author-username")),
                    ),
            )
            .with_child(
                Element::new("a")
                    .with_class("post-link")
                    .with_attr("href", "")
                    .with_child(
                        Element::new("img")
                            .with_class("meme-preview card-img")
                            .with_attr("src", "")
                            .with_attr("alt", "Meme"),
                    ),
            )
            .with_child(Element::new("div").with_class("tags-container card-footer")),
    )
}

fn owned_post() -> Fragment {
    Fragment::from(
        Element::new("div")
            .with_class("post-container card")
            .with_child(
                Element::new("img")
                    .with_class("meme-preview card-img-top")
                    .with_attr("src", "")
                    .with_attr("alt", "Meme"),
            )
            .with_child(
                Element::new("p")
                    .with_class("post-meta")
                    .with_text("Posted")
                    .with_child(Element::new("span").with_class("post-created-at")),
            ),
    )
}

fn status_block(class: &str, label: &str, timestamped: bool) -> Fragment {
    let mut block = Element::new("div")
        .with_class("status")
        .with_class(class)
        .with_child(Element::new("span").with_class("status-label").with_text(label));
    if timestamped {
        block.append_child(Element::new("span").with_class("status-created-at"));
    }
    Fragment::from(block)
}

fn denied_block() -> Fragment {
    Fragment::from(
        Element::new("div")
            .with_class("status status-denied")
            .with_child(Element::new("span").with_class("status-label").with_text("Denied"))
            .with_child(Element::new("span").with_class("status-created-at"))
            .with_child(
                Element::new("p")
                    .with_text("Reason:")
                    .with_child(Element::new("span").with_class("denial-reason")),
            )
            .with_child(Element::new("p").with_class("denial-details")),
    )
}
