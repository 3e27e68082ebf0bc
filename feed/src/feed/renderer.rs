//! Feed renderer
//!
//! Fills cloned templates from feed records. Every slot the mapping needs
//! must exist in the template; a missing one is a `RenderError::MissingSlot`.

use crate::dom::{Element, Fragment, Selector, TemplateRegistry};
use crate::domain::entities::{ModerationStatus, OwnedPostSummary, PostSummary};
use crate::error::RenderError;

use super::templates::{
    NO_POST_TEMPLATE, POST_TEMPLATE, SENTINEL_ID, SENTINEL_TEMPLATE, TAG_TEMPLATE,
};

/// Sentinel text once the server reports no further pages
pub const NO_MORE_MESSAGE: &str = "No more memes";

/// A feed record that can be turned into markup
pub trait Renderable {
    fn render(&self, templates: &TemplateRegistry) -> Result<Fragment, RenderError>;
}

impl Renderable for PostSummary {
    fn render(&self, templates: &TemplateRegistry) -> Result<Fragment, RenderError> {
        render_post(templates, self)
    }
}

impl Renderable for OwnedPostSummary {
    fn render(&self, templates: &TemplateRegistry) -> Result<Fragment, RenderError> {
        render_owned_post(templates, self)
    }
}

/// Render a post of the home or author feed
pub fn render_post(
    templates: &TemplateRegistry,
    post: &PostSummary,
) -> Result<Fragment, RenderError> {
    let mut fragment = templates.instantiate(POST_TEMPLATE)?;

    slot(&mut fragment, POST_TEMPLATE, ".author-img")?.set_attr("src", &post.profile_pic_url);
    slot(&mut fragment, POST_TEMPLATE, ".author-username")?.set_text(&post.author);
    slot(&mut fragment, POST_TEMPLATE, ".meme-preview")?.set_attr("src", &post.meme_url);
    slot(&mut fragment, POST_TEMPLATE, ".post-link")?.set_attr("href", &post.post_link);

    let mut tags = Vec::with_capacity(post.tags.len());
    for tag in &post.tags {
        tags.extend(render_tag(templates, tag)?.into_roots());
    }
    slot(&mut fragment, POST_TEMPLATE, ".tags-container")?.append_children(tags);

    // Zero author links is fine; the template decides where they go.
    fragment.for_each_match_mut(
        &Selector::parse(".author-link"),
        &mut |link: &mut Element| link.set_attr("href", &post.author_link),
    );

    Ok(fragment)
}

fn render_tag(templates: &TemplateRegistry, tag: &str) -> Result<Fragment, RenderError> {
    let mut fragment = templates.instantiate(TAG_TEMPLATE)?;
    slot(&mut fragment, TAG_TEMPLATE, ".post-tag")?.set_text(tag);
    Ok(fragment)
}

/// Render one of the viewer's own posts, status block included
pub fn render_owned_post(
    templates: &TemplateRegistry,
    post: &OwnedPostSummary,
) -> Result<Fragment, RenderError> {
    let mut fragment = templates.instantiate(POST_TEMPLATE)?;

    slot(&mut fragment, POST_TEMPLATE, ".meme-preview")?.set_attr("src", &post.meme_url);
    slot(&mut fragment, POST_TEMPLATE, ".post-created-at")?.set_text(&post.post_created_at);

    let status = render_status(templates, &post.status)?;
    slot(&mut fragment, POST_TEMPLATE, ".post-container")?.append_children(status.into_roots());

    Ok(fragment)
}

/// Render the status block matching `status`
pub fn render_status(
    templates: &TemplateRegistry,
    status: &ModerationStatus,
) -> Result<Fragment, RenderError> {
    let template = status.template_id();
    let mut fragment = templates.instantiate(template)?;

    match status {
        ModerationStatus::WaitingModeration => {}
        ModerationStatus::Moderating { since } | ModerationStatus::Approved { since } => {
            slot(&mut fragment, template, ".status-created-at")?.set_text(since);
        }
        ModerationStatus::Denied {
            since,
            reason,
            details,
        } => {
            slot(&mut fragment, template, ".status-created-at")?.set_text(since);
            slot(&mut fragment, template, ".denial-reason")?.set_text(reason);
            slot(&mut fragment, template, ".denial-details")?.set_text(details);
        }
    }

    Ok(fragment)
}

/// The "nothing here" placeholder
pub fn render_placeholder(templates: &TemplateRegistry) -> Result<Fragment, RenderError> {
    templates.instantiate(NO_POST_TEMPLATE)
}

/// A fresh sentinel; the template must contain the sentinel id
pub fn render_sentinel(templates: &TemplateRegistry) -> Result<Fragment, RenderError> {
    let mut fragment = templates.instantiate(SENTINEL_TEMPLATE)?;
    slot(&mut fragment, SENTINEL_TEMPLATE, &format!("#{}", SENTINEL_ID))?;
    Ok(fragment)
}

fn slot<'a>(
    fragment: &'a mut Fragment,
    template: &str,
    selector: &str,
) -> Result<&'a mut Element, RenderError> {
    fragment
        .select_first_mut(&Selector::parse(selector))
        .ok_or_else(|| RenderError::MissingSlot {
            template: template.to_string(),
            selector: selector.to_string(),
        })
}
