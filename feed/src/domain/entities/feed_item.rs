//! Feed item entities
//!
//! One record type per feed variant. Home and author feeds list approved
//! posts by anyone; the my-posts feed lists the viewer's own posts together
//! with their moderation status.

use serde::Deserialize;

/// An approved post as shown in the home and author feeds
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostSummary {
    /// Author username
    pub author: String,
    /// Author profile picture URL
    pub profile_pic_url: String,
    /// Link to the author's posts
    pub author_link: String,
    /// Meme media URL
    pub meme_url: String,
    /// Post permalink
    pub post_link: String,
    /// Tags, already ordered by the server
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One of the viewer's own posts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedPostSummary {
    pub meme_url: String,
    /// Creation time, already formatted for the viewer's timezone
    pub post_created_at: String,
    pub status: ModerationStatus,
}

/// Moderation status of an owned post
///
/// Timestamps are display strings formatted by the server in the viewer's
/// timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModerationStatus {
    WaitingModeration,
    Moderating {
        since: String,
    },
    Denied {
        since: String,
        reason: String,
        details: String,
    },
    Approved {
        since: String,
    },
}

impl ModerationStatus {
    /// Id of the template that renders this status
    pub fn template_id(&self) -> &'static str {
        match self {
            ModerationStatus::WaitingModeration => "waiting-moderation-info",
            ModerationStatus::Moderating { .. } => "moderating-info",
            ModerationStatus::Denied { .. } => "denied-info",
            ModerationStatus::Approved { .. } => "approved-info",
        }
    }
}

impl std::fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModerationStatus::WaitingModeration => write!(f, "waiting_moderation"),
            ModerationStatus::Moderating { .. } => write!(f, "moderating"),
            ModerationStatus::Denied { .. } => write!(f, "denied"),
            ModerationStatus::Approved { .. } => write!(f, "approved"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_template_ids() {
        assert_eq!(
            ModerationStatus::WaitingModeration.template_id(),
            "waiting-moderation-info"
        );
        assert_eq!(
            ModerationStatus::Moderating {
                since: String::new()
            }
            .template_id(),
            "moderating-info"
        );
        assert_eq!(
            ModerationStatus::Denied {
                since: String::new(),
                reason: String::new(),
                details: String::new(),
            }
            .template_id(),
            "denied-info"
        );
        assert_eq!(
            ModerationStatus::Approved {
                since: String::new()
            }
            .template_id(),
            "approved-info"
        );
    }

    #[test]
    fn status_display() {
        assert_eq!(
            ModerationStatus::WaitingModeration.to_string(),
            "waiting_moderation"
        );
        assert_eq!(
            ModerationStatus::Approved {
                since: "01 Jan 2024, 10:00".into()
            }
            .to_string(),
            "approved"
        );
    }

    #[test]
    fn post_summary_tags_default_to_empty() {
        let json = r#"{
            "author": "alice",
            "profile_pic_url": "/media/alice.png",
            "author_link": "/author/alice/",
            "meme_url": "/media/meme.png",
            "post_link": "/post/abc/"
        }"#;
        let post: PostSummary = serde_json::from_str(json).unwrap();
        assert!(post.tags.is_empty());
        assert_eq!(post.author, "alice");
    }
}
