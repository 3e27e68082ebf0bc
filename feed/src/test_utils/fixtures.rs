//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid record that can be customized.

use crate::domain::entities::{ModerationStatus, OwnedPostSummary, PostSummary};

/// Create an approved post by `author` with default links and tags
pub fn test_post(author: &str) -> PostSummary {
    PostSummary {
        author: author.to_string(),
        profile_pic_url: format!("/media/profile_pics/{}.png", author),
        author_link: format!("/author/{}/", author),
        meme_url: format!("/media/memes/{}.png", author),
        post_link: format!("/post/{}-1/", author),
        tags: vec!["funny".to_string(), "classic".to_string()],
    }
}

/// Create `count` posts by distinct authors `user1`, `user2`, ...
pub fn test_posts(count: usize) -> Vec<PostSummary> {
    (1..=count).map(|i| test_post(&format!("user{}", i))).collect()
}

/// Create one of the viewer's posts with the given moderation status
pub fn test_owned_post(status: ModerationStatus) -> OwnedPostSummary {
    OwnedPostSummary {
        meme_url: "/media/memes/mine.png".to_string(),
        post_created_at: "01 Mar 2024, 09:30".to_string(),
        status,
    }
}
