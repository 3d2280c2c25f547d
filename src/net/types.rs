//! Wire DTOs for the JSON endpoints the page talks to.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads field for field so serde can
//! deserialize responses without any mapping layer. Timestamps arrive
//! pre-formatted as display strings; the client never parses them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A story as returned by the paginated feed endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Story {
    /// Unique story identifier.
    pub id: i64,
    /// Story body text.
    pub content: String,
    /// Whether the author chose to post anonymously.
    pub is_anonymous: bool,
    /// Attached image URL, if any.
    pub image_url: Option<String>,
    /// Display-ready creation timestamp (e.g. `"03 Agu 2026 14:05"`).
    pub created_at: String,
    /// Display name, already anonymized server-side when applicable.
    pub author_name: String,
    /// Total likes on this story.
    pub like_count: i64,
    /// Total comments on this story, replies included.
    pub comment_count: i64,
    /// Whether the current session has liked this story.
    pub user_has_liked: bool,
    /// Whether the current session may delete this story.
    pub can_delete: bool,
}

/// A comment on a story, with one level of nested replies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier.
    pub id: i64,
    /// Comment body text.
    pub content: String,
    /// Display-ready creation timestamp.
    pub created_at: String,
    /// Display name of the commenter.
    pub author_name: String,
    /// Total likes on this comment.
    pub like_count: i64,
    /// Whether the current session has liked this comment.
    pub user_has_liked: bool,
    /// Whether the current session may delete this comment.
    pub can_delete: bool,
    /// Direct replies; top-level comments only, replies never nest further.
    #[serde(default)]
    pub replies: Vec<Comment>,
}

/// One page of the story feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoriesPage {
    /// Stories in this page, in feed order.
    pub stories: Vec<Story>,
    /// Whether another page exists after this one.
    pub has_next: bool,
    /// Page number to request next, or `None` on the last page.
    pub next_page: Option<u32>,
    /// Total number of pages for the current category.
    pub total_pages: u32,
}

/// Server response to a like toggle on a story or comment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LikeResponse {
    /// Whether the item is liked after the toggle.
    pub liked: bool,
    /// Like count after the toggle.
    pub like_count: i64,
}

/// A single story together with its comment tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoryDetail {
    /// The story itself.
    pub story: Story,
    /// Top-level comments with their replies.
    pub comments: Vec<Comment>,
}
