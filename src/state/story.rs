//! Story-detail state: one story plus its comment tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! The detail page keeps the fetched story and its comments here. Posting a
//! comment goes through the server and then bumps `refresh_seq`, which the
//! page watches to re-fetch the tree instead of splicing replies in locally.

#[cfg(test)]
#[path = "story_test.rs"]
mod story_test;

use crate::net::types::{Comment, Story, StoryDetail};

/// State for the story-detail page.
#[derive(Clone, Debug, Default)]
pub struct StoryDetailState {
    /// The displayed story, once loaded.
    pub story: Option<Story>,
    /// Top-level comments with their replies.
    pub comments: Vec<Comment>,
    /// True while a detail fetch is in flight.
    pub loading: bool,
    /// Error from the most recent failed fetch, if any.
    pub error: Option<String>,
    /// Story ID the current contents belong to (or are being fetched for).
    pub story_id: Option<i64>,
    /// Bumped after a successful comment post to trigger a re-fetch.
    pub refresh_seq: u64,
}

impl StoryDetailState {
    /// Start fetching a story. Navigating to a different story clears the
    /// displayed data; refreshing the same story keeps it visible until the
    /// fresh copy lands.
    pub fn begin_load(&mut self, story_id: i64) {
        if self.story_id != Some(story_id) {
            self.story = None;
            self.comments.clear();
        }
        self.story_id = Some(story_id);
        self.loading = true;
        self.error = None;
    }

    /// Install a fetched detail. Ignored when the user has already navigated
    /// to a different story.
    pub fn apply_detail(&mut self, detail: StoryDetail) {
        if self.story_id != Some(detail.story.id) {
            return;
        }
        self.story = Some(detail.story);
        self.comments = detail.comments;
        self.loading = false;
        self.error = None;
    }

    /// Record a failed fetch. Ignored when the user has already navigated to
    /// a different story.
    pub fn fail_load(&mut self, story_id: i64, error: String) {
        if self.story_id != Some(story_id) {
            return;
        }
        self.loading = false;
        self.error = Some(error);
    }

    /// Update like state on the displayed story. No-op when a different (or
    /// no) story is shown.
    pub fn apply_story_like(&mut self, story_id: i64, liked: bool, like_count: i64) {
        if let Some(story) = self.story.as_mut() {
            if story.id == story_id {
                story.user_has_liked = liked;
                story.like_count = like_count;
            }
        }
    }

    /// Update like state on a comment anywhere in the tree. Returns whether a
    /// matching comment was found.
    pub fn apply_comment_like(&mut self, comment_id: i64, liked: bool, like_count: i64) -> bool {
        apply_comment_like_in(&mut self.comments, comment_id, liked, like_count)
    }

    /// Remove a comment (with its replies) from the tree and keep the story's
    /// comment count in step. Returns whether anything was removed.
    pub fn remove_comment(&mut self, comment_id: i64) -> bool {
        let Some(removed) = remove_comment_in(&mut self.comments, comment_id) else {
            return false;
        };
        if let Some(story) = self.story.as_mut() {
            let replies = i64::try_from(removed.replies.len()).unwrap_or(i64::MAX);
            story.comment_count = story.comment_count.saturating_sub(replies.saturating_add(1)).max(0);
        }
        true
    }

    /// Ask the page to re-fetch the detail, e.g. after posting a comment.
    pub fn request_refresh(&mut self) {
        self.refresh_seq += 1;
    }
}

fn apply_comment_like_in(comments: &mut [Comment], comment_id: i64, liked: bool, like_count: i64) -> bool {
    for comment in comments {
        if comment.id == comment_id {
            comment.user_has_liked = liked;
            comment.like_count = like_count;
            return true;
        }
        if apply_comment_like_in(&mut comment.replies, comment_id, liked, like_count) {
            return true;
        }
    }
    false
}

fn remove_comment_in(comments: &mut Vec<Comment>, comment_id: i64) -> Option<Comment> {
    if let Some(pos) = comments.iter().position(|c| c.id == comment_id) {
        return Some(comments.remove(pos));
    }
    for comment in comments {
        if let Some(removed) = remove_comment_in(&mut comment.replies, comment_id) {
            return Some(removed);
        }
    }
    None
}
