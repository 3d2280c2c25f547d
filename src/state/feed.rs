//! Infinite-scroll feed state for the home page.
//!
//! DESIGN
//! ======
//! One struct owns pagination so the scroll handler, the category tabs, and
//! the initial load all negotiate through the same `begin_load` gate. Each
//! category switch bumps `epoch`; responses carrying a stale epoch are
//! dropped instead of landing in the wrong feed.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::net::types::{StoriesPage, Story};

/// Feed ordering selected via the category tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeedCategory {
    /// Newest stories first.
    #[default]
    Latest,
    /// Most-liked stories first.
    Popular,
}

impl FeedCategory {
    /// Query-string value the server expects.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Popular => "popular",
        }
    }

    /// Tab label shown in the UI.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Latest => "Terbaru",
            Self::Popular => "Terpopuler",
        }
    }
}

/// A claimed page load: what to fetch and which epoch the result belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedRequest {
    /// Epoch at claim time; `apply_page`/`fail_load` compare against it.
    pub epoch: u64,
    /// Page number to request.
    pub page: u32,
    /// Category to request.
    pub category: FeedCategory,
}

/// Pagination state for the story feed.
#[derive(Clone, Debug)]
pub struct FeedState {
    /// Stories rendered so far, in feed order.
    pub stories: Vec<Story>,
    /// Active feed category.
    pub category: FeedCategory,
    /// Page number the next request should ask for.
    pub next_page: u32,
    /// True while a page request is in flight.
    pub loading: bool,
    /// False once the server reports no further pages.
    pub has_more: bool,
    /// Error from the most recent failed page load, if any.
    pub last_error: Option<String>,
    /// Bumped on every category switch so stale responses can be discarded.
    pub epoch: u64,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            stories: Vec::new(),
            category: FeedCategory::Latest,
            next_page: 1,
            loading: false,
            has_more: true,
            last_error: None,
            epoch: 0,
        }
    }
}

impl FeedState {
    /// Claim the next page load.
    ///
    /// Returns `None` while a request is already in flight or after the last
    /// page arrived; otherwise marks the feed loading and returns what to
    /// fetch. At most one request can be in flight at a time.
    pub fn begin_load(&mut self) -> Option<FeedRequest> {
        if self.loading || !self.has_more {
            return None;
        }
        self.loading = true;
        self.last_error = None;
        Some(FeedRequest {
            epoch: self.epoch,
            page: self.next_page,
            category: self.category,
        })
    }

    /// Append a fetched page. Responses from a previous epoch are ignored.
    pub fn apply_page(&mut self, epoch: u64, page: StoriesPage) {
        if epoch != self.epoch {
            return;
        }
        self.loading = false;
        self.has_more = page.has_next;
        self.next_page = page.next_page.unwrap_or(self.next_page.saturating_add(1));
        self.stories.extend(page.stories);
    }

    /// Record a failed page load. Failures from a previous epoch are ignored.
    pub fn fail_load(&mut self, epoch: u64, error: String) {
        if epoch != self.epoch {
            return;
        }
        self.loading = false;
        self.last_error = Some(error);
    }

    /// Switch the active category. Returns `false` when the category is
    /// already active; otherwise resets pagination and bumps the epoch so any
    /// response still in flight gets dropped.
    pub fn select_category(&mut self, category: FeedCategory) -> bool {
        if self.category == category {
            return false;
        }
        self.category = category;
        self.stories.clear();
        self.next_page = 1;
        self.loading = false;
        self.has_more = true;
        self.last_error = None;
        self.epoch += 1;
        true
    }

    /// Whether the feed is pristine and should kick off its first page load.
    /// Becomes `false` as soon as a load starts, succeeds, or fails, so the
    /// effect watching it settles after one fetch per epoch.
    #[must_use]
    pub fn needs_initial_load(&self) -> bool {
        self.stories.is_empty()
            && self.next_page == 1
            && !self.loading
            && self.has_more
            && self.last_error.is_none()
    }

    /// Update like state on a story already in the feed. No-op when the story
    /// is not loaded.
    pub fn apply_story_like(&mut self, story_id: i64, liked: bool, like_count: i64) {
        if let Some(story) = self.stories.iter_mut().find(|s| s.id == story_id) {
            story.user_has_liked = liked;
            story.like_count = like_count;
        }
    }

    /// Drop a story from the feed. Returns whether anything was removed.
    pub fn remove_story(&mut self, story_id: i64) -> bool {
        let before = self.stories.len();
        self.stories.retain(|s| s.id != story_id);
        self.stories.len() != before
    }
}
