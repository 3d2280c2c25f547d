//! HTTP helpers for the story endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, String>` so callers can decide whether a
//! failure becomes a flash message or just a log line. Nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LikeResponse, StoriesPage, StoryDetail};

#[cfg(any(test, feature = "hydrate"))]
fn stories_endpoint(page: u32, category: &str) -> String {
    format!("/api/stories?page={page}&category={category}")
}

#[cfg(any(test, feature = "hydrate"))]
fn story_detail_endpoint(story_id: i64) -> String {
    format!("/api/stories/{story_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn like_story_endpoint(story_id: i64) -> String {
    format!("/like_story/{story_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn like_comment_endpoint(comment_id: i64) -> String {
    format!("/like_comment/{comment_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn comment_endpoint(story_id: i64) -> String {
    format!("/comment/{story_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn delete_story_endpoint(story_id: i64) -> String {
    format!("/delete_story/{story_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn delete_comment_endpoint(comment_id: i64) -> String {
    format!("/delete_comment/{comment_id}")
}

/// Form body for the comment endpoint, which expects classic form encoding
/// rather than JSON.
#[cfg(any(test, feature = "hydrate"))]
fn comment_form_body(content: &str, parent_id: Option<i64>) -> String {
    let mut body = format!("content={}", urlencoding::encode(content));
    if let Some(parent_id) = parent_id {
        body.push_str(&format!("&parent_id={parent_id}"));
    }
    body
}

#[cfg(any(test, feature = "hydrate"))]
fn stories_request_failed_message(status: u16) -> String {
    format!("stories request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn story_request_failed_message(status: u16) -> String {
    format!("story request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn like_request_failed_message(status: u16) -> String {
    format!("like request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn comment_request_failed_message(status: u16) -> String {
    format!("comment request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn delete_request_failed_message(status: u16) -> String {
    format!("delete request failed: {status}")
}

/// Fetch one feed page from `/api/stories?page={page}&category={category}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_stories(page: u32, category: &str) -> Result<StoriesPage, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = stories_endpoint(page, category);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(stories_request_failed_message(resp.status()));
        }
        resp.json::<StoriesPage>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, category);
        Err("not available on server".to_owned())
    }
}

/// Fetch a single story with its comment tree from `/api/stories/{id}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_story_detail(story_id: i64) -> Result<StoryDetail, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = story_detail_endpoint(story_id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(story_request_failed_message(resp.status()));
        }
        resp.json::<StoryDetail>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = story_id;
        Err("not available on server".to_owned())
    }
}

/// Toggle the current user's like on a story via `POST /like_story/{id}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn like_story(story_id: i64) -> Result<LikeResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = like_story_endpoint(story_id);
        let resp = gloo_net::http::Request::post(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(like_request_failed_message(resp.status()));
        }
        resp.json::<LikeResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = story_id;
        Err("not available on server".to_owned())
    }
}

/// Toggle the current user's like on a comment via `POST /like_comment/{id}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn like_comment(comment_id: i64) -> Result<LikeResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = like_comment_endpoint(comment_id);
        let resp = gloo_net::http::Request::post(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(like_request_failed_message(resp.status()));
        }
        resp.json::<LikeResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = comment_id;
        Err("not available on server".to_owned())
    }
}

/// Post a comment (or a reply when `parent_id` is set) via
/// `POST /comment/{story_id}` with a form-encoded body.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn post_comment(story_id: i64, content: &str, parent_id: Option<i64>) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = comment_endpoint(story_id);
        let body = comment_form_body(content, parent_id);
        let resp = gloo_net::http::Request::post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(comment_request_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (story_id, content, parent_id);
        Err("not available on server".to_owned())
    }
}

/// Delete a story via `POST /delete_story/{id}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn delete_story(story_id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = delete_story_endpoint(story_id);
        let resp = gloo_net::http::Request::post(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(delete_request_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = story_id;
        Err("not available on server".to_owned())
    }
}

/// Delete a comment via `POST /delete_comment/{id}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn delete_comment(comment_id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = delete_comment_endpoint(comment_id);
        let resp = gloo_net::http::Request::post(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(delete_request_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = comment_id;
        Err("not available on server".to_owned())
    }
}
