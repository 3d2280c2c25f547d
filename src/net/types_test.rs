use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_story() -> Story {
    Story {
        id: 1,
        content: "Hari ini aku senang sekali".to_owned(),
        is_anonymous: false,
        image_url: Some("/static/uploads/foto.jpg".to_owned()),
        created_at: "03 Agu 2026 14:05".to_owned(),
        author_name: "budi".to_owned(),
        like_count: 3,
        comment_count: 2,
        user_has_liked: true,
        can_delete: false,
    }
}

fn make_comment() -> Comment {
    Comment {
        id: 10,
        content: "Semangat ya!".to_owned(),
        created_at: "03 Agu 2026 15:00".to_owned(),
        author_name: "sari".to_owned(),
        like_count: 1,
        user_has_liked: false,
        can_delete: true,
        replies: vec![],
    }
}

// =============================================================
// Story serde
// =============================================================

#[test]
fn story_round_trip() {
    let story = make_story();
    let json = serde_json::to_string(&story).unwrap();
    let back: Story = serde_json::from_str(&json).unwrap();
    assert_eq!(story, back);
}

#[test]
fn story_deserializes_from_feed_payload() {
    let json = r#"{
        "id": 42,
        "content": "Curhat pertamaku",
        "is_anonymous": true,
        "image_url": null,
        "created_at": "01 Agu 2026 09:30",
        "author_name": "Anonymous",
        "like_count": 0,
        "comment_count": 0,
        "user_has_liked": false,
        "can_delete": false
    }"#;
    let story: Story = serde_json::from_str(json).unwrap();
    assert_eq!(story.id, 42);
    assert!(story.is_anonymous);
    assert_eq!(story.image_url, None);
    assert_eq!(story.author_name, "Anonymous");
}

#[test]
fn story_requires_id() {
    let json = r#"{
        "content": "tanpa id",
        "is_anonymous": false,
        "image_url": null,
        "created_at": "01 Agu 2026 09:30",
        "author_name": "budi",
        "like_count": 0,
        "comment_count": 0,
        "user_has_liked": false,
        "can_delete": false
    }"#;
    assert!(serde_json::from_str::<Story>(json).is_err());
}

// =============================================================
// Comment serde
// =============================================================

#[test]
fn comment_round_trip_with_replies() {
    let comment = Comment {
        replies: vec![make_comment()],
        ..make_comment()
    };
    let json = serde_json::to_string(&comment).unwrap();
    let back: Comment = serde_json::from_str(&json).unwrap();
    assert_eq!(comment, back);
}

#[test]
fn comment_replies_default_to_empty_when_missing() {
    let json = r#"{
        "id": 7,
        "content": "balasan",
        "created_at": "02 Agu 2026 10:00",
        "author_name": "sari",
        "like_count": 0,
        "user_has_liked": false,
        "can_delete": false
    }"#;
    let comment: Comment = serde_json::from_str(json).unwrap();
    assert!(comment.replies.is_empty());
}

// =============================================================
// StoriesPage serde
// =============================================================

#[test]
fn stories_page_deserializes_with_next_page() {
    let json = r#"{
        "stories": [{
            "id": 1,
            "content": "isi",
            "is_anonymous": false,
            "image_url": null,
            "created_at": "01 Agu 2026 09:30",
            "author_name": "budi",
            "like_count": 0,
            "comment_count": 0,
            "user_has_liked": false,
            "can_delete": false
        }],
        "has_next": true,
        "next_page": 2,
        "total_pages": 5
    }"#;
    let page: StoriesPage = serde_json::from_str(json).unwrap();
    assert_eq!(page.stories.len(), 1);
    assert!(page.has_next);
    assert_eq!(page.next_page, Some(2));
    assert_eq!(page.total_pages, 5);
}

#[test]
fn stories_page_deserializes_terminal_page() {
    let json = r#"{
        "stories": [],
        "has_next": false,
        "next_page": null,
        "total_pages": 5
    }"#;
    let page: StoriesPage = serde_json::from_str(json).unwrap();
    assert!(page.stories.is_empty());
    assert!(!page.has_next);
    assert_eq!(page.next_page, None);
}

// =============================================================
// LikeResponse serde
// =============================================================

#[test]
fn like_response_deserializes_both_directions() {
    let liked: LikeResponse = serde_json::from_str(r#"{"liked": true, "like_count": 4}"#).unwrap();
    assert!(liked.liked);
    assert_eq!(liked.like_count, 4);

    let unliked: LikeResponse = serde_json::from_str(r#"{"liked": false, "like_count": 3}"#).unwrap();
    assert!(!unliked.liked);
    assert_eq!(unliked.like_count, 3);
}

// =============================================================
// StoryDetail serde
// =============================================================

#[test]
fn story_detail_round_trip() {
    let detail = StoryDetail {
        story: make_story(),
        comments: vec![Comment {
            replies: vec![make_comment()],
            ..make_comment()
        }],
    };
    let json = serde_json::to_string(&detail).unwrap();
    let back: StoryDetail = serde_json::from_str(&json).unwrap();
    assert_eq!(detail, back);
}
