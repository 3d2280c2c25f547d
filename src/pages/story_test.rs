use super::*;

#[test]
fn parse_story_id_accepts_positive_integers() {
    assert_eq!(parse_story_id(Some("42".to_owned())), Some(42));
    assert_eq!(parse_story_id(Some("1".to_owned())), Some(1));
}

#[test]
fn parse_story_id_rejects_junk_segments() {
    assert_eq!(parse_story_id(None), None);
    assert_eq!(parse_story_id(Some(String::new())), None);
    assert_eq!(parse_story_id(Some("abc".to_owned())), None);
    assert_eq!(parse_story_id(Some("0".to_owned())), None);
    assert_eq!(parse_story_id(Some("-3".to_owned())), None);
}
