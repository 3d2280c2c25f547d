use super::*;

#[test]
fn heart_is_solid_only_when_liked() {
    assert_eq!(heart_icon_class(true), "fas fa-heart");
    assert_eq!(heart_icon_class(false), "far fa-heart");
}
