#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn confirm_declines_off_browser() {
    assert!(!confirm("Hapus curhatan ini?"));
}
