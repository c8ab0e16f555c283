//! Keyboard input handling

use game_core::Key;

/// Map a DOM `KeyboardEvent.key` value to a game key
pub fn map_key(key: &str) -> Option<Key> {
    match key {
        " " | "Spacebar" => Some(Key::Space),
        "Enter" => Some(Key::Enter),
        "w" | "W" => Some(Key::W),
        "s" | "S" => Some(Key::S),
        "ArrowUp" | "Up" => Some(Key::Up),
        "ArrowDown" | "Down" => Some(Key::Down),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(" ", Key::Space)]
    #[case("Spacebar", Key::Space)]
    #[case("Enter", Key::Enter)]
    #[case("w", Key::W)]
    #[case("W", Key::W)]
    #[case("s", Key::S)]
    #[case("S", Key::S)]
    #[case("ArrowUp", Key::Up)]
    #[case("ArrowDown", Key::Down)]
    fn test_recognised_keys(#[case] dom_key: &str, #[case] expected: Key) {
        assert_eq!(map_key(dom_key), Some(expected));
    }

    #[rstest]
    #[case("a")]
    #[case("Escape")]
    #[case("ArrowLeft")]
    #[case("Shift")]
    #[case("")]
    fn test_other_keys_ignored(#[case] dom_key: &str) {
        assert_eq!(map_key(dom_key), None);
    }
}
