use crate::{Direction, Paddle};

/// Keys the game reacts to; hosts drop everything else before calling in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Enter,
    W,
    S,
    Up,
    Down,
}

/// Up/down key pair bound to one human paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddleKeys {
    pub up: Key,
    pub down: Key,
}

impl PaddleKeys {
    pub const LEFT: PaddleKeys = PaddleKeys {
        up: Key::W,
        down: Key::S,
    };
    pub const RIGHT: PaddleKeys = PaddleKeys {
        up: Key::Up,
        down: Key::Down,
    };

    pub fn direction(&self, key: Key) -> Option<Direction> {
        if key == self.up {
            Some(Direction::Up)
        } else if key == self.down {
            Some(Direction::Down)
        } else {
            None
        }
    }
}

/// Handle key down for one paddle; returns whether the key was bound to it
pub fn press_key(paddle: &mut Paddle, keys: PaddleKeys, key: Key) -> bool {
    match keys.direction(key) {
        Some(dir) => {
            paddle.press(dir);
            true
        }
        None => false,
    }
}

/// Handle key up for one paddle; returns whether the key was bound to it
pub fn release_key(paddle: &mut Paddle, keys: PaddleKeys, key: Key) -> bool {
    match keys.direction(key) {
        Some(dir) => {
            paddle.release(dir);
            true
        }
        None => false,
    }
}
