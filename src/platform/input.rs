//! Keyboard mapping
//!
//! Arrow keys and WASD, by legacy `keyCode`.

use crate::sim::Direction;

/// Direction for a key-down `keyCode`, or `None` for keys the game ignores
pub fn direction_for_key_code(code: u32) -> Option<Direction> {
    match code {
        37 | 65 => Some(Direction::Left),  // ArrowLeft, A
        38 | 87 => Some(Direction::Up),    // ArrowUp, W
        39 | 68 => Some(Direction::Right), // ArrowRight, D
        40 | 83 => Some(Direction::Down),  // ArrowDown, S
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_and_wasd() {
        assert_eq!(direction_for_key_code(37), Some(Direction::Left));
        assert_eq!(direction_for_key_code(65), Some(Direction::Left));
        assert_eq!(direction_for_key_code(38), Some(Direction::Up));
        assert_eq!(direction_for_key_code(87), Some(Direction::Up));
        assert_eq!(direction_for_key_code(39), Some(Direction::Right));
        assert_eq!(direction_for_key_code(68), Some(Direction::Right));
        assert_eq!(direction_for_key_code(40), Some(Direction::Down));
        assert_eq!(direction_for_key_code(83), Some(Direction::Down));
    }

    #[test]
    fn test_other_keys_ignored() {
        for code in [0, 13, 27, 32, 36, 41, 64, 66, 90] {
            assert_eq!(direction_for_key_code(code), None, "key code {code}");
        }
    }
}
