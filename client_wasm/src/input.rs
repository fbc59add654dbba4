//! Keyboard input handling

use game_core::Control;

/// Map a key press to a control
pub fn handle_key_down(key: &str) -> Option<Control> {
    match key {
        "ArrowUp" | " " => Some(Control::Flap),
        "ArrowDown" => Some(Control::Dive),
        "ArrowLeft" => Some(Control::SteerLeft),
        "ArrowRight" => Some(Control::SteerRight),
        _ => None,
    }
}

/// Map a key release to a control
pub fn handle_key_up(key: &str) -> Option<Control> {
    match key {
        "ArrowLeft" | "ArrowRight" => Some(Control::ReleaseSteer),
        _ => None,
    }
}

/// Keys whose browser default (page scroll) must be suppressed
pub fn is_game_key(key: &str) -> bool {
    handle_key_down(key).is_some()
}
