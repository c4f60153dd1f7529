//! Platform independent key codes and their names.
//!
//! Printable keys use their Unicode code point. Special keys live above the
//! Unicode range so the two never collide.

use std::borrow::Cow;

pub type KeyCode = u32;

pub const KEY_UNSET: KeyCode = 0;
pub const KEY_BACKSPACE: KeyCode = 0x08;
pub const KEY_TAB: KeyCode = 0x09;
pub const KEY_ENTER: KeyCode = 0x0D;
pub const KEY_ESC: KeyCode = 0x1B;
pub const KEY_SPACE: KeyCode = 0x20;
pub const KEY_LEFT: KeyCode = 0x0021_0000;
pub const KEY_RIGHT: KeyCode = 0x0022_0000;
pub const KEY_UP: KeyCode = 0x0023_0000;
pub const KEY_DOWN: KeyCode = 0x0024_0000;
pub const KEY_F1: KeyCode = 0x0027_0000;
pub const KEY_F2: KeyCode = 0x0028_0000;
pub const KEY_F3: KeyCode = 0x0029_0000;
pub const KEY_F4: KeyCode = 0x002A_0000;
pub const KEY_F5: KeyCode = 0x002B_0000;
pub const KEY_F6: KeyCode = 0x002C_0000;
pub const KEY_F7: KeyCode = 0x002D_0000;
pub const KEY_F8: KeyCode = 0x002E_0000;
pub const KEY_F9: KeyCode = 0x002F_0000;
pub const KEY_F10: KeyCode = 0x0030_0000;
pub const KEY_F11: KeyCode = 0x0031_0000;
pub const KEY_F12: KeyCode = 0x0032_0000;
pub const KEY_HOME: KeyCode = 0x0033_0000;
pub const KEY_END: KeyCode = 0x0034_0000;
pub const KEY_INSERT: KeyCode = 0x0035_0000;
pub const KEY_DELETE: KeyCode = 0x0036_0000;
pub const KEY_MENU: KeyCode = 0x0037_0000;
pub const KEY_PAGEUP: KeyCode = 0x0039_0000;
pub const KEY_PAGEDOWN: KeyCode = 0x003A_0000;
pub const KEY_PRINT: KeyCode = 0x003B_0000;
pub const KEY_PAUSE: KeyCode = 0x003D_0000;
pub const KEY_VOLUME_MUTE: KeyCode = 0x0048_0000;
pub const KEY_VOLUME_DOWN: KeyCode = 0x0049_0000;
pub const KEY_VOLUME_UP: KeyCode = 0x004A_0000;
pub const KEY_MEDIA_NEXT_TRACK: KeyCode = 0x004B_0000;
pub const KEY_MEDIA_PREV_TRACK: KeyCode = 0x004C_0000;
pub const KEY_MEDIA_STOP: KeyCode = 0x004D_0000;
pub const KEY_MEDIA_PLAY_PAUSE: KeyCode = 0x004E_0000;

const NAMED_KEYS: &[(KeyCode, &str)] = &[
    (KEY_BACKSPACE, "Backspace"),
    (KEY_TAB, "Tab"),
    (KEY_ENTER, "Enter"),
    (KEY_ESC, "Esc"),
    (KEY_SPACE, "Space"),
    (KEY_LEFT, "Left"),
    (KEY_RIGHT, "Right"),
    (KEY_UP, "Up"),
    (KEY_DOWN, "Down"),
    (KEY_F1, "F1"),
    (KEY_F2, "F2"),
    (KEY_F3, "F3"),
    (KEY_F4, "F4"),
    (KEY_F5, "F5"),
    (KEY_F6, "F6"),
    (KEY_F7, "F7"),
    (KEY_F8, "F8"),
    (KEY_F9, "F9"),
    (KEY_F10, "F10"),
    (KEY_F11, "F11"),
    (KEY_F12, "F12"),
    (KEY_HOME, "Home"),
    (KEY_END, "End"),
    (KEY_INSERT, "Insert"),
    (KEY_DELETE, "Delete"),
    (KEY_MENU, "Menu"),
    (KEY_PAGEUP, "Page Up"),
    (KEY_PAGEDOWN, "Page Down"),
    (KEY_PRINT, "Print"),
    (KEY_PAUSE, "Pause"),
    (KEY_VOLUME_MUTE, "Volume Mute"),
    (KEY_VOLUME_DOWN, "Volume Down"),
    (KEY_VOLUME_UP, "Volume Up"),
    (KEY_MEDIA_NEXT_TRACK, "Media Next Track"),
    (KEY_MEDIA_PREV_TRACK, "Media Prev Track"),
    (KEY_MEDIA_STOP, "Media Stop"),
    (KEY_MEDIA_PLAY_PAUSE, "Media Play Pause"),
];

pub fn named_keys() -> impl Iterator<Item = (KeyCode, &'static str)> {
    NAMED_KEYS.iter().copied()
}

/// Name of a key code: a table entry for special keys, the character itself
/// for printable keys, `None` for anything else.
pub fn key_to_name(code: KeyCode) -> Option<Cow<'static, str>> {
    if code == KEY_UNSET {
        return None;
    }
    if let Some((_, name)) = NAMED_KEYS.iter().find(|(known, _)| *known == code) {
        return Some(Cow::Borrowed(name));
    }
    char::from_u32(code)
        .filter(|ch| !ch.is_control())
        .map(|ch| Cow::Owned(ch.to_string()))
}

pub fn name_to_key(name: &str) -> Option<KeyCode> {
    if let Some((code, _)) = NAMED_KEYS.iter().find(|(_, known)| *known == name) {
        return Some(*code);
    }
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if !ch.is_control() => Some(ch as KeyCode),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/keys_tests.rs"]
mod tests;
