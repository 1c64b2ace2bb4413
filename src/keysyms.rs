//! Keysym values for the keys the bindings use.
//!
//! Latin-1 keysyms equal their character code, so letters and digits are
//! resolved arithmetically and only the special keys need a table.

pub type Keysym = u32;

pub const XK_SPACE: Keysym = 0x0020;
pub const XK_COMMA: Keysym = 0x002c;
pub const XK_PERIOD: Keysym = 0x002e;
pub const XK_0: Keysym = 0x0030;
pub const XK_1: Keysym = 0x0031;
pub const XK_2: Keysym = 0x0032;
pub const XK_3: Keysym = 0x0033;
pub const XK_4: Keysym = 0x0034;
pub const XK_5: Keysym = 0x0035;
pub const XK_6: Keysym = 0x0036;
pub const XK_7: Keysym = 0x0037;
pub const XK_8: Keysym = 0x0038;
pub const XK_9: Keysym = 0x0039;
pub const XK_UPPER_X: Keysym = 0x0058;
pub const XK_B: Keysym = 0x0062;
pub const XK_C: Keysym = 0x0063;
pub const XK_D: Keysym = 0x0064;
pub const XK_F: Keysym = 0x0066;
pub const XK_G: Keysym = 0x0067;
pub const XK_H: Keysym = 0x0068;
pub const XK_I: Keysym = 0x0069;
pub const XK_J: Keysym = 0x006a;
pub const XK_K: Keysym = 0x006b;
pub const XK_L: Keysym = 0x006c;
pub const XK_M: Keysym = 0x006d;
pub const XK_P: Keysym = 0x0070;
pub const XK_Q: Keysym = 0x0071;
pub const XK_T: Keysym = 0x0074;
pub const XK_X: Keysym = 0x0078;
pub const XK_TAB: Keysym = 0xff09;
pub const XK_RETURN: Keysym = 0xff0d;
pub const XK_PRINT: Keysym = 0xff61;

// https://cgit.freedesktop.org/xorg/proto/x11proto/tree/XF86keysym.h
pub const XF86XK_MON_BRIGHTNESS_UP: Keysym = 0x1008ff02;
pub const XF86XK_MON_BRIGHTNESS_DOWN: Keysym = 0x1008ff03;
pub const XF86XK_AUDIO_LOWER_VOLUME: Keysym = 0x1008ff11;
pub const XF86XK_AUDIO_MUTE: Keysym = 0x1008ff12;
pub const XF86XK_AUDIO_RAISE_VOLUME: Keysym = 0x1008ff13;

const NAMED: [(&str, Keysym); 15] = [
    ("space", XK_SPACE),
    ("comma", XK_COMMA),
    ("period", XK_PERIOD),
    ("plus", 0x002b),
    ("minus", 0x002d),
    ("Tab", XK_TAB),
    ("Return", XK_RETURN),
    ("Escape", 0xff1b),
    ("BackSpace", 0xff08),
    ("Print", XK_PRINT),
    ("XF86MonBrightnessUp", XF86XK_MON_BRIGHTNESS_UP),
    ("XF86MonBrightnessDown", XF86XK_MON_BRIGHTNESS_DOWN),
    ("XF86AudioLowerVolume", XF86XK_AUDIO_LOWER_VOLUME),
    ("XF86AudioMute", XF86XK_AUDIO_MUTE),
    ("XF86AudioRaiseVolume", XF86XK_AUDIO_RAISE_VOLUME),
];

/// Resolve a keysym name as written in `xev` output (`Return`, `p`, `X`, `1`).
pub fn from_name(name: &str) -> Option<Keysym> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_alphanumeric() || ",.+-".contains(c) {
            return Some(c as Keysym);
        }
    }

    NAMED
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, sym)| *sym)
}

pub fn name(keysym: Keysym) -> Option<String> {
    if let Some((n, _)) = NAMED.iter().find(|(_, sym)| *sym == keysym) {
        return Some(n.to_string());
    }

    char::from_u32(keysym)
        .filter(char::is_ascii_alphanumeric)
        .map(String::from)
}

/// Uppercase Latin letters only exist at shift level 1.
pub fn is_uppercase_letter(keysym: Keysym) -> bool {
    (0x41..=0x5a).contains(&keysym)
}
