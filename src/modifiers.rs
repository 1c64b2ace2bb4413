//! Modifier masks and mouse buttons, using the X11 core protocol bit values.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

bitflags::bitflags! {
    #[derive(Default, Serialize, Deserialize)]
    #[serde(try_from = "String", into = "String")]
    pub struct ModMask: u16 {
        const SHIFT = 1 << 0;
        const LOCK = 1 << 1;
        const CONTROL = 1 << 2;
        const MOD1 = 1 << 3;
        const MOD2 = 1 << 4;
        const MOD3 = 1 << 5;
        const MOD4 = 1 << 6;
        const MOD5 = 1 << 7;
    }
}

/// The modifier every default binding hangs off (the "super" key).
pub const MODKEY: ModMask = ModMask::MOD4;

/// The modifier num lock is mapped to on virtually every keyboard map.
pub const NUMLOCK: ModMask = ModMask::MOD2;

const MOD_NAMES: [(&str, ModMask); 8] = [
    ("Mod4", ModMask::MOD4),
    ("Control", ModMask::CONTROL),
    ("Shift", ModMask::SHIFT),
    ("Mod1", ModMask::MOD1),
    ("Mod2", ModMask::MOD2),
    ("Mod3", ModMask::MOD3),
    ("Mod5", ModMask::MOD5),
    ("Lock", ModMask::LOCK),
];

#[derive(Error, Debug, PartialEq)]
pub enum ParseChordError {
    #[error("Unknown modifier `{0}`.")]
    UnknownModifier(String),
    #[error("Unknown key `{0}`.")]
    UnknownKey(String),
    #[error("Unknown button `{0}`.")]
    UnknownButton(String),
    #[error("Unknown click region `{0}`.")]
    UnknownClick(String),
    #[error("Empty chord.")]
    Empty,
}

impl ModMask {
    /// Strip the lock modifiers so bindings match regardless of caps/num lock state.
    pub fn clean(self, numlock: ModMask) -> ModMask {
        self & !(numlock | ModMask::LOCK)
    }

    fn from_name(name: &str) -> Option<ModMask> {
        let name = name.to_ascii_lowercase();
        match name.as_str() {
            "super" | "win" => Some(ModMask::MOD4),
            "ctrl" => Some(ModMask::CONTROL),
            "alt" => Some(ModMask::MOD1),
            _ => MOD_NAMES
                .iter()
                .find(|(n, _)| n.to_ascii_lowercase() == name)
                .map(|(_, m)| *m),
        }
    }
}

impl fmt::Display for ModMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = MOD_NAMES
            .iter()
            .filter(|(_, m)| self.contains(*m))
            .map(|(n, _)| *n)
            .collect();
        write!(f, "{}", names.join("+"))
    }
}

impl FromStr for ModMask {
    type Err = ParseChordError;

    /// Parses `Mod4+Shift` style lists. An empty string is no modifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split('+')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .try_fold(ModMask::empty(), |acc, part| {
                ModMask::from_name(part)
                    .map(|m| acc | m)
                    .ok_or_else(|| ParseChordError::UnknownModifier(part.to_string()))
            })
    }
}

impl TryFrom<String> for ModMask {
    type Error = ParseChordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ModMask> for String {
    fn from(mods: ModMask) -> Self {
        mods.to_string()
    }
}

/// Split a chord such as `Mod4+Shift+Return` into its modifiers and final token.
pub fn split_chord(chord: &str) -> Result<(ModMask, &str), ParseChordError> {
    let chord = chord.trim();
    let (mods, last) = match chord.rsplit_once('+') {
        // `+` and `Mod4++` bind the plus key itself
        Some(("", "")) => ("", "+"),
        Some((mods, "")) if mods.ends_with('+') => (&mods[..mods.len() - 1], "+"),
        Some((mods, last)) => (mods, last),
        None => ("", chord),
    };
    if last.is_empty() {
        return Err(ParseChordError::Empty);
    }

    Ok((mods.parse()?, last))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Button1,
    Button2,
    Button3,
    Button4,
    Button5,
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for MouseButton {
    type Err = ParseChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "button1" | "left" => Ok(Self::Button1),
            "button2" | "middle" => Ok(Self::Button2),
            "button3" | "right" => Ok(Self::Button3),
            "button4" => Ok(Self::Button4),
            "button5" => Ok(Self::Button5),
            _ => Err(ParseChordError::UnknownButton(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", ModMask::empty())]
    #[case("Mod4", ModMask::MOD4)]
    #[case("Mod4+Shift", ModMask::MOD4 | ModMask::SHIFT)]
    #[case("super+ctrl+shift", ModMask::MOD4 | ModMask::CONTROL | ModMask::SHIFT)]
    #[case("Alt", ModMask::MOD1)]
    fn test_parse_mod_mask(#[case] input: &str, #[case] expected: ModMask) {
        assert_eq!(input.parse::<ModMask>().unwrap(), expected);
    }

    #[test]
    fn test_parse_mod_mask_unknown() {
        let result = "Mod4+Hyper".parse::<ModMask>();

        assert_eq!(
            result,
            Err(ParseChordError::UnknownModifier("Hyper".to_string()))
        );
    }

    #[test]
    fn test_display_mod_mask() {
        let mods = ModMask::SHIFT | ModMask::CONTROL | MODKEY;

        assert_eq!(mods.to_string(), "Mod4+Control+Shift");
        assert_eq!(ModMask::empty().to_string(), "");
    }

    #[test]
    fn test_clean_strips_lock_and_numlock() {
        let mods = MODKEY | ModMask::LOCK | ModMask::MOD2 | ModMask::SHIFT;

        assert_eq!(mods.clean(ModMask::MOD2), MODKEY | ModMask::SHIFT);
    }

    #[rstest]
    #[case("Return", ModMask::empty(), "Return")]
    #[case("Mod4+Shift+Return", MODKEY | ModMask::SHIFT, "Return")]
    #[case("Mod4++", MODKEY, "+")]
    #[case("+", ModMask::empty(), "+")]
    #[case(" + ", ModMask::empty(), "+")]
    fn test_split_chord(#[case] chord: &str, #[case] mods: ModMask, #[case] key: &str) {
        assert_eq!(split_chord(chord).unwrap(), (mods, key));
    }

    #[test]
    fn test_split_chord_empty() {
        assert_eq!(split_chord("Mod4+"), Err(ParseChordError::Empty));
    }

    #[test]
    fn test_mod_mask_serde() {
        let json = serde_json::to_string(&(MODKEY | ModMask::SHIFT)).unwrap();
        assert_eq!(json, "\"Mod4+Shift\"");

        let mods: ModMask = serde_json::from_str("\"Mod4+Control\"").unwrap();
        assert_eq!(mods, MODKEY | ModMask::CONTROL);
    }
}
