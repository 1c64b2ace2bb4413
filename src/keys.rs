use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    actions::Action,
    keysyms::{self, Keysym},
    modifiers::{split_chord, ModMask, ParseChordError, MODKEY},
    tags::TagMask,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Key {
    pub mods: ModMask,
    pub keysym: Keysym,
    #[serde(flatten)]
    pub action: Action,
}

impl Key {
    pub fn new(mods: ModMask, keysym: Keysym, action: Action) -> Self {
        Self {
            mods,
            keysym,
            action,
        }
    }

    /// The chord as typed, e.g. `Mod4+Shift+Return`.
    pub fn chord(&self) -> String {
        let key = keysyms::name(self.keysym).unwrap_or_else(|| format!("{:#x}", self.keysym));
        if self.mods.is_empty() {
            key
        } else {
            format!("{}+{}", self.mods, key)
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<28} {}", self.chord(), self.action)
    }
}

/// The four bindings every tag gets: view, toggle-view, tag and toggle-tag.
pub fn tag_keys(keysym: Keysym, tag: usize) -> [Key; 4] {
    let mask = Some(TagMask::tag(tag));
    [
        Key::new(MODKEY, keysym, Action::View(mask)),
        Key::new(MODKEY | ModMask::CONTROL, keysym, Action::ToggleView(mask)),
        Key::new(MODKEY | ModMask::SHIFT, keysym, Action::Tag(mask)),
        Key::new(
            MODKEY | ModMask::CONTROL | ModMask::SHIFT,
            keysym,
            Action::ToggleTag(mask),
        ),
    ]
}

/// Parse a chord such as `Mod4+Shift+Return` into modifiers and a keysym.
pub fn parse_chord(chord: &str) -> Result<(ModMask, Keysym), ParseChordError> {
    let (mods, key) = split_chord(chord)?;
    let keysym =
        keysyms::from_name(key).ok_or_else(|| ParseChordError::UnknownKey(key.to_string()))?;

    Ok((mods, keysym))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keys(pub Vec<Key>);

impl Keys {
    /// Find the binding for a key press. Lock modifiers are ignored and the
    /// first binding in table order wins.
    pub fn lookup(&self, mods: ModMask, keysym: Keysym, numlock: ModMask) -> Option<&Key> {
        let mods = mods.clean(numlock);
        self.0
            .iter()
            .find(|key| key.keysym == keysym && key.mods.clean(numlock) == mods)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Key> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
