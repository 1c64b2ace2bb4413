use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    actions::Action,
    modifiers::{split_chord, ModMask, MouseButton, ParseChordError},
};

/// The part of the screen a click landed on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Click {
    TagBar,
    LtSymbol,
    StatusText,
    WinTitle,
    ClientWin,
    RootWin,
}

impl fmt::Display for Click {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Click::TagBar => "tag-bar",
            Click::LtSymbol => "lt-symbol",
            Click::StatusText => "status-text",
            Click::WinTitle => "win-title",
            Click::ClientWin => "client-win",
            Click::RootWin => "root-win",
        };
        f.pad(name)
    }
}

impl FromStr for Click {
    type Err = ParseChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accepts `tag-bar`, `tag_bar` and `TagBar` alike.
        let name: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match name.as_str() {
            "tagbar" => Ok(Click::TagBar),
            "ltsymbol" => Ok(Click::LtSymbol),
            "statustext" => Ok(Click::StatusText),
            "wintitle" => Ok(Click::WinTitle),
            "clientwin" => Ok(Click::ClientWin),
            "rootwin" => Ok(Click::RootWin),
            _ => Err(ParseChordError::UnknownClick(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    pub click: Click,
    pub mods: ModMask,
    pub button: MouseButton,
    #[serde(flatten)]
    pub action: Action,
}

impl Button {
    pub fn new(click: Click, mods: ModMask, button: MouseButton, action: Action) -> Self {
        Self {
            click,
            mods,
            button,
            action,
        }
    }

    /// The modifiers and button, e.g. `Mod4+Button1`.
    pub fn chord(&self) -> String {
        if self.mods.is_empty() {
            self.button.to_string()
        } else {
            format!("{}+{}", self.mods, self.button)
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<12} {:<20} {}", self.click, self.chord(), self.action)
    }
}

/// Parse a chord such as `Mod4+Button1`.
pub fn parse_chord(chord: &str) -> Result<(ModMask, MouseButton), ParseChordError> {
    let (mods, button) = split_chord(chord)?;
    Ok((mods, button.parse()?))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Buttons(pub Vec<Button>);

impl Buttons {
    /// Find the binding for a click, ignoring lock modifiers. First match wins.
    pub fn lookup(
        &self,
        click: Click,
        mods: ModMask,
        button: MouseButton,
        numlock: ModMask,
    ) -> Option<&Button> {
        let mods = mods.clean(numlock);
        self.0.iter().find(|binding| {
            binding.click == click
                && binding.button == button
                && binding.mods.clean(numlock) == mods
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Button> {
        self.0.iter()
    }
}
