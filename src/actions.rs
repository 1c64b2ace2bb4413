//! The actions a binding can trigger.
//! An action represents the intent of the user to change the state of the wm,
//! and carries the argument its handler interprets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{commands::Command, tags::TagMask};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "arg", rename_all = "lowercase")]
pub enum Action {
    Spawn(Command),
    ToggleBar,
    /// Move focus through the stack by the given offset.
    FocusStack(i32),
    /// Grow or shrink the number of clients in the master area.
    IncNMaster(i32),
    /// Adjust the master area factor by the given delta.
    SetMFact(f32),
    /// Swap the focused client with the master.
    Zoom,
    /// `None` picks the previous tag set, or the clicked tag on the tag bar.
    View(Option<TagMask>),
    ToggleView(Option<TagMask>),
    Tag(Option<TagMask>),
    ToggleTag(Option<TagMask>),
    KillClient,
    /// Index into the layout list; `None` switches back to the previous layout.
    SetLayout(Option<usize>),
    ToggleFloating,
    FocusMon(i32),
    TagMon(i32),
    MoveMouse,
    ResizeMouse,
    Quit,
}

impl Action {
    /// The tag mask argument, for actions that take one.
    pub fn tag_mask(&self) -> Option<TagMask> {
        match self {
            Action::View(mask)
            | Action::ToggleView(mask)
            | Action::Tag(mask)
            | Action::ToggleTag(mask) => *mask,
            _ => None,
        }
    }

    pub fn command(&self) -> Option<&Command> {
        match self {
            Action::Spawn(command) => Some(command),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Spawn(command) => write!(f, "spawn `{}`", command),
            Action::ToggleBar => write!(f, "togglebar"),
            Action::FocusStack(i) => write!(f, "focusstack {:+}", i),
            Action::IncNMaster(i) => write!(f, "incnmaster {:+}", i),
            Action::SetMFact(delta) => write!(f, "setmfact {:+.2}", delta),
            Action::Zoom => write!(f, "zoom"),
            Action::View(mask) => write_mask(f, "view", mask),
            Action::ToggleView(mask) => write_mask(f, "toggleview", mask),
            Action::Tag(mask) => write_mask(f, "tag", mask),
            Action::ToggleTag(mask) => write_mask(f, "toggletag", mask),
            Action::KillClient => write!(f, "killclient"),
            Action::SetLayout(Some(index)) => write!(f, "setlayout {}", index),
            Action::SetLayout(None) => write!(f, "setlayout"),
            Action::ToggleFloating => write!(f, "togglefloating"),
            Action::FocusMon(i) => write!(f, "focusmon {:+}", i),
            Action::TagMon(i) => write!(f, "tagmon {:+}", i),
            Action::MoveMouse => write!(f, "movemouse"),
            Action::ResizeMouse => write!(f, "resizemouse"),
            Action::Quit => write!(f, "quit"),
        }
    }
}

fn write_mask(f: &mut fmt::Formatter<'_>, name: &str, mask: &Option<TagMask>) -> fmt::Result {
    match mask {
        Some(mask) => write!(f, "{} {}", name, mask),
        None => write!(f, "{}", name),
    }
}
