//! The complete configuration and its compiled-in defaults.
//!
//! A user file has the same shape as [`Config`] serialized to JSON. Every
//! top-level section missing from the file keeps its default; default key
//! bindings are built from the loaded appearance so the launcher follows the
//! user's font and colors.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use expanduser::expanduser;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    actions::Action,
    appearance::Appearance,
    autostart::Autostart,
    buttons::{Button, Buttons, Click},
    cmd,
    commands::{self, Command},
    keys::{tag_keys, Key, Keys},
    keysyms::*,
    layouts::{LayoutParams, Layouts},
    modifiers::{ModMask, MouseButton, MODKEY},
    rules::Rules,
    tags::{TagMask, Tags},
};

pub const DEFAULT_PATH: &str = "~/.config/dwm-config/config.json";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ConfigFile")]
pub struct Config {
    pub appearance: Appearance,
    pub autostart: Autostart,
    pub tags: Tags,
    pub rules: Rules,
    pub layout: LayoutParams,
    pub layouts: Layouts,
    pub keys: Keys,
    pub buttons: Buttons,
}

impl Default for Config {
    fn default() -> Self {
        ConfigFile::default().into()
    }
}

/// A configuration file as written, sections optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    appearance: Option<Appearance>,
    autostart: Option<Autostart>,
    tags: Option<Tags>,
    rules: Option<Rules>,
    layout: Option<LayoutParams>,
    layouts: Option<Layouts>,
    keys: Option<Keys>,
    buttons: Option<Buttons>,
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Self {
        let appearance = file.appearance.unwrap_or_default();
        let keys = file.keys.unwrap_or_else(|| default_keys(&appearance));

        Self {
            appearance,
            autostart: file.autostart.unwrap_or_default(),
            tags: file.tags.unwrap_or_default(),
            rules: file.rules.unwrap_or_default(),
            layout: file.layout.unwrap_or_default(),
            layouts: file.layouts.unwrap_or_default(),
            keys,
            buttons: file.buttons.unwrap_or_else(default_buttons),
        }
    }
}

impl Config {
    pub fn default_path() -> io::Result<PathBuf> {
        expanduser(DEFAULT_PATH)
    }

    /// Load the configuration at `path`, or the defaults if there is no file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(Error::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config = serde_json::from_str(&data).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");

        Ok(config)
    }
}

fn default_keys(appearance: &Appearance) -> Keys {
    let term = cmd!["kitty", "-e", "tmux"];
    let none = ModMask::empty();

    let mut keys = vec![
        Key::new(MODKEY, XK_P, Action::Spawn(commands::dmenu(appearance))),
        Key::new(MODKEY | ModMask::SHIFT, XK_RETURN, Action::Spawn(term)),
        Key::new(MODKEY, XK_B, Action::ToggleBar),
        Key::new(MODKEY, XK_J, Action::FocusStack(1)),
        Key::new(MODKEY, XK_K, Action::FocusStack(-1)),
        Key::new(MODKEY, XK_I, Action::IncNMaster(1)),
        Key::new(MODKEY, XK_D, Action::IncNMaster(-1)),
        Key::new(MODKEY, XK_H, Action::SetMFact(-0.05)),
        Key::new(MODKEY, XK_L, Action::SetMFact(0.05)),
        Key::new(MODKEY, XK_RETURN, Action::Zoom),
        Key::new(MODKEY, XK_TAB, Action::View(None)),
        Key::new(MODKEY | ModMask::SHIFT, XK_C, Action::KillClient),
        Key::new(MODKEY, XK_T, Action::SetLayout(Some(0))),
        Key::new(MODKEY, XK_F, Action::SetLayout(Some(1))),
        Key::new(MODKEY, XK_M, Action::SetLayout(Some(2))),
        Key::new(MODKEY, XK_G, Action::SetLayout(Some(3))),
        Key::new(MODKEY, XK_C, Action::SetLayout(Some(4))),
        Key::new(MODKEY, XK_SPACE, Action::SetLayout(None)),
        Key::new(MODKEY | ModMask::SHIFT, XK_SPACE, Action::ToggleFloating),
        Key::new(MODKEY, XK_0, Action::View(Some(TagMask::ALL))),
        Key::new(MODKEY | ModMask::SHIFT, XK_0, Action::Tag(Some(TagMask::ALL))),
        Key::new(MODKEY, XK_COMMA, Action::FocusMon(-1)),
        Key::new(MODKEY, XK_PERIOD, Action::FocusMon(1)),
        Key::new(MODKEY | ModMask::SHIFT, XK_COMMA, Action::TagMon(-1)),
        Key::new(MODKEY | ModMask::SHIFT, XK_PERIOD, Action::TagMon(1)),
    ];

    let tag_keysyms = [XK_1, XK_2, XK_3, XK_4, XK_5, XK_6, XK_7, XK_8, XK_9];
    for (tag, keysym) in tag_keysyms.into_iter().enumerate() {
        keys.extend(tag_keys(keysym, tag));
    }

    keys.extend([
        Key::new(MODKEY | ModMask::SHIFT, XK_Q, Action::Quit),
        // Media keys
        Key::new(
            none,
            XF86XK_AUDIO_MUTE,
            Action::Spawn(cmd!["pactl", "set-sink-mute", "@DEFAULT_SINK@", "toggle"]),
        ),
        Key::new(
            none,
            XF86XK_AUDIO_LOWER_VOLUME,
            Action::Spawn(cmd!["amixer", "-q", "sset", "Master", "1%-"]),
        ),
        Key::new(
            none,
            XF86XK_AUDIO_RAISE_VOLUME,
            Action::Spawn(cmd!["amixer", "-q", "sset", "Master", "1%+"]),
        ),
        Key::new(
            none,
            XF86XK_MON_BRIGHTNESS_UP,
            Action::Spawn(cmd!["brightnessctl", "s", "+5%"]),
        ),
        Key::new(
            none,
            XF86XK_MON_BRIGHTNESS_DOWN,
            Action::Spawn(cmd!["brightnessctl", "s", "5%-"]),
        ),
        Key::new(none, XK_PRINT, Action::Spawn(cmd!["flameshot", "gui"])),
        Key::new(MODKEY, XK_X, Action::Spawn(cmd!["i3lock", "-c", "000000"])),
        Key::new(
            MODKEY | ModMask::SHIFT,
            XK_UPPER_X,
            Action::Spawn(Command::shell("systemctl suspend && i3lock -c 000000")),
        ),
    ]);

    Keys(keys)
}

fn default_buttons() -> Buttons {
    use MouseButton::*;

    let none = ModMask::empty();
    Buttons(vec![
        Button::new(Click::LtSymbol, none, Button1, Action::SetLayout(None)),
        Button::new(Click::LtSymbol, none, Button3, Action::SetLayout(Some(2))),
        Button::new(Click::WinTitle, none, Button2, Action::Zoom),
        Button::new(
            Click::StatusText,
            none,
            Button2,
            Action::Spawn(cmd!["kitty", "-e", "tmux"]),
        ),
        Button::new(Click::ClientWin, MODKEY, Button1, Action::MoveMouse),
        Button::new(Click::ClientWin, MODKEY, Button2, Action::ToggleFloating),
        Button::new(Click::ClientWin, MODKEY, Button3, Action::ResizeMouse),
        Button::new(Click::TagBar, none, Button1, Action::View(None)),
        Button::new(Click::TagBar, none, Button3, Action::ToggleView(None)),
        Button::new(Click::TagBar, MODKEY, Button1, Action::Tag(None)),
        Button::new(Click::TagBar, MODKEY, Button3, Action::ToggleTag(None)),
    ])
}
