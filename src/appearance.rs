//! Bar, border, font and color settings.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ColorError {
    #[error("Color `{0}` must be written as #rrggbb.")]
    Format(String),
}

/// A 24 bit RGB color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(u32);

impl Color {
    pub const fn rgb(&self) -> u32 {
        self.0
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .filter(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| ColorError::Format(s.to_string()))?;

        u32::from_str_radix(hex, 16)
            .map(Color)
            .map_err(|_| ColorError::Format(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

impl ColorScheme {
    const fn new(fg: u32, bg: u32, border: u32) -> Self {
        Self {
            fg: Color(fg),
            bg: Color(bg),
            border: Color(border),
        }
    }
}

/// The focus states chrome is drawn in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Scheme {
    /// Unfocused windows and bar sections.
    Norm,
    /// The focused window.
    Sel,
    Urg,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schemes {
    pub norm: ColorScheme,
    pub sel: ColorScheme,
    pub urg: ColorScheme,
}

impl Default for Schemes {
    fn default() -> Self {
        Self {
            norm: ColorScheme::new(0xd5c4a1, 0x1d2021, 0x665c54),
            sel: ColorScheme::new(0xfe8019, 0x1d2021, 0xfbf1c7),
            urg: ColorScheme::new(0xfbf1c7, 0xfb4934, 0xfb4934),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    /// Border pixel of windows.
    pub border_px: u32,
    /// Snap pixel.
    pub snap: u32,
    pub show_bar: bool,
    /// `false` puts the bar at the bottom.
    pub top_bar: bool,
    pub fonts: Vec<String>,
    /// Font handed to the launcher.
    pub dmenu_font: String,
    pub schemes: Schemes,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            border_px: 2,
            snap: 32,
            show_bar: true,
            top_bar: false,
            fonts: vec!["iosevka:size=11".into(), "fontawesome:size=10".into()],
            dmenu_font: "iosevka:size=11".into(),
            schemes: Schemes::default(),
        }
    }
}

impl Appearance {
    pub fn scheme(&self, scheme: Scheme) -> &ColorScheme {
        match scheme {
            Scheme::Norm => &self.schemes.norm,
            Scheme::Sel => &self.schemes.sel,
            Scheme::Urg => &self.schemes.urg,
        }
    }
}
