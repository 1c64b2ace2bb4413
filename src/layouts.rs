use std::fmt;

use serde::{Deserialize, Serialize};

/// Master area factor bounds accepted by the core.
pub const MFACT_MIN: f32 = 0.05;
pub const MFACT_MAX: f32 = 0.95;

/// The tiling strategies the core knows how to run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Arrange {
    Tile,
    Monocle,
    GaplessGrid,
    Deck,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Shown in the bar while the layout is active.
    pub symbol: String,
    /// `None` means windows float freely.
    pub arrange: Option<Arrange>,
}

impl Layout {
    pub fn new(symbol: &str, arrange: Option<Arrange>) -> Self {
        Self {
            symbol: symbol.to_string(),
            arrange,
        }
    }

    pub fn is_floating(&self) -> bool {
        self.arrange.is_none()
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.arrange {
            Some(arrange) => write!(f, "{} {:?}", self.symbol, arrange),
            None => write!(f, "{} Floating", self.symbol),
        }
    }
}

/// The selectable layouts; the first one is active on start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layouts(pub Vec<Layout>);

impl Default for Layouts {
    fn default() -> Self {
        Self(vec![
            Layout::new("[]=", Some(Arrange::Tile)),
            Layout::new("><>", None),
            Layout::new("[M]", Some(Arrange::Monocle)),
            Layout::new("[G]", Some(Arrange::GaplessGrid)),
            Layout::new("[D]", Some(Arrange::Deck)),
        ])
    }
}

impl Layouts {
    pub fn default_layout(&self) -> Option<&Layout> {
        self.0.first()
    }

    pub fn get(&self, index: usize) -> Option<&Layout> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutParams {
    /// Factor of master area size, within `MFACT_MIN..=MFACT_MAX`.
    pub mfact: f32,
    /// Number of clients in the master area.
    pub nmaster: u32,
    /// Respect size hints in tiled resizals.
    pub resize_hints: bool,
    /// Force focus on the fullscreen window.
    pub lock_fullscreen: bool,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            mfact: 0.55,
            nmaster: 1,
            resize_hints: true,
            lock_fullscreen: true,
        }
    }
}

impl LayoutParams {
    pub fn mfact_in_range(&self) -> bool {
        (MFACT_MIN..=MFACT_MAX).contains(&self.mfact)
    }
}
