use std::{fmt, ops};

use serde::{Deserialize, Serialize};

/// Width of a tag mask; no more tags than this can be configured.
pub const TAG_MASK_BITS: usize = u32::BITS as usize;

/// A set of tags, one bit per tag.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagMask(pub u32);

impl TagMask {
    pub const EMPTY: TagMask = TagMask(0);
    /// Every tag, whatever the configured tag count.
    pub const ALL: TagMask = TagMask(!0);

    /// The mask of the single tag at `index`, empty past the mask width.
    pub const fn tag(index: usize) -> TagMask {
        if index < TAG_MASK_BITS {
            TagMask(1 << index)
        } else {
            Self::EMPTY
        }
    }

    pub fn contains(self, index: usize) -> bool {
        index < TAG_MASK_BITS && self.0 & (1 << index) != 0
    }

    pub fn is_all(self) -> bool {
        self == Self::ALL
    }

    pub fn is_empty(self) -> bool {
        self == Self::EMPTY
    }

    /// Whether the mask only references the first `tag_count` tags.
    /// `ALL` always fits.
    pub fn fits(self, tag_count: usize) -> bool {
        if self.is_all() || tag_count >= TAG_MASK_BITS {
            return true;
        }
        self.0 >> tag_count == 0
    }
}

impl ops::BitOr for TagMask {
    type Output = Self;

    fn bitor(self, other: Self) -> Self {
        TagMask(self.0 | other.0)
    }
}

impl fmt::Display for TagMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_all() {
            write!(f, "~0")
        } else {
            write!(f, "{:#x}", self.0)
        }
    }
}

/// The ordered tag labels shown in the bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tags(pub Vec<String>);

impl Default for Tags {
    fn default() -> Self {
        Self(
            ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"]
                .into_iter()
                .map(String::from)
                .collect(),
        )
    }
}

impl Tags {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// The mask selecting every configured tag.
    pub fn mask(&self) -> TagMask {
        if self.len() >= TAG_MASK_BITS {
            TagMask::ALL
        } else {
            TagMask((1 << self.len()) - 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_default_tags() {
        let tags = Tags::default();

        assert_eq!(tags.len(), 9);
        assert_eq!(tags.iter().next(), Some("I"));
        assert_eq!(tags.iter().last(), Some("IX"));
        assert_eq!(tags.mask(), TagMask(0x1ff));
    }

    #[rstest]
    #[case(TagMask::EMPTY, 9, true)]
    #[case(TagMask::tag(0), 9, true)]
    #[case(TagMask::tag(8), 9, true)]
    #[case(TagMask::tag(9), 9, false)]
    #[case(TagMask::tag(0) | TagMask::tag(12), 9, false)]
    #[case(TagMask::ALL, 9, true)]
    #[case(TagMask::tag(31), 32, true)]
    #[case(TagMask::tag(32), 9, true)]
    fn test_tag_mask_fits(#[case] mask: TagMask, #[case] tag_count: usize, #[case] fits: bool) {
        assert_eq!(mask.fits(tag_count), fits);
    }

    #[rstest]
    #[case(31, TagMask(0x8000_0000))]
    #[case(32, TagMask::EMPTY)]
    #[case(usize::MAX, TagMask::EMPTY)]
    fn test_tag_past_mask_width(#[case] index: usize, #[case] expected: TagMask) {
        assert_eq!(TagMask::tag(index), expected);
    }

    #[test]
    fn test_tag_mask_contains() {
        let mask = TagMask::tag(2) | TagMask::tag(4);

        assert!(mask.contains(2));
        assert!(mask.contains(4));
        assert!(!mask.contains(3));
        assert!(!mask.contains(40));
    }

    #[test]
    fn test_tag_mask_display() {
        assert_eq!(TagMask::tag(8).to_string(), "0x100");
        assert_eq!(TagMask::ALL.to_string(), "~0");
    }
}
