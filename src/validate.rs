//! Structural checks over a [`Config`].
//!
//! The core trusts its tables, so anything it would misbehave on is caught
//! here instead: missing commands, tag masks wider than the tag set, dangling
//! layout references and ambiguous bindings.

use indexmap::{map::Entry, IndexMap};
use thiserror::Error;

use crate::{
    actions::Action,
    config::Config,
    keysyms,
    modifiers::NUMLOCK,
    tags::{TagMask, TAG_MASK_BITS},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Issue {
    #[error("{location}: command is empty.")]
    EmptyCommand { location: String },
    #[error("No fonts configured.")]
    NoFonts,
    #[error("No tags configured.")]
    NoTags,
    #[error("{0} tags configured, a tag mask only holds 32.")]
    TooManyTags(usize),
    #[error("tags[{0}]: label is empty.")]
    EmptyTagLabel(usize),
    #[error("{location}: tag mask {mask} references tags past the {tag_count} configured.")]
    TagMaskOutOfRange {
        location: String,
        mask: TagMask,
        tag_count: usize,
    },
    #[error("No layouts configured, the first layout is the default.")]
    NoLayouts,
    #[error("{location}: layout {index} does not exist ({count} configured).")]
    LayoutOutOfRange {
        location: String,
        index: usize,
        count: usize,
    },
    #[error("mfact {0} is outside 0.05..=0.95.")]
    MFactOutOfRange(f32),
    #[error("keys[{second}]: `{chord}` is already bound by keys[{first}].")]
    DuplicateKey {
        chord: String,
        first: usize,
        second: usize,
    },
    #[error("buttons[{second}]: `{binding}` is already bound by buttons[{first}].")]
    DuplicateButton {
        binding: String,
        first: usize,
        second: usize,
    },
    #[error("keys[{index}]: `{chord}` uses an uppercase keysym and never fires; bind the lowercase key with Shift.")]
    UppercaseKeysym { index: usize, chord: String },
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::UppercaseKeysym { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// Run every check and return what was found, in table order.
pub fn check(config: &Config) -> Vec<Issue> {
    let mut issues = Vec::new();

    check_appearance(config, &mut issues);
    check_autostart(config, &mut issues);
    check_tags(config, &mut issues);
    check_rules(config, &mut issues);
    check_layouts(config, &mut issues);
    check_keys(config, &mut issues);
    check_buttons(config, &mut issues);

    tracing::debug!(issues = issues.len(), "config checked");
    issues
}

pub fn has_errors(issues: &[Issue]) -> bool {
    issues
        .iter()
        .any(|issue| issue.severity() == Severity::Error)
}

fn check_appearance(config: &Config, issues: &mut Vec<Issue>) {
    if config.appearance.fonts.is_empty() {
        issues.push(Issue::NoFonts);
    }
}

fn check_autostart(config: &Config, issues: &mut Vec<Issue>) {
    for (index, command) in config.autostart.iter().enumerate() {
        if command.is_empty() {
            issues.push(Issue::EmptyCommand {
                location: format!("autostart[{}]", index),
            });
        }
    }
}

fn check_tags(config: &Config, issues: &mut Vec<Issue>) {
    let count = config.tags.len();
    if count == 0 {
        issues.push(Issue::NoTags);
    } else if count > TAG_MASK_BITS {
        issues.push(Issue::TooManyTags(count));
    }

    for (index, label) in config.tags.iter().enumerate() {
        if label.is_empty() {
            issues.push(Issue::EmptyTagLabel(index));
        }
    }
}

fn check_rules(config: &Config, issues: &mut Vec<Issue>) {
    let tag_count = config.tags.len();
    for (index, rule) in config.rules.iter().enumerate() {
        if !rule.tags.fits(tag_count) {
            issues.push(Issue::TagMaskOutOfRange {
                location: format!("rules[{}]", index),
                mask: rule.tags,
                tag_count,
            });
        }
    }
}

fn check_layouts(config: &Config, issues: &mut Vec<Issue>) {
    if config.layouts.is_empty() {
        issues.push(Issue::NoLayouts);
    }
    if !config.layout.mfact_in_range() {
        issues.push(Issue::MFactOutOfRange(config.layout.mfact));
    }
}

/// Checks shared by key and button bindings.
fn check_action(config: &Config, location: String, action: &Action, issues: &mut Vec<Issue>) {
    let tag_count = config.tags.len();

    match action {
        Action::Spawn(command) if command.is_empty() => {
            issues.push(Issue::EmptyCommand { location });
        }
        Action::SetLayout(Some(index)) if *index >= config.layouts.len() => {
            issues.push(Issue::LayoutOutOfRange {
                location,
                index: *index,
                count: config.layouts.len(),
            });
        }
        _ => {
            if let Some(mask) = action.tag_mask().filter(|mask| !mask.fits(tag_count)) {
                issues.push(Issue::TagMaskOutOfRange {
                    location,
                    mask,
                    tag_count,
                });
            }
        }
    }
}

fn check_keys(config: &Config, issues: &mut Vec<Issue>) {
    let mut seen = IndexMap::new();

    for (index, key) in config.keys.iter().enumerate() {
        check_action(config, format!("keys[{}]", index), &key.action, issues);

        if keysyms::is_uppercase_letter(key.keysym) {
            issues.push(Issue::UppercaseKeysym {
                index,
                chord: key.chord(),
            });
        }

        // lookups ignore the lock modifiers
        match seen.entry((key.mods.clean(NUMLOCK), key.keysym)) {
            Entry::Occupied(first) => issues.push(Issue::DuplicateKey {
                chord: key.chord(),
                first: *first.get(),
                second: index,
            }),
            Entry::Vacant(slot) => {
                slot.insert(index);
            }
        }
    }
}

fn check_buttons(config: &Config, issues: &mut Vec<Issue>) {
    let mut seen = IndexMap::new();

    for (index, button) in config.buttons.iter().enumerate() {
        check_action(config, format!("buttons[{}]", index), &button.action, issues);

        match seen.entry((button.click, button.mods.clean(NUMLOCK), button.button)) {
            Entry::Occupied(first) => issues.push(Issue::DuplicateButton {
                binding: format!("{} {}", button.click, button.chord()),
                first: *first.get(),
                second: index,
            }),
            Entry::Vacant(slot) => {
                slot.insert(index);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::{
        buttons::{Button, Click},
        cmd,
        commands::Command,
        keys::Key,
        keysyms::{XK_J, XK_UPPER_X},
        layouts::Layouts,
        modifiers::{ModMask, MouseButton, MODKEY},
        rules::{Rule, Rules},
        tags::Tags,
    };

    fn empty_command() -> Command {
        serde_json::from_str("[]").unwrap()
    }

    #[test]
    fn test_defaults_have_no_errors() {
        let issues = check(&Config::default());

        assert!(!has_errors(&issues));
        assert_eq!(
            issues,
            vec![Issue::UppercaseKeysym {
                index: 69,
                chord: "Mod4+Shift+X".to_string()
            }]
        );
    }

    #[test]
    fn test_empty_autostart_command() {
        let mut config = Config::default();
        config.autostart.0.insert(1, empty_command());

        let issues = check(&config);

        assert!(issues.contains(&Issue::EmptyCommand {
            location: "autostart[1]".to_string()
        }));
        assert!(has_errors(&issues));
    }

    #[test]
    fn test_empty_spawn_command() {
        let mut config = Config::default();
        config.keys.0[0].action = Action::Spawn(empty_command());

        let issues = check(&config);

        assert!(issues.contains(&Issue::EmptyCommand {
            location: "keys[0]".to_string()
        }));
    }

    #[test]
    fn test_tag_count() {
        let mut config = Config::default();

        config.tags = Tags(vec![]);
        assert!(check(&config).contains(&Issue::NoTags));

        config.tags = Tags((0..33).map(|i| i.to_string()).collect());
        assert!(check(&config).contains(&Issue::TooManyTags(33)));

        config.tags = Tags(vec!["web".to_string(), String::new()]);
        assert!(check(&config).contains(&Issue::EmptyTagLabel(1)));
    }

    #[test]
    fn test_rule_tag_mask_out_of_range() {
        let mut config = Config::default();
        config.rules.0.push(Rule::class("Steam").tags(TagMask::tag(9)));

        let issues = check(&config);

        assert!(issues.contains(&Issue::TagMaskOutOfRange {
            location: "rules[2]".to_string(),
            mask: TagMask::tag(9),
            tag_count: 9,
        }));
    }

    #[test]
    fn test_rule_tag_mask_after_shrinking_tags() {
        let mut config = Config::default();
        config.tags = Tags(vec!["a".into(), "b".into(), "c".into()]);

        let issues = check(&config);

        // Firefox goes to tag 9, and Mod4+4..9 reference missing tags
        assert!(issues.contains(&Issue::TagMaskOutOfRange {
            location: "rules[1]".to_string(),
            mask: TagMask::tag(8),
            tag_count: 3,
        }));
        let bindings = issues
            .iter()
            .filter(|issue| {
                matches!(issue, Issue::TagMaskOutOfRange { location, .. } if location.starts_with("keys"))
            })
            .count();
        assert_eq!(bindings, 6 * 4);
    }

    #[test]
    fn test_view_all_fits_any_tag_count() {
        let mut config = Config::default();
        config.keys = crate::keys::Keys(vec![Key::new(
            MODKEY,
            XK_J,
            Action::View(Some(TagMask::ALL)),
        )]);
        config.tags = Tags(vec!["only".into()]);
        config.rules = Rules(vec![]);

        assert_eq!(check(&config), vec![]);
    }

    #[test]
    fn test_no_layouts() {
        let mut config = Config::default();
        config.layouts = Layouts(vec![]);

        let issues = check(&config);

        assert!(issues.contains(&Issue::NoLayouts));
        assert!(issues.contains(&Issue::LayoutOutOfRange {
            location: "keys[12]".to_string(),
            index: 0,
            count: 0,
        }));
    }

    #[test]
    fn test_layout_out_of_range() {
        let mut config = Config::default();
        config.layouts.0.truncate(2);

        let issues = check(&config);

        assert!(issues.contains(&Issue::LayoutOutOfRange {
            location: "buttons[1]".to_string(),
            index: 2,
            count: 2,
        }));
        assert_eq!(
            issues
                .iter()
                .filter(|issue| matches!(issue, Issue::LayoutOutOfRange { .. }))
                .count(),
            4
        );
    }

    #[test]
    fn test_mfact_out_of_range() {
        let mut config = Config::default();
        config.layout.mfact = 0.99;

        assert!(check(&config).contains(&Issue::MFactOutOfRange(0.99)));
    }

    #[test]
    fn test_duplicate_key() {
        let mut config = Config::default();
        config
            .keys
            .0
            .push(Key::new(MODKEY, XK_J, Action::Spawn(cmd!["kitty"])));

        let issues = check(&config);

        assert!(issues.contains(&Issue::DuplicateKey {
            chord: "Mod4+j".to_string(),
            first: 3,
            second: 70,
        }));
    }

    #[rstest]
    #[case(MODKEY | ModMask::LOCK, "Mod4+Lock+j")]
    #[case(MODKEY | ModMask::MOD2, "Mod4+Mod2+j")]
    #[case(MODKEY | ModMask::LOCK | ModMask::MOD2, "Mod4+Mod2+Lock+j")]
    fn test_duplicate_key_up_to_lock_mods(#[case] mods: ModMask, #[case] chord: &str) {
        let mut config = Config::default();
        config.keys.0.push(Key::new(mods, XK_J, Action::Quit));

        let issues = check(&config);

        assert!(issues.contains(&Issue::DuplicateKey {
            chord: chord.to_string(),
            first: 3,
            second: 70,
        }));
    }

    #[test]
    fn test_same_key_different_mods_is_not_duplicate() {
        let mut config = Config::default();
        config.keys.0.push(Key::new(
            MODKEY | ModMask::MOD1,
            XK_J,
            Action::Spawn(cmd!["kitty"]),
        ));

        assert!(!has_errors(&check(&config)));
    }

    #[test]
    fn test_duplicate_button() {
        let mut config = Config::default();
        config.buttons.0.push(Button::new(
            Click::ClientWin,
            MODKEY,
            MouseButton::Button1,
            Action::ToggleFloating,
        ));

        let issues = check(&config);

        assert!(issues.contains(&Issue::DuplicateButton {
            binding: "client-win Mod4+Button1".to_string(),
            first: 4,
            second: 11,
        }));
    }

    #[test]
    fn test_duplicate_button_up_to_lock_mods() {
        let mut config = Config::default();
        config.buttons.0.push(Button::new(
            Click::ClientWin,
            MODKEY | ModMask::LOCK,
            MouseButton::Button1,
            Action::ToggleFloating,
        ));

        let issues = check(&config);

        assert!(issues.contains(&Issue::DuplicateButton {
            binding: "client-win Mod4+Lock+Button1".to_string(),
            first: 4,
            second: 11,
        }));
    }

    #[test]
    fn test_uppercase_keysym_is_warning() {
        let issue = Issue::UppercaseKeysym {
            index: 0,
            chord: Key::new(MODKEY, XK_UPPER_X, Action::Quit).chord(),
        };

        assert_eq!(issue.severity(), Severity::Warning);
        assert!(!has_errors(&[issue]));
    }

    #[test]
    fn test_no_fonts() {
        let mut config = Config::default();
        config.appearance.fonts.clear();

        assert_eq!(check(&config), vec![Issue::NoFonts, default_warning()]);
    }

    fn default_warning() -> Issue {
        Issue::UppercaseKeysym {
            index: 69,
            chord: "Mod4+Shift+X".to_string(),
        }
    }
}
