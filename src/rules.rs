//! Placement rules applied to new windows.

use serde::{Deserialize, Serialize};

use crate::tags::TagMask;

/// What the core knows about a window when it is mapped.
/// Properties are looked up with xprop(1):
/// `WM_CLASS(STRING) = instance, class` and `WM_NAME(STRING) = title`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowProps {
    pub class: Option<String>,
    pub instance: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub class: Option<String>,
    pub instance: Option<String>,
    pub title: Option<String>,
    /// Tags to put the window on. Empty keeps the current tags.
    #[serde(default)]
    pub tags: TagMask,
    #[serde(default)]
    pub is_floating: bool,
    /// `-1` keeps the window on the monitor it appeared on.
    #[serde(default = "current_monitor")]
    pub monitor: i32,
}

fn current_monitor() -> i32 {
    -1
}

impl Rule {
    pub fn class(class: &str) -> Self {
        Self {
            class: Some(class.to_string()),
            instance: None,
            title: None,
            tags: TagMask::EMPTY,
            is_floating: false,
            monitor: current_monitor(),
        }
    }

    pub fn tags(self, tags: TagMask) -> Self {
        Self { tags, ..self }
    }

    pub fn floating(self) -> Self {
        Self {
            is_floating: true,
            ..self
        }
    }

    /// Every pattern the rule sets must be a substring of the matching property.
    /// Unset properties on the window compare as empty strings.
    pub fn matches(&self, props: &WindowProps) -> bool {
        fn field(pattern: &Option<String>, value: &Option<String>) -> bool {
            match pattern {
                Some(pattern) => value.as_deref().unwrap_or_default().contains(pattern.as_str()),
                None => true,
            }
        }

        field(&self.title, &props.title)
            && field(&self.class, &props.class)
            && field(&self.instance, &props.instance)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rules(pub Vec<Rule>);

impl Default for Rules {
    fn default() -> Self {
        Self(vec![
            Rule::class("Gimp").floating(),
            Rule::class("Firefox").tags(TagMask::tag(8)),
        ])
    }
}

impl Rules {
    /// The first rule, in table order, matching the window.
    pub fn first_match(&self, props: &WindowProps) -> Option<&Rule> {
        let rule = self.0.iter().find(|rule| rule.matches(props));
        tracing::trace!(?props, ?rule, "rule lookup");
        rule
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.0.iter()
    }
}
