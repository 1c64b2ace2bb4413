//! Programs started once when the window manager comes up.

use serde::{Deserialize, Serialize};

use crate::{cmd, commands::Command};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Autostart(pub Vec<Command>);

impl Default for Autostart {
    fn default() -> Self {
        Self(vec![
            cmd!["wmname", "LG3D"],
            cmd!["slstatus"],
            cmd!["picom"],
            cmd!["hsetroot", "~/pictures/wallpapers/RetroCar.jpg"],
            cmd!["kitty", "-e", "tmux"],
        ])
    }
}

impl Autostart {
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.0.iter()
    }

    /// Spawn every command in order without waiting on any of them.
    ///
    /// A command that fails to start is logged and skipped.
    /// Returns how many were started.
    pub fn run(&self) -> usize {
        self.0
            .iter()
            .filter(|command| match command.spawn() {
                Ok(_) => {
                    tracing::info!(%command, "autostarted");
                    true
                }
                Err(err) => {
                    tracing::warn!(%command, "autostart failed: {}", err);
                    false
                }
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_autostart() {
        let autostart = Autostart::default();
        let programs: Vec<_> = autostart.iter().filter_map(Command::program).collect();

        assert_eq!(programs, ["wmname", "slstatus", "picom", "hsetroot", "kitty"]);
    }

    #[test]
    fn test_run_skips_failures() {
        let autostart = Autostart(vec![
            cmd!["true"],
            cmd!["/nonexistent/dwm-config-test-binary"],
            Command::shell("exit 0"),
        ]);

        assert_eq!(autostart.run(), 2);
    }

    #[test]
    fn test_run_skips_empty() {
        let autostart: Autostart = serde_json::from_str(r#"[[], ["true"]]"#).unwrap();

        assert_eq!(autostart.run(), 1);
    }
}
