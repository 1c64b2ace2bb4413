//! Argument vectors for programs the window manager starts.

use std::{
    fmt,
    process::{self, Stdio},
};

use expanduser::expanduser;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::appearance::Appearance;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Command has no program to run.")]
    Empty,
    #[error("Failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
}

/// A program and its arguments, `argv[0]` first.
///
/// Deserializing does not reject an empty vector so that a broken
/// configuration file can still be loaded and reported on by validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Command(Vec<String>);

impl Command {
    pub fn new<I, S>(argv: I) -> Result<Self, CommandError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
        if argv.is_empty() {
            return Err(CommandError::Empty);
        }
        Ok(Self(argv))
    }

    /// Run `cmd` through `/bin/sh -c`.
    pub fn shell(cmd: &str) -> Self {
        Self(vec!["/bin/sh".into(), "-c".into(), cmd.into()])
    }

    pub fn program(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn args(&self) -> &[String] {
        self.0.get(1..).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Start the program without waiting for it.
    ///
    /// A leading `~` in any argument is expanded to the home directory.
    pub fn spawn(&self) -> Result<process::Child, CommandError> {
        let program = self.program().ok_or(CommandError::Empty)?;
        let spawn_err = |source| CommandError::Spawn {
            program: program.to_string(),
            source,
        };

        let mut command = process::Command::new(expand(program).map_err(spawn_err)?);
        for arg in self.args() {
            command.arg(expand(arg).map_err(spawn_err)?);
        }

        let child = command
            .stdin(Stdio::null())
            .spawn()
            .map_err(spawn_err)?;
        tracing::debug!(pid = child.id(), command = %self, "spawned");

        Ok(child)
    }
}

fn expand(arg: &str) -> std::io::Result<String> {
    if arg.starts_with('~') {
        Ok(expanduser(arg)?.to_string_lossy().into_owned())
    } else {
        Ok(arg.to_string())
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

/// The launcher, themed with the bar's font and colors.
pub fn dmenu(appearance: &Appearance) -> Command {
    let norm = &appearance.schemes.norm;
    let sel = &appearance.schemes.sel;

    Command(vec![
        "dmenu_run".into(),
        "-m".into(),
        "0".into(),
        "-fn".into(),
        appearance.dmenu_font.clone(),
        "-nb".into(),
        norm.bg.to_string(),
        "-nf".into(),
        norm.fg.to_string(),
        "-sb".into(),
        norm.border.to_string(),
        "-sf".into(),
        sel.fg.to_string(),
    ])
}

/// Builds a command from literal arguments known to be non-empty.
#[macro_export]
macro_rules! cmd {
    ($($arg:expr),+ $(,)?) => {
        $crate::commands::Command::from_static(&[$($arg),+])
    };
}

impl Command {
    #[doc(hidden)]
    pub fn from_static(argv: &[&str]) -> Self {
        Self(argv.iter().map(|arg| arg.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_command() {
        let command = Command::new(["kitty", "-e", "tmux"]).unwrap();

        assert_eq!(command.program(), Some("kitty"));
        assert_eq!(command.args(), ["-e", "tmux"]);
        assert_eq!(command.to_string(), "kitty -e tmux");
    }

    #[test]
    fn test_new_command_empty() {
        let result = Command::new(Vec::<String>::new());

        assert!(matches!(result, Err(CommandError::Empty)));
    }

    #[test]
    fn test_shell_command() {
        let command = Command::shell("echo hi | wc -c");

        assert_eq!(command.program(), Some("/bin/sh"));
        assert_eq!(command.args(), ["-c", "echo hi | wc -c"]);
    }

    #[test]
    fn test_cmd_macro() {
        let command = cmd!["slstatus"];

        assert_eq!(command.program(), Some("slstatus"));
        assert!(command.args().is_empty());
    }

    #[test]
    fn test_dmenu_uses_appearance() {
        let command = dmenu(&Appearance::default());

        assert_eq!(
            command.to_string(),
            "dmenu_run -m 0 -fn iosevka:size=11 -nb #1d2021 -nf #d5c4a1 -sb #665c54 -sf #fe8019"
        );
    }

    #[test]
    fn test_empty_command_from_json() {
        let command: Command = serde_json::from_str("[]").unwrap();

        assert!(command.is_empty());
        assert!(matches!(command.spawn(), Err(CommandError::Empty)));
    }

    #[test]
    fn test_spawn_missing_program() {
        let command = cmd!["/nonexistent/dwm-config-test-binary"];

        assert!(matches!(command.spawn(), Err(CommandError::Spawn { .. })));
    }

    #[test]
    fn test_spawn() {
        let mut child = cmd!["true"].spawn().unwrap();

        assert!(child.wait().unwrap().success());
    }
}
