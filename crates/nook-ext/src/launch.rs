//! Fire-and-forget process launching for terminals and the editor.
//!
//! Spawned processes are never waited on or inspected; the extension hands
//! the folder off and returns to its event loop.

use std::process::Command;

/// Launch-command template for one supported terminal emulator.
struct TerminalEntry {
    /// Preference value as stored in the host preferences.
    preference: &'static str,
    program: &'static str,
    /// Flag that sets the working directory, followed by the path.
    dir_flag: &'static str,
}

/// Supported terminal emulators. Adding one is a table entry, not a branch.
const TERMINALS: &[TerminalEntry] = &[
    TerminalEntry {
        preference: "gnome",
        program: "gnome-terminal",
        dir_flag: "--working-directory",
    },
    TerminalEntry {
        preference: "tilix",
        program: "tilix",
        dir_flag: "-w",
    },
];

fn terminal_entry(preference: &str) -> Option<&'static TerminalEntry> {
    TERMINALS.iter().find(|t| t.preference == preference)
}

/// Spawn the terminal selected by `preference` with `path` as its working
/// directory.
///
/// Preference values without a table entry are a silent no-op. Returns
/// whether a spawn was attempted.
pub fn open_in_terminal(preference: &str, path: &str) -> bool {
    let Some(entry) = terminal_entry(preference) else {
        tracing::debug!(preference, "no launch entry for terminal preference");
        return false;
    };
    spawn_detached(Command::new(entry.program).args([entry.dir_flag, path]));
    true
}

/// Spawn the code editor on `path`.
pub fn open_in_code(path: &str) {
    spawn_detached(Command::new("code").arg(path));
}

fn spawn_detached(command: &mut Command) {
    match command.spawn() {
        Ok(child) => drop(child),
        Err(error) => {
            tracing::error!(program = ?command.get_program(), "spawn failed: {error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_preferences_have_entries() {
        assert_eq!(terminal_entry("gnome").unwrap().program, "gnome-terminal");
        assert_eq!(terminal_entry("tilix").unwrap().program, "tilix");
    }

    #[test]
    fn test_unknown_preference_has_no_entry() {
        assert!(terminal_entry("kitty").is_none());
        assert!(terminal_entry("").is_none());
    }

    #[test]
    fn test_unknown_preference_is_a_no_op() {
        assert!(!open_in_terminal("kitty", "/tmp"));
    }
}
