//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

/// Synthkey - synthetic keyboard input for Windows
#[derive(Parser, Debug)]
#[command(name = "synthkey")]
#[command(version)]
#[command(about = "Synthesize keyboard input events (press, release, tap, alt-tab)")]
#[command(long_about = None)]
pub struct Cli {
    /// Build events but discard them instead of submitting to the OS
    #[arg(long)]
    pub dry_run: bool,

    /// Gesture to run (a bare invocation runs alt-tab)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press and hold a key (key-down only)
    Press {
        /// Key name, e.g. alt, tab, w, numpad5
        key: String,
    },
    /// Release a held key (key-up only)
    Release {
        /// Key name, e.g. alt, tab, w, numpad5
        key: String,
    },
    /// Press and release a key with the standard pause between them
    Tap {
        /// Key name, e.g. alt, tab, w, numpad5
        key: String,
    },
    /// Hold Alt, tap Tab, and keep the task switcher open for two seconds
    AltTab,
    /// List the supported key names and their virtual-key codes
    Keys,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["synthkey"]);
        assert!(!cli.dry_run);
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_tap() {
        let cli = Cli::parse_from(["synthkey", "tap", "w"]);
        match cli.command {
            Some(Commands::Tap { key }) => assert_eq!(key, "w"),
            other => panic!("Expected Tap command, got {:?}", other),
        }
    }

    #[test]
    fn cli_parses_press_and_release() {
        let cli = Cli::parse_from(["synthkey", "press", "alt"]);
        assert!(matches!(cli.command, Some(Commands::Press { .. })));

        let cli = Cli::parse_from(["synthkey", "release", "alt"]);
        assert!(matches!(cli.command, Some(Commands::Release { .. })));
    }

    #[test]
    fn cli_parses_alt_tab() {
        let cli = Cli::parse_from(["synthkey", "alt-tab"]);
        assert!(matches!(cli.command, Some(Commands::AltTab)));
    }

    #[test]
    fn cli_parses_keys() {
        let cli = Cli::parse_from(["synthkey", "keys"]);
        assert!(matches!(cli.command, Some(Commands::Keys)));
    }

    #[test]
    fn cli_parses_dry_run() {
        let cli = Cli::parse_from(["synthkey", "--dry-run", "tap", "w"]);
        assert!(cli.dry_run);
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
