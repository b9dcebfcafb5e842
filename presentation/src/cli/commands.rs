//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for portfolio-twin
#[derive(Parser, Debug)]
#[command(name = "portfolio-twin")]
#[command(author, version, about = "Terminal portfolio with an AI twin you can chat with")]
#[command(long_about = r#"
Portfolio Twin renders a personal portfolio in the terminal, with a chat
panel that answers questions about the owner through the Gemini API.

Without arguments the full-screen portfolio is opened. Press `c` to open
the chat, `1`-`7` to jump between sections, `q` to quit.

The API key is read from the GEMINI_API_KEY environment variable (or the
variable named by `gemini.api_key_env`). Without a key every reply is the
fallback message.

Configuration files are loaded from (in priority order):
1. PORTFOLIO_TWIN_* environment variables
2. --config <path>     Explicit config file
3. ./twin.toml         Project-level config
4. ~/.config/portfolio-twin/config.toml   Global config

Example:
  portfolio-twin
  portfolio-twin --ask "What projects have you built?"
  portfolio-twin --profile me.toml --model gemini-2.0-flash
"#)]
pub struct Cli {
    /// Ask a single question, print the reply and exit
    #[arg(short, long, value_name = "QUESTION")]
    pub ask: Option<String>,

    /// Gemini model to use (overrides gemini.model)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Profile TOML file (overrides profile.path)
    #[arg(short, long, value_name = "PATH")]
    pub profile: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the spinner and labels in --ask mode
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Whether this run is the one-shot question mode
    pub fn is_ask(&self) -> bool {
        self.ask.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_launch_tui() {
        let cli = Cli::parse_from(["portfolio-twin"]);
        assert!(!cli.is_ask());
        assert_eq!(cli.verbose, 0);
        assert!(cli.config.is_none());
        assert!(!cli.no_config);
    }

    #[test]
    fn test_ask_with_overrides() {
        let cli = Cli::parse_from([
            "portfolio-twin",
            "--ask",
            "Who are you?",
            "-m",
            "gemini-2.0-flash",
            "--profile",
            "me.toml",
            "-vv",
            "--quiet",
        ]);
        assert_eq!(cli.ask.as_deref(), Some("Who are you?"));
        assert_eq!(cli.model.as_deref(), Some("gemini-2.0-flash"));
        assert_eq!(cli.profile, Some(PathBuf::from("me.toml")));
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
    }
}
