use clap::{Parser, Subcommand};

/// Swap UI Store - drive the Loop client's presentation state from a terminal
#[derive(Parser, Debug)]
#[command(name = "swap-ui-store")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// UI language (overrides the saved setting), e.g. "en" or "zh-CN"
    #[arg(short, long, global = true)]
    pub lang: Option<String>,

    /// Log level filter (overrides RUST_LOG)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk through pages, settings, toasts and error handling
    Demo,

    /// Drive the store from an interactive menu
    Interactive,

    /// List available languages
    Languages,

    /// Show or update saved UI settings
    Config {
        /// UI language to save
        #[arg(long)]
        language: Option<String>,

        /// Number of log records kept in memory
        #[arg(long)]
        log_capacity: Option<usize>,

        /// Start with the Processing Swaps section expanded
        #[arg(long)]
        show_processing_swaps: Option<bool>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command() {
        let cli = Cli::parse_from(["swap-ui-store"]);
        assert!(cli.command.is_none());
        assert!(cli.lang.is_none());
    }

    #[test]
    fn test_global_lang() {
        let cli = Cli::parse_from(["swap-ui-store", "demo", "--lang", "zh-CN"]);
        assert!(matches!(cli.command, Some(Commands::Demo)));
        assert_eq!(cli.lang.as_deref(), Some("zh-CN"));
    }

    #[test]
    fn test_config_args() {
        let cli = Cli::parse_from([
            "swap-ui-store",
            "config",
            "--log-capacity",
            "50",
            "--show-processing-swaps",
            "true",
        ]);
        match cli.command {
            Some(Commands::Config { language, log_capacity, show_processing_swaps }) => {
                assert!(language.is_none());
                assert_eq!(log_capacity, Some(50));
                assert_eq!(show_processing_swaps, Some(true));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
