//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Generate colored variants of `w*.svg` icons
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Fill color written into `fill="#<FILL>"` (e.g. ff0000)
    #[arg(value_name = "FILL")]
    pub fill: String,

    /// Text replacing the leading `w` in output file names (e.g. red)
    #[arg(value_name = "REPLACEMENT")]
    pub replacement: String,

    /// Directory to scan (not recursive)
    #[arg(short, long, default_value = ".", value_hint = clap::ValueHint::DirPath)]
    pub dir: PathBuf,

    /// Config file path, relative to the scanned directory (default: recolor.toml)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Report what would be written without touching any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_positional() {
        let cli = Cli::try_parse_from(["recolor", "ff0000", "red"]).unwrap();
        assert_eq!(cli.fill, "ff0000");
        assert_eq!(cli.replacement, "red");
        assert_eq!(cli.dir, PathBuf::from("."));
        assert!(cli.config.is_none());
        assert!(!cli.dry_run);
        assert_eq!(cli.color, ColorChoice::Auto);
    }

    #[test]
    fn test_cli_options() {
        let cli = Cli::try_parse_from([
            "recolor", "-d", "icons", "-C", "alt.toml", "-n", "-v", "--color", "never", "000",
            "b",
        ])
        .unwrap();
        assert_eq!(cli.dir, PathBuf::from("icons"));
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
        assert!(cli.dry_run);
        assert!(cli.verbose);
        assert_eq!(cli.color, ColorChoice::Never);
        assert_eq!(cli.fill, "000");
        assert_eq!(cli.replacement, "b");
    }

    #[test]
    fn test_cli_usage_separates_fill_from_color_choice() {
        let usage = Cli::command().render_usage().to_string();
        assert!(usage.contains("<FILL>"));
        assert!(!usage.contains("<COLOR>"));

        let cli = Cli::try_parse_from(["recolor", "--color", "always", "ff0000", "red"]).unwrap();
        assert_eq!(cli.color, ColorChoice::Always);
        assert_eq!(cli.fill, "ff0000");
    }

    #[test]
    fn test_cli_missing_replacement() {
        assert!(Cli::try_parse_from(["recolor", "ff0000"]).is_err());
    }
}
