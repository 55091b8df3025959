//! Command-line interface for gridtoe.

use clap::Parser;

/// Gridtoe - MxM tic-tac-toe against a brute-force search engine
#[derive(Parser, Debug)]
#[command(name = "gridtoe")]
#[command(about = "Simple tic-tac-toe program using brute-force search logic", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Drive both seats from console input instead of the engine
    #[arg(long)]
    pub hotseat: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_quiet_engine_play() {
        let cli = Cli::parse_from(["gridtoe"]);
        assert!(!cli.verbose);
        assert!(!cli.hotseat);
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::parse_from(["gridtoe", "-v", "--hotseat"]);
        assert!(cli.verbose);
        assert!(cli.hotseat);
    }
}
