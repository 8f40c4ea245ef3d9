use clap::Parser;

use crate::play::{self, PlayArg};

/// Falling-block puzzle in the terminal.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[clap(flatten)]
    play: PlayArg,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    play::run(&args.play)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_is_valid() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = CommandArgs::try_parse_from(["stackfall"]).unwrap();
        assert!(format!("{args:?}").contains("tick_ms: 500"));
    }

    #[test]
    fn test_parse_flags() {
        let args = CommandArgs::try_parse_from([
            "stackfall",
            "--tick-ms",
            "250",
            "--seed",
            "000102030405060708090a0b0c0d0e0f",
            "--save-summary",
            "out.json",
            "--no-dots",
        ])
        .unwrap();
        let debug = format!("{args:?}");
        assert!(debug.contains("tick_ms: 250"));
        assert!(debug.contains("no_dots: true"));
        assert!(debug.contains("out.json"));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(CommandArgs::try_parse_from(["stackfall", "--tick-ms", "0"]).is_err());
        assert!(CommandArgs::try_parse_from(["stackfall", "--seed", "xyz"]).is_err());
    }
}
