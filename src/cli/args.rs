use std::path::PathBuf;

use clap::Parser;

use crate::models::constants::DEFAULT_STATS_FILE;

/// Rock-Paper-Scissors against the computer, with statistics kept between runs
#[derive(Parser, Debug)]
#[command(name = "rps", version, about)]
pub struct Args {
    /// Where statistics are stored
    #[arg(long, value_name = "PATH", default_value = DEFAULT_STATS_FILE)]
    pub stats_file: PathBuf,

    /// Seed for the computer's moves
    #[arg(short, long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Log more (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["rps"]);
        assert_eq!(args.stats_file, PathBuf::from(DEFAULT_STATS_FILE));
        assert_eq!(args.seed, None);
        assert_eq!(args.log_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn seed_file_and_verbosity() {
        let args = Args::parse_from(["rps", "--stats-file", "/tmp/x.json", "-s", "9", "-vv"]);
        assert_eq!(args.stats_file, PathBuf::from("/tmp/x.json"));
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn rejects_non_numeric_seed() {
        assert!(Args::try_parse_from(["rps", "--seed", "abc"]).is_err());
    }
}
