pub const NUM_MOVES: usize = 3;

/// Relative path of the statistics file when none is given.
pub const DEFAULT_STATS_FILE: &str = "rps_stats.json";

/// Ask whether to keep playing every this many games (cumulative).
pub const CONTINUE_PROMPT_INTERVAL: u32 = 5;
