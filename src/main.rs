use rps::cli;
use rps::io::{TerminalInput, TerminalOutput};
use rps::services::session::{load_statistics, Session};
use rps::{GameEngine, StatsStore};

fn init_logging(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    if let Err(e) = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("logging disabled: {}", e);
    }
}

fn main() {
    let args = cli::parse();
    init_logging(args.log_level());

    let mut input = match TerminalInput::new() {
        Ok(input) => input,
        Err(e) => {
            eprintln!("cannot open terminal: {}", e);
            std::process::exit(1);
        }
    };
    let mut output = TerminalOutput;

    let store = StatsStore::new(&args.stats_file);
    let stats = load_statistics(&store, &mut output);
    let engine = match args.seed {
        Some(seed) => GameEngine::with_seed(stats, seed),
        None => GameEngine::new(stats),
    };

    Session::new(engine, store, &mut input, &mut output).run();
}
