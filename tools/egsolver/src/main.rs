//! `egsolver` — generate, convert and solve two-player energy games from
//! the command line.

mod io_helpers;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use egame_codec::emit_eg;
use egame_codec::energy_game_to_dot;
use egame_codec::parity_game_to_dot;
use egame_codec::parse_eg;
use egame_codec::to_parsed_game;
use egame_codec::to_pgsolver;
use egame_codec::ParsedGame;
use egame_core::extract_strategy;
use egame_core::solve;
use egame_core::VertexIndex;
use egame_generate::random_energy_game;
use egame_generate::GenerateOptions;
use egame_parity::compute_reachable;
use egame_parity::energy_to_parity;
use egame_util::EgameError;
use egame_util::Timing;
use egame_util::Verbosity;
use egame_util::VerbosityFlag;
use log::error;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::io_helpers::read_input;
use crate::io_helpers::write_output;
use crate::report::render_json;
use crate::report::render_report;

#[derive(Parser)]
#[command(
    name = "egsolver",
    version,
    about = "Generate, convert, and solve two-player energy games",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: VerbosityFlag,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a random energy game.
    Generate {
        #[arg(long, default_value_t = 10)]
        vertices: usize,

        /// Probability of an edge between any pair of distinct vertices, and
        /// independently of a self-loop at each vertex.
        #[arg(long, default_value_t = 0.2)]
        density: f64,

        #[arg(long = "owner0-probability", default_value_t = 0.5)]
        owner0_probability: f64,

        #[arg(long, default_value_t = 5)]
        max_weight: i64,

        #[arg(long)]
        min_weight: Option<i64>,

        /// Pin a losing self-loop on any vertex that would otherwise end up
        /// a sink, instead of leaving it one.
        #[arg(long)]
        no_sinks: bool,

        #[arg(long, default_value_t = 0)]
        seed: u64,

        #[arg(short, long, value_enum, default_value_t = GameFormat::Eg)]
        format: GameFormat,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert a game between formats, optionally reducing it to a parity game.
    Convert {
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = GameFormat::Eg)]
        format: GameFormat,

        /// Reduce the input to a parity game before emitting it.
        #[arg(short = 't', long, value_enum)]
        to: Option<Target>,

        /// Initial energy credit the parity reduction is built against
        /// (defaults to the reduction's own maximal credit level).
        #[arg(long)]
        initial_credit: Option<u64>,
    },

    /// Solve an energy game and report the winning region and strategy.
    Solve {
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = ResultFormat::Report)]
        format: ResultFormat,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum GameFormat {
    Eg,
    Dot,
    Pgsolver,
}

#[derive(Clone, Copy, ValueEnum)]
enum Target {
    Parity,
}

#[derive(Clone, Copy, ValueEnum)]
enum ResultFormat {
    Report,
    Json,
    Dot,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let verbosity = Verbosity::from(&cli.verbosity);
    env_logger::Builder::new()
        .filter_level(verbosity.log_level_filter())
        .parse_default_env()
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), EgameError> {
    match command {
        Command::Generate {
            vertices,
            density,
            owner0_probability,
            max_weight,
            min_weight,
            no_sinks,
            seed,
            format,
            output,
        } => {
            let mut rng = StdRng::seed_from_u64(seed);
            let options = GenerateOptions {
                num_vertices: vertices,
                edge_probability: density,
                owner_zero_probability: owner0_probability,
                max_weight,
                min_weight,
                no_sinks,
            };

            let game = random_energy_game(&mut rng, &options);
            let parsed = to_parsed_game(game);
            let rendered = render_energy_game(&parsed, format)?;
            write_output(&rendered, output.as_deref())
        }

        Command::Convert {
            input,
            output,
            format,
            to,
            initial_credit,
        } => {
            let text = read_input(input.as_deref())?;
            let parsed = parse_eg(&text)?;

            let rendered = match to {
                Some(Target::Parity) => {
                    let reference = VertexIndex::new(0);
                    let reduction = energy_to_parity(&parsed.game, reference, initial_credit);
                    // The reduction allocates one vertex per (energy vertex, credit
                    // level) pair regardless of reachability; pruning down to what
                    // is actually reachable from the reference vertex keeps the
                    // emitted pgsolver/DOT output proportional to the play that
                    // matters instead of the full level range.
                    let (reachable, _mapping) = compute_reachable(&reduction.game);
                    match format {
                        GameFormat::Pgsolver => to_pgsolver(&reachable),
                        GameFormat::Dot => parity_game_to_dot(&reachable),
                        GameFormat::Eg => {
                            return Err(EgameError::unsupported_format(
                                "eg output of a parity game (use -f dot or -f pgsolver)",
                            ));
                        }
                    }
                }
                None => render_energy_game(&parsed, format)?,
            };

            write_output(&rendered, output.as_deref())
        }

        Command::Solve { input, format, output } => {
            let text = read_input(input.as_deref())?;
            let parsed = parse_eg(&text)?;

            let timing = Timing::new();

            let mut solve_timer = timing.start("solve");
            let result = solve(&parsed.game);
            solve_timer.finish();

            let mut strategy_timer = timing.start("strategy");
            let strategy = extract_strategy(&parsed.game, &result)?;
            strategy_timer.finish();

            let rendered = match format {
                ResultFormat::Report => render_report(&parsed, &result, &strategy, &timing),
                ResultFormat::Json => render_json(&parsed, &result, &strategy, &timing),
                ResultFormat::Dot => energy_game_to_dot(&parsed, Some(&result), Some(&strategy)),
            };

            write_output(&rendered, output.as_deref())
        }
    }
}

fn render_energy_game(parsed: &ParsedGame, format: GameFormat) -> Result<String, EgameError> {
    match format {
        GameFormat::Eg => Ok(emit_eg(parsed)),
        GameFormat::Dot => Ok(energy_game_to_dot(parsed, None, None)),
        GameFormat::Pgsolver => Err(EgameError::unsupported_format(
            "pgsolver output of an energy game (reduce with -t parity first)",
        )),
    }
}
