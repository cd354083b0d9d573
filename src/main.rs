#![warn(clippy::all)]

use clap::{Parser, ValueEnum};
use critters::{
    random_fill,
    utils::{Config, FrameLimiter},
    CrittersEngine, Direction, Grid, Pattern, Region, Scattering,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Scenario {
    /// Randomly filled square in the middle of the field
    Random,
    /// Single glider travelling east
    Glider,
    /// Head-on glider collision, variant A
    ScatterA,
    /// Head-on glider collision, variant B
    ScatterB,
}

#[derive(Parser, Debug)]
#[command(name = "critters", version, about = "Critters reversible block cellular automaton")]
struct Args {
    #[arg(value_enum)]
    scenario: Scenario,

    /// Number of generations to render
    #[arg(long, default_value_t = Config::FRAMES)]
    frames: u64,

    /// Side of the field (even); ignored by the scatter scenarios
    #[arg(long, default_value_t = Config::GRID_SIDE)]
    side: usize,

    /// Seed of the random scenario
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = Config::FILL_RATE)]
    fill_rate: f64,

    /// Frame rate limit, 0 for none
    #[arg(long, default_value_t = Config::max_fps())]
    max_fps: f64,

    /// Print only the last frame
    #[arg(long)]
    final_only: bool,
}

fn initial_grid(args: &Args) -> critters::Result<Grid> {
    match args.scenario {
        Scenario::Random => random_fill(
            args.side,
            Region::centered(args.side, Config::SEEDED_REGION_SIDE),
            args.fill_rate,
            args.seed,
        ),
        Scenario::Glider => {
            let mut grid = Grid::blank(args.side)?;
            // gliders travel from odd coordinates
            let origin = args.side / 2 | 1;
            Pattern::glider(Direction::East).place(&mut grid, origin, 1);
            Ok(grid)
        }
        Scenario::ScatterA => Scattering::A.grid(),
        Scenario::ScatterB => Scattering::B.grid(),
    }
}

fn print_frame(engine: &CrittersEngine) {
    let display = engine.current_display_grid();
    println!(
        "generation {} population {}",
        engine.generation(),
        display.population()
    );
    print!("{}", display);
    println!();
}

fn main() -> critters::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let args = Args::parse();
    let mut engine = CrittersEngine::from_grid(initial_grid(&args)?);
    info!(scenario = ?args.scenario, side = engine.grid().side(), frames = args.frames, "starting");

    let mut limiter = FrameLimiter::default();
    limiter.set_max_fps(if args.final_only { 0. } else { args.max_fps });

    if !args.final_only {
        print_frame(&engine);
    }
    for _ in 0..args.frames {
        engine.step();
        if !args.final_only {
            print_frame(&engine);
            limiter.delay();
        }
    }
    if args.final_only {
        print_frame(&engine);
    }
    info!(
        generation = engine.generation(),
        fps = limiter.fps(),
        "finished"
    );
    Ok(())
}
