use std::io::{self, Write};

use clap::Parser;
use crossterm::{cursor, execute, terminal};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use mazecarve::{Steps, ALGORITHM_NAMES, GRID_NAMES};

#[derive(Parser, Debug)]
#[command(name = "mazecarve")]
#[command(about = "Generate mazes over rectangular and hexagonal grids")]
struct Args {
    /// Width of the maze in cells
    #[arg(default_value_t = 50)]
    width: usize,

    /// Height of the maze in cells
    #[arg(default_value_t = 30)]
    height: usize,

    /// Maze generation algorithm
    #[arg(short, long, default_value = "backtracking")]
    algorithm: String,

    /// Grid type
    #[arg(short, long, default_value = "rect")]
    grid: String,

    /// Random seed (random if not specified)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the maze as it is being generated
    #[arg(short, long)]
    progress: bool,

    /// With --progress, skip this many intermediate steps between redraws
    #[arg(short, long, default_value_t = 0)]
    skip: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        eprintln!(
            "algorithms: {} / grids: {}",
            ALGORITHM_NAMES.join(", "),
            GRID_NAMES.join(", ")
        );
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed {seed}");
    let rng = ChaCha8Rng::seed_from_u64(seed);

    let grid = mazecarve::make_grid(&args.grid, args.width, args.height)?;
    let mut gen = mazecarve::make_generator(&args.algorithm, grid, rng)?;

    if args.progress {
        let mut steps = Steps::new(gen)?;
        let mut stdout = io::stdout();
        let mut drawn_lines = 0u16;
        let mut index = 0usize;
        while let Some(grid) = steps.advance() {
            if index % (args.skip + 1) == 0 {
                let frame = grid.render();
                redraw(&mut stdout, &frame, drawn_lines)?;
                drawn_lines = frame.lines().count() as u16;
            }
            index += 1;
        }
        // the last redraw may have been skipped
        let frame = steps.grid().render();
        redraw(&mut stdout, &frame, drawn_lines)?;
    } else {
        let maze = gen.generate();
        println!("{}", maze.render());
    }
    Ok(())
}

/// Move back over the previous frame and print the new one in place.
fn redraw(out: &mut impl Write, frame: &str, previous_lines: u16) -> io::Result<()> {
    if previous_lines > 0 {
        execute!(
            out,
            cursor::MoveUp(previous_lines),
            terminal::Clear(terminal::ClearType::FromCursorDown)
        )?;
    }
    writeln!(out, "{frame}")?;
    out.flush()
}
