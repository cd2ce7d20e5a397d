//! Mazer command-line entry point.
//!
//! Run: `mazer maze.txt`, or `mazer --random 20 10` for a generated maze.

use std::env;
use std::fs;
use std::process;

use mazer_lib::{Maze, MazeGen};
use mazer_search::{Policy, Search};
use rand::SeedableRng;
use rand::rngs::StdRng;

const USAGE: &str = "Usage: mazer [--dfs] <maze-file>
       mazer [--dfs] --random <width> <height> [seed]";

/// Carved share of the grid for generated mazes.
const RANDOM_FILL: f64 = 0.4;

fn main() {
    if let Err(e) = run() {
        eprintln!("mazer: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut policy = Policy::Fifo;
    let mut rest: Vec<&str> = Vec::new();
    for arg in &args {
        match arg.as_str() {
            "--dfs" => policy = Policy::Lifo,
            other => rest.push(other),
        }
    }

    let maze = match rest.as_slice() {
        [path] => Maze::parse(&fs::read_to_string(path)?)?,
        ["--random", width, height] => generate(width, height, None)?,
        ["--random", width, height, seed] => generate(width, height, Some(seed))?,
        _ => return Err(USAGE.into()),
    };

    println!("Maze:");
    print!("{maze}");
    println!("Solving...");
    let solution = Search::new(policy).solve(&maze.grid, maze.start, maze.goal)?;
    println!("Solution:");
    print!("{}", maze.render(Some(&solution)));
    println!("States explored: {}", solution.num_explored);
    Ok(())
}

fn generate(
    width: &str,
    height: &str,
    seed: Option<&str>,
) -> Result<Maze, Box<dyn std::error::Error>> {
    let width: usize = width.parse()?;
    let height: usize = height.parse()?;
    if width < 2 || height < 2 {
        return Err("random mazes need a width and height of at least 2".into());
    }
    let rng = match seed {
        Some(s) => StdRng::seed_from_u64(s.parse()?),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    Ok(MazeGen::new(rng).generate(width, height, RANDOM_FILL))
}
