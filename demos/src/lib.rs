//! Command-line front end shared by the `gridstar` binary and its tests.
//!
//! Loads a board from an ASCII layout file or generates one with random
//! obstacles, runs the search between its start and end markers, and
//! formats the outcome.

pub mod config;

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use gridstar_board::Board;
use gridstar_core::Point;
use gridstar_search::{GridModel, SearchOutcome, find_path_with_stats, manhattan};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser, Debug)]
#[command(name = "gridstar")]
#[command(author, version, about = "Shortest 4-directional paths on obstacle grids")]
pub struct Cli {
    /// ASCII layout file (`.` free, `#` obstacle, `S` start, `E` end)
    #[arg(short, long, value_name = "FILE")]
    pub layout: Option<PathBuf>,

    /// Width of a generated board
    #[arg(short = 'W', long, default_value_t = config::WIDTH)]
    pub width: i32,

    /// Height of a generated board
    #[arg(short = 'H', long, default_value_t = config::HEIGHT)]
    pub height: i32,

    /// Obstacle density of a generated board, between 0 and 1
    #[arg(short, long, default_value_t = config::DENSITY)]
    pub density: f64,

    /// Random seed for a generated board
    #[arg(short, long, default_value_t = config::SEED)]
    pub seed: u64,

    /// Start cell as `x,y` (defaults to the layout's `S` or the top-left corner)
    #[arg(long, value_parser = parse_point)]
    pub start: Option<Point>,

    /// End cell as `x,y` (defaults to the layout's `E` or the bottom-right corner)
    #[arg(long, value_parser = parse_point)]
    pub end: Option<Point>,

    /// Print only the cell ids of the path
    #[arg(short, long)]
    pub quiet: bool,
}

/// Parse an `x,y` pair.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got {s:?}"))?;
    let x = x.trim().parse::<i32>().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y = y.trim().parse::<i32>().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok(Point::new(x, y))
}

/// A board together with the result of searching it.
#[derive(Debug)]
pub struct Report {
    pub board: Board,
    pub outcome: SearchOutcome,
}

impl Report {
    /// Human-readable summary, or just the path ids when `quiet`.
    pub fn to_text(&self, quiet: bool) -> String {
        let mut out = String::new();
        if quiet {
            let ids: Vec<String> = self
                .outcome
                .path
                .iter()
                .map(|c| c.index().to_string())
                .collect();
            out.push_str(&ids.join(" "));
            out.push('\n');
            return out;
        }

        out.push_str(&self.board.render(&self.outcome.path));
        let stats = self.outcome.stats;
        if self.outcome.is_found() {
            let (Some(s), Some(e)) = (self.board.start(), self.board.end()) else {
                return out;
            };
            let direct = manhattan(self.board.coordinates_of(s), self.board.coordinates_of(e));
            let _ = writeln!(
                out,
                "path: {} steps (manhattan distance {direct})",
                self.outcome.steps()
            );
        } else {
            out.push_str("no path\n");
        }
        let _ = writeln!(
            out,
            "expanded {}, pushed {}, stale {}, peak frontier {}",
            stats.expanded, stats.pushed, stats.stale, stats.peak_frontier
        );
        out
    }
}

/// Build the board described by `cli` and search it.
pub fn run(cli: &Cli) -> anyhow::Result<Report> {
    let mut board = match &cli.layout {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading layout {}", path.display()))?;
            Board::from_layout(&text)
                .with_context(|| format!("parsing layout {}", path.display()))?
        }
        None => {
            if cli.width <= 0 || cli.height <= 0 {
                bail!("board size must be positive, got {}x{}", cli.width, cli.height);
            }
            Board::new(cli.width, cli.height)
        }
    };

    let start = cli.start.unwrap_or_else(|| {
        board
            .start()
            .map_or(board.range().min, |c| board.coordinates_of(c))
    });
    let end = cli.end.unwrap_or_else(|| {
        board
            .end()
            .map_or(board.range().max.shift(-1, -1), |c| board.coordinates_of(c))
    });
    board.set_start(start).context("placing start")?;
    board.set_end(end).context("placing end")?;

    if cli.layout.is_none() {
        let mut rng = StdRng::seed_from_u64(cli.seed);
        board.scatter_obstacles(&mut rng, cli.density);
    }

    let (Some(s), Some(e)) = (board.start(), board.end()) else {
        bail!("start and end must be different cells");
    };
    info!(
        "searching {}x{} board with {} obstacles",
        board.width(),
        board.height(),
        board.obstacle_count()
    );
    let outcome = find_path_with_stats(&board, s, e)?;
    Ok(Report { board, outcome })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("gridstar").chain(args.iter().copied()))
    }

    #[test]
    fn parse_point_accepts_pairs() {
        assert_eq!(parse_point("3,4"), Ok(Point::new(3, 4)));
        assert_eq!(parse_point(" 0 , 12"), Ok(Point::new(0, 12)));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,1").is_err());
    }

    #[test]
    fn defaults() {
        let c = cli(&[]);
        assert_eq!(c.width, 20);
        assert_eq!(c.height, 20);
        assert_eq!(c.seed, config::SEED);
        assert!(c.layout.is_none());
        assert!(!c.quiet);
    }

    #[test]
    fn empty_generated_board_uses_corners() {
        let report = run(&cli(&["-W", "5", "-H", "5", "--density", "0"])).unwrap();
        assert_eq!(report.outcome.steps(), 8);
        let text = report.to_text(false);
        assert!(text.starts_with('S'));
        assert_eq!(text.matches('*').count(), 7);
        assert!(text.contains("path: 8 steps (manhattan distance 8)"));
    }

    #[test]
    fn quiet_output_lists_ids() {
        let report = run(&cli(&[
            "-W", "3", "-H", "1", "--density", "0", "--start", "0,0", "--end", "2,0",
        ]))
        .unwrap();
        assert_eq!(report.to_text(true), "0 1 2\n");
    }

    #[test]
    fn layout_file_markers_are_used() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "S.#.\n..#.\n...E\n").unwrap();
        let path = file.path().to_str().unwrap().to_owned();

        let report = run(&cli(&["--layout", &path])).unwrap();
        assert_eq!(report.outcome.steps(), 5);

        let report = run(&cli(&["--layout", &path, "--end", "3,0"])).unwrap();
        assert_eq!(report.outcome.steps(), 7);
    }

    #[test]
    fn walled_layout_reports_no_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "S#.\n.#.\n.#E\n").unwrap();
        let path = file.path().to_str().unwrap().to_owned();

        let report = run(&cli(&["--layout", &path])).unwrap();
        assert!(!report.outcome.is_found());
        assert!(report.to_text(false).contains("no path\n"));
        assert_eq!(report.to_text(true), "\n");
    }

    #[test]
    fn invalid_inputs_fail() {
        assert!(run(&cli(&["-W", "0"])).is_err());
        assert!(run(&cli(&["--start", "1,1", "--end", "1,1"])).is_err());
        assert!(run(&cli(&["--start", "40,0"])).is_err());
        assert!(run(&cli(&["--layout", "/nonexistent/gridstar.txt"])).is_err());
    }
}
