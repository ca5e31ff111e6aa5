use std::io;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;

use crate::accumulator::ArithmeticMode;
use crate::glyph::ALPHABET;
use crate::grid::Grid;
use crate::interpreter::{Config, Interpreter, Outcome};
use crate::layer::InputTable;
use crate::sink::Sink;

/// Configuration for a random-program survey.
pub struct SurveyConfig {
    /// Number of programs to generate.
    pub count: usize,
    /// Grid height of each program.
    pub rows: usize,
    /// Grid width of each program.
    pub cols: usize,
    /// Maximum glyphs dispatched per program.
    pub step_limit: usize,
    /// Output bytes kept per program; the rest is only counted.
    pub output_limit: usize,
    pub arithmetic: ArithmeticMode,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            count: 1 << 10,
            rows: 8,
            cols: 16,
            step_limit: 1 << 12,
            output_limit: 1 << 10,
            arithmetic: ArithmeticMode::Corrected,
        }
    }
}

/// Result of running one surveyed program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub steps: usize,
    pub halted: bool,
    /// The first `output_limit` bytes printed, cut at a char boundary.
    pub output: String,
    /// Total bytes printed, including any that were not kept.
    pub output_bytes: usize,
}

/// Draw a grid with every cell chosen uniformly from the glyph alphabet.
pub fn random_grid<R: Rng + ?Sized>(rng: &mut R, rows: usize, cols: usize) -> Option<Grid> {
    let cells = (0..rows * cols)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect();
    Grid::from_cells(cells, rows, cols).ok()
}

/// Keeps a prefix of the output and counts the rest.
struct Capture {
    text: String,
    limit: usize,
    total: usize,
}

impl Sink for Capture {
    fn emit(&mut self, text: &str) -> io::Result<()> {
        self.total += text.len();
        for c in text.chars() {
            if self.text.len() + c.len_utf8() > self.limit {
                break;
            }
            self.text.push(c);
        }
        Ok(())
    }
}

/// A batch of random programs, generated from a seed and run in parallel.
pub struct Survey {
    pub programs: Vec<Grid>,
    pub config: SurveyConfig,
}

impl Survey {
    /// Generate `config.count` random programs. Zero-sized grids produce an
    /// empty survey.
    pub fn new(config: SurveyConfig, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let programs = (0..config.count)
            .map_while(|_| random_grid(&mut rng, config.rows, config.cols))
            .collect();
        Self { programs, config }
    }

    /// Run every program independently. Reports come back in program order.
    pub fn run(&self) -> Vec<RunReport> {
        let config = Config {
            arithmetic: self.config.arithmetic,
            step_limit: Some(self.config.step_limit),
        };
        let output_limit = self.config.output_limit;

        self.programs
            .par_iter()
            .map(|grid| run_one(grid.clone(), config, output_limit))
            .collect()
    }
}

fn run_one(grid: Grid, config: Config, output_limit: usize) -> RunReport {
    let mut interp = Interpreter::new(grid, InputTable::default(), config);
    let mut capture = Capture {
        text: String::new(),
        limit: output_limit,
        total: 0,
    };
    // Capture never fails, so neither does the run.
    let outcome = interp
        .run(&mut capture)
        .unwrap_or(Outcome::StepLimit { steps: interp.steps() });
    RunReport {
        steps: outcome.steps(),
        halted: outcome.halted(),
        output: capture.text,
        output_bytes: capture.total,
    }
}
