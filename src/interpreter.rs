use tracing::{debug, trace};

use crate::accumulator::{Accumulator, ArithmeticMode};
use crate::conveyor::{Conveyor, DropAction};
use crate::error::Error;
use crate::glyph::{Glyph, Literal};
use crate::grid::{Grid, Position};
use crate::heading::{Heading, MOVEMENT};
use crate::layer::{InputTable, reset_period, select};
use crate::sink::Sink;

/// Interpreter settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// How integer `add`, `sub`, `mult` and `pow` combine operands.
    pub arithmetic: ArithmeticMode,
    /// Maximum glyphs to dispatch in [`Interpreter::run`]. `None` runs until
    /// the program halts.
    pub step_limit: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Halted,
}

/// How a call to [`Interpreter::run`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Halted { steps: usize },
    StepLimit { steps: usize },
}

impl Outcome {
    pub fn steps(&self) -> usize {
        match *self {
            Outcome::Halted { steps } | Outcome::StepLimit { steps } => steps,
        }
    }

    pub fn halted(&self) -> bool {
        matches!(self, Outcome::Halted { .. })
    }
}

/// Executes one program.
///
/// Owns every piece of mutable state: the pointer, heading, layer counter,
/// accumulator and conveyor. The grid and input table never change once
/// execution starts.
pub struct Interpreter {
    grid: Grid,
    input: InputTable,
    reset_period: usize,
    step_limit: Option<usize>,
    pointer: Position,
    heading: Heading,
    layer: usize,
    accumulator: Accumulator,
    conveyor: Conveyor,
    steps: usize,
    halted: bool,
}

impl Interpreter {
    pub fn new(grid: Grid, input: InputTable, config: Config) -> Self {
        let reset_period = reset_period(&input);
        Self {
            grid,
            input,
            reset_period,
            step_limit: config.step_limit,
            pointer: Position::default(),
            heading: Heading::Right,
            layer: 0,
            accumulator: Accumulator::new(config.arithmetic),
            conveyor: Conveyor::new(),
            steps: 0,
            halted: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn pointer(&self) -> Position {
        self.pointer
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn layer(&self) -> usize {
        self.layer
    }

    pub fn reset_period(&self) -> usize {
        self.reset_period
    }

    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    pub fn conveyor(&self) -> &Conveyor {
        &self.conveyor
    }

    /// Glyphs dispatched so far, including a final halt.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Dispatch the glyph under the pointer, evaluate, then move.
    ///
    /// Only output failures are errors; malformed expressions degrade the
    /// accumulator instead.
    pub fn step<S: Sink>(&mut self, sink: &mut S) -> Result<Status, Error> {
        if self.halted {
            return Ok(Status::Halted);
        }

        let c = self.grid.get(self.pointer);
        trace!(
            row = self.pointer.row,
            col = self.pointer.col,
            glyph = %c.escape_debug(),
            layer = self.layer,
            "dispatch"
        );
        self.steps += 1;

        match Glyph::decode(c) {
            Glyph::Halt => {
                self.halted = true;
                return Ok(Status::Halted);
            }
            Glyph::Push(literal) => {
                let value = match literal {
                    Literal::Fixed(table) => select(table, self.layer),
                    Literal::Input => self.input.get(self.layer),
                };
                if let Err(e) = self.accumulator.push_value(value) {
                    debug!(row = self.pointer.row, col = self.pointer.col, "{e}");
                    self.accumulator.amorphous_clear();
                }
            }
            Glyph::Stage(table) => self.accumulator.push_operator(select(table, self.layer)),
            Glyph::Move(table) => self.heading = select(&MOVEMENT[table], self.layer),
            Glyph::TurnClockwise => self.heading = self.heading.clockwise(),
            Glyph::TurnCounterclockwise => self.heading = self.heading.counterclockwise(),
            Glyph::GatedClockwise => {
                if self.accumulator.is_true() {
                    self.heading = self.heading.clockwise();
                }
            }
            Glyph::GatedCounterclockwise => {
                if self.accumulator.is_true() {
                    self.heading = self.heading.counterclockwise();
                }
            }
            Glyph::AdvanceLayer => {
                self.layer = (self.layer + 1) % self.reset_period;
                self.conveyor.advance();
                debug!(layer = self.layer, "layer advanced");
            }
            Glyph::Jump => self.pointer = self.advance(self.pointer),
            Glyph::Drop(bin) => {
                let action = self.conveyor.operate(bin, self.pointer, &mut self.accumulator);
                if action != DropAction::Idle {
                    debug!(?action, bin, row = self.pointer.row, col = self.pointer.col, "conveyor");
                }
            }
            Glyph::Clear => self.accumulator.clear(),
            Glyph::Print => {
                sink.emit(&self.accumulator.render().to_string())?;
                self.accumulator.clear();
            }
            Glyph::Peek => sink.emit(&self.accumulator.render().to_string())?,
            Glyph::Nop => {}
        }

        let was_amorphous = self.accumulator.is_amorphous();
        if was_amorphous || !self.accumulator.evaluate() {
            if !was_amorphous {
                debug!(
                    row = self.pointer.row,
                    col = self.pointer.col,
                    "accumulator became amorphous"
                );
            }
            self.accumulator.amorphous_clear();
        }

        self.pointer = self.advance(self.pointer);
        Ok(Status::Running)
    }

    /// Run until the program halts or the configured step limit is reached.
    pub fn run<S: Sink>(&mut self, sink: &mut S) -> Result<Outcome, Error> {
        let limit = self.step_limit.unwrap_or(usize::MAX);
        while !self.halted {
            if self.steps >= limit {
                return Ok(Outcome::StepLimit { steps: self.steps });
            }
            self.step(sink)?;
        }
        Ok(Outcome::Halted { steps: self.steps })
    }

    fn advance(&self, pos: Position) -> Position {
        self.heading.step(pos, self.grid.rows(), self.grid.cols())
    }
}

/// Parse `source`, run it against `input` and capture everything it prints.
pub fn run_to_string<A: AsRef<str>>(
    source: &str,
    input: &[A],
    config: Config,
) -> Result<(String, Outcome), Error> {
    let grid = Grid::parse(source)?;
    let mut interpreter = Interpreter::new(grid, InputTable::from_args(input), config);
    let mut output = String::new();
    let outcome = interpreter.run(&mut output)?;
    Ok((output, outcome))
}
