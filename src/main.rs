use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use timeline::accumulator::ArithmeticMode;
use timeline::grid::Grid;
use timeline::interpreter::{Config, Interpreter, Outcome};
use timeline::layer::InputTable;
use timeline::metrics::{
    amorphous_count, halting_fraction, high_order_entropy, mean_steps, output_bytes,
    unique_output_count,
};
use timeline::sink::WriteSink;
use timeline::survey::{Survey, SurveyConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "timeline", about = "Timeline: a two-dimensional esoteric language")]
struct Cli {
    /// Program file. Read from stdin when omitted.
    file: Option<PathBuf>,

    /// Integer arithmetic semantics (corrected, literal).
    #[arg(long, default_value = "corrected")]
    arithmetic: String,

    /// Stop after this many glyphs.
    #[arg(long)]
    step_limit: Option<usize>,

    /// Log interpreter events to stderr.
    #[arg(long)]
    verbose: bool,

    /// Run random programs instead of a file and print CSV.
    #[arg(long)]
    survey: bool,

    /// Random seed for the survey.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of random programs in the survey.
    #[arg(long, default_value_t = 1 << 10)]
    count: usize,

    /// Grid height of surveyed programs.
    #[arg(long, default_value_t = 8)]
    rows: usize,

    /// Grid width of surveyed programs.
    #[arg(long, default_value_t = 16)]
    cols: usize,

    /// Values for the input literal glyph, joined with spaces.
    #[arg(last = true)]
    input: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let arithmetic = match cli.arithmetic.as_str() {
        "corrected" => ArithmeticMode::Corrected,
        "literal" => ArithmeticMode::Literal,
        other => {
            eprintln!("Unknown arithmetic mode: {other}. Available: corrected, literal");
            std::process::exit(1);
        }
    };

    if cli.survey {
        run_survey(&cli, arithmetic);
    } else {
        run_program(&cli, arithmetic);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "timeline=debug" } else { "timeline=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_source(file: Option<&PathBuf>) -> io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn run_program(cli: &Cli, arithmetic: ArithmeticMode) {
    let source = match read_source(cli.file.as_ref()) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read program: {e}");
            std::process::exit(1);
        }
    };
    let grid = match Grid::parse(&source) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let config = Config {
        arithmetic,
        step_limit: cli.step_limit,
    };
    let input = InputTable::from_args(&cli.input);
    info!(
        rows = grid.rows(),
        cols = grid.cols(),
        period = timeline::layer::reset_period(&input),
        "starting"
    );

    let mut interpreter = Interpreter::new(grid, input, config);
    let mut sink = WriteSink::new(io::stdout().lock());
    match interpreter.run(&mut sink) {
        Ok(Outcome::Halted { steps }) => info!(steps, "halted"),
        Ok(Outcome::StepLimit { steps }) => {
            info!(steps, "step limit reached");
            eprintln!("step limit reached after {steps} steps");
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn run_survey(cli: &Cli, arithmetic: ArithmeticMode) {
    let config = SurveyConfig {
        count: cli.count,
        rows: cli.rows,
        cols: cli.cols,
        step_limit: cli.step_limit.unwrap_or(SurveyConfig::default().step_limit),
        arithmetic,
        ..SurveyConfig::default()
    };
    if config.rows == 0 || config.cols == 0 {
        eprintln!("Survey grids must have positive dimensions");
        std::process::exit(1);
    }
    let survey = Survey::new(config, cli.seed);

    let start = std::time::Instant::now();
    let reports = survey.run();
    let elapsed = start.elapsed();

    println!("index,halted,steps,output_bytes");
    for (i, report) in reports.iter().enumerate() {
        println!("{i},{},{},{}", report.halted, report.steps, report.output_bytes);
    }

    let hoe = high_order_entropy(&output_bytes(&reports));
    eprintln!("Survey results:");
    eprintln!("  Programs:          {}", reports.len());
    eprintln!("  Halted:            {:.3}", halting_fraction(&reports));
    eprintln!("  Mean steps:        {:.1}", mean_steps(&reports));
    eprintln!("  Unique outputs:    {}", unique_output_count(&reports));
    eprintln!("  Amorphous prints:  {}", amorphous_count(&reports));
    eprintln!("  Output HOE:        {hoe:.6}");
    eprintln!("  Elapsed:           {elapsed:.2?}");
}
