use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use testcase_gen::{GeneratorConfig, Instance, emit, generate};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "testcase-gen")]
#[command(about = "Random gate/pin/wire test cases with a balanced perfect pin matching", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Verbose output level (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Random seed (drawn and logged when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Output path ("-" for stdout)
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Side file receiving gate/pin/wire counts
    #[arg(long, default_value = "temp.txt")]
    summary: PathBuf,

    /// Skip writing the summary side file
    #[arg(long, default_value_t = false)]
    no_summary: bool,

    /// Upper bound on the gate count, at least 2 [default: 50]
    #[arg(long)]
    max_gates: Option<u32>,

    /// Upper bound on gate height [default: 10]
    #[arg(long)]
    max_gate_height: Option<u32>,

    /// Upper bound on gate width [default: 10]
    #[arg(long)]
    max_gate_width: Option<u32>,

    /// Upper bound on the per-gate edge pin cap [default: 2]
    #[arg(long)]
    max_pins_per_edge: Option<u32>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse an instance file and check it for structural problems
    Check {
        /// Instance path ("-" for stdin)
        path: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl Args {
    fn config(&self) -> GeneratorConfig {
        let defaults = GeneratorConfig::default();
        GeneratorConfig {
            max_gates: self.max_gates.unwrap_or(defaults.max_gates),
            max_gate_height: self.max_gate_height.unwrap_or(defaults.max_gate_height),
            max_gate_width: self.max_gate_width.unwrap_or(defaults.max_gate_width),
            max_pins_per_edge: self.max_pins_per_edge.unwrap_or(defaults.max_pins_per_edge),
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read instance file: {}", path))
    }
}

fn check(path: &str) -> Result<()> {
    let text = read_input(path)?;
    let instance: Instance = text
        .parse()
        .with_context(|| format!("failed to parse instance: {}", path))?;
    instance
        .validate()
        .with_context(|| format!("invalid instance: {}", path))?;
    let summary = instance.summary();
    println!(
        "ok: {} gates, {} pins, {} wires",
        summary.gates, summary.pins, summary.wires
    );
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let config = args.config();
    config.validate().context("invalid generator bounds")?;

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().r#gen());
    info!(seed, ?config, "generating instance");
    let mut rng = StdRng::seed_from_u64(seed);
    let generated = generate(&mut rng, &config).context("pin matching failed")?;
    let instance = &generated.instance;

    let mut out: Box<dyn Write> = if args.output == "-" {
        Box::new(io::stdout().lock())
    } else {
        let file = fs::File::create(&args.output)
            .with_context(|| format!("failed to create output file: {}", &args.output))?;
        Box::new(BufWriter::new(file))
    };

    // the instance is still emitted when the side file cannot be written
    if !args.no_summary {
        emit::write_summary_or_log(&args.summary, &instance.summary());
    }

    match args.format {
        Format::Text => emit::write_text(&mut out, instance)?,
        Format::Json => {
            writeln!(out, "{}", emit::to_json(instance, &config, Some(seed))?)?;
            out.flush()?;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match &args.command {
        Some(Command::Check { path }) => check(path),
        None => run(&args),
    }
}
