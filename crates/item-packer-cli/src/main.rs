use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use item_packer_core::config::{DEFAULT_CAPACITY, DEFAULT_SEPARATOR, OutputFormat};
use item_packer_core::{
    PackerConfig, Packing, pack_all, pack_batch, parse_sequence, to_json_error, to_json_report,
};
use serde::Deserialize;
use tracing::{debug, error, info};

#[derive(Parser, Debug)]
#[command(
    name = "item-packer",
    about = "Pack digit sequences into fixed-capacity bins",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Show a progress bar when reading sequences from a file (disable with --progress false or --quiet)
    #[arg(long, default_value_t = true, action=ArgAction::Set, global=true, help_heading = "Logging/UX")]
    progress: bool,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, global=true, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging/UX"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pack each sequence and print one line of bins per sequence
    Pack(PackArgs),
    /// Simple timing bench (packs random sequences, prints time + occupancy)
    Bench(BenchArgs),
}

#[derive(Parser, Debug, Clone)]
struct PackArgs {
    // Input/Output
    /// Digit sequences to pack, e.g. 163841689
    #[arg(help_heading = "Input/Output")]
    sequences: Vec<String>,
    /// Read additional sequences from this file, one per line (`-` for stdin)
    #[arg(short, long, help_heading = "Input/Output")]
    input: Option<PathBuf>,
    /// YAML config file path (overrides packing options)
    #[arg(long, help_heading = "Input/Output")]
    config: Option<PathBuf>,

    // Packing
    /// Bin capacity
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY, help_heading = "Packing")]
    capacity: u32,

    // Export
    /// Separator between bins in text output
    #[arg(short, long, default_value = DEFAULT_SEPARATOR, help_heading = "Export")]
    separator: String,
    /// Output format: text | json
    #[arg(long, value_parser = ["text", "json"], default_value = "text", help_heading = "Export")]
    format: String,
    /// Log packing stats for every sequence
    #[arg(long, default_value_t = false, help_heading = "Export")]
    stats: bool,
    /// Print the merged configuration (after CLI/YAML) and exit
    #[arg(long, default_value_t = false, help_heading = "Export")]
    print_config: bool,
    /// Output format for --print-config: json|yaml
    #[arg(long, default_value = "json", value_parser = ["json", "yaml"], help_heading = "Export")]
    print_config_format: String,
}

#[derive(Parser, Debug, Clone)]
struct BenchArgs {
    /// Number of random sequences
    #[arg(long, default_value_t = 10_000)]
    count: usize,
    /// Items per sequence
    #[arg(long, default_value_t = 24)]
    length: usize,
    /// Bin capacity
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    capacity: u32,
    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Pack(args) => run_pack(args, cli.progress && !cli.quiet),
        Commands::Bench(b) => run_bench(b),
    }
}

fn run_pack(cli: &PackArgs, show_progress: bool) -> anyhow::Result<()> {
    let base = base_config(cli)?;

    // Load config file if provided; its fields override the command line
    let cfg = if let Some(path) = &cli.config {
        let file = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let y: YamlConfig = serde_yaml::from_str(&file)
            .with_context(|| format!("parse config {}", path.display()))?;
        y.into_packer_config(base)
    } else {
        base
    };

    if cli.print_config {
        match cli.print_config_format.as_str() {
            "yaml" => println!("{}", serde_yaml::to_string(&cfg)?),
            _ => println!("{}", serde_json::to_string_pretty(&cfg)?),
        }
        return Ok(());
    }

    cfg.validate().context("invalid packing configuration")?;

    let from_file = cli.input.is_some();
    let inputs = gather_sequences(&cli.sequences, cli.input.as_deref())?;
    info!(count = inputs.len(), "loaded input sequences");

    let bar = if show_progress && from_file {
        use indicatif::{ProgressBar, ProgressStyle};
        let b = ProgressBar::new(inputs.len() as u64);
        b.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} packing {pos}/{len} [{elapsed_precise}] {wide_msg}",
            )?,
        );
        Some(b)
    } else {
        None
    };
    let emit = |line: String| match &bar {
        Some(b) => b.suspend(|| println!("{}", line)),
        None => println!("{}", line),
    };

    let mut failed = 0usize;
    for input in &inputs {
        if let Some(b) = &bar {
            b.set_message(input.clone());
        }
        match pack_input(input, &cfg) {
            Ok(packing) => {
                if cli.stats {
                    let s = packing.stats();
                    info!(
                        input = %input,
                        bins = s.num_bins,
                        items = s.num_items,
                        used = s.used_capacity,
                        offered = s.total_capacity,
                        occupancy = %format!("{:.2}%", s.occupancy * 100.0),
                        "stats"
                    );
                }
                match cfg.format {
                    OutputFormat::Text => emit(packing.render(&cfg.separator)),
                    OutputFormat::Json => emit(serde_json::to_string(&to_json_report(
                        input,
                        &packing,
                        &cfg.separator,
                    ))?),
                }
            }
            Err(e) => {
                failed += 1;
                error!(input = %input, error = %e, "skip sequence");
                if cfg.format == OutputFormat::Json {
                    emit(serde_json::to_string(&to_json_error(input, &e))?);
                }
            }
        }
        if let Some(b) = &bar {
            b.inc(1);
        }
    }
    if let Some(b) = &bar {
        b.finish_and_clear();
    }

    if failed > 0 {
        anyhow::bail!("{} of {} sequences could not be packed", failed, inputs.len());
    }
    Ok(())
}

fn pack_input(input: &str, cfg: &PackerConfig) -> item_packer_core::Result<Packing> {
    let items = parse_sequence(input)?;
    pack_all(items, cfg)
}

/// Positional sequences first, then file lines. Falls back to stdin when both are empty.
fn gather_sequences(positional: &[String], input: Option<&Path>) -> anyhow::Result<Vec<String>> {
    let mut out: Vec<String> = positional.to_vec();
    match input {
        Some(p) if p == Path::new("-") => out.extend(read_lines(io::stdin().lock())?),
        Some(p) => {
            let file = fs::File::open(p).with_context(|| format!("open input {}", p.display()))?;
            out.extend(read_lines(BufReader::new(file))?);
        }
        None if out.is_empty() => {
            debug!("no sequences given, reading stdin");
            out.extend(read_lines(io::stdin().lock())?);
        }
        None => {}
    }
    Ok(out)
}

fn read_lines<R: BufRead>(reader: R) -> anyhow::Result<Vec<String>> {
    let mut out = Vec::new();
    for line in reader.lines() {
        let line = line.context("read input line")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            out.push(trimmed.to_string());
        }
    }
    Ok(out)
}

fn run_bench(b: &BenchArgs) -> anyhow::Result<()> {
    use rand::{Rng, SeedableRng};
    let cfg = PackerConfig::builder().capacity(b.capacity).build();
    cfg.validate()?;
    let max_size = b.capacity.min(9);
    let mut rng = rand::rngs::StdRng::seed_from_u64(b.seed);
    let batches: Vec<Vec<u32>> = (0..b.count)
        .map(|_| (0..b.length).map(|_| rng.gen_range(1..=max_size)).collect())
        .collect();

    let t0 = Instant::now();
    let results = pack_batch(batches, &cfg);
    let dt = t0.elapsed();

    let (mut bins, mut used, mut offered) = (0usize, 0u64, 0u64);
    for r in results {
        let s = r?.stats();
        bins += s.num_bins;
        used += s.used_capacity;
        offered += s.total_capacity;
    }
    let occ = if offered > 0 {
        used as f64 / offered as f64
    } else {
        0.0
    };
    println!(
        "sequences={} items={} bins={} time_ms={:.3} occupancy={:.2}%",
        b.count,
        b.count * b.length,
        bins,
        dt.as_secs_f64() * 1000.0,
        occ * 100.0
    );
    Ok(())
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

#[derive(Debug, Deserialize)]
struct YamlConfig {
    capacity: Option<u32>,
    separator: Option<String>,
    format: Option<String>,
}

impl YamlConfig {
    fn into_packer_config(self, mut cfg: PackerConfig) -> PackerConfig {
        if let Some(v) = self.capacity {
            cfg.capacity = v;
        }
        if let Some(v) = self.separator {
            cfg.separator = v;
        }
        if let Some(v) = self.format {
            cfg.format = v.parse().unwrap_or(cfg.format);
        }
        cfg
    }
}

/// Packing options taken from the command line alone.
fn base_config(cli: &PackArgs) -> anyhow::Result<PackerConfig> {
    let format = cli
        .format
        .parse::<OutputFormat>()
        .map_err(|_| anyhow::anyhow!("unknown output format: {}", cli.format))?;
    Ok(PackerConfig {
        capacity: cli.capacity,
        separator: cli.separator.clone(),
        format,
    })
}
