//! # trialign - three-way local sequence alignment
//!
//! ```bash
//! # BLOSUM62, all cores
//! trialign sequences.fasta
//!
//! # uniform DNA-style scoring on four workers
//! trialign --match 2 --mismatch -1 --gap -2 -t 4 sequences.fasta
//!
//! # custom NCBI-format matrix
//! trialign --matrix PAM250.txt sequences.fasta
//! ```
//!
//! The input holds three `>`-headed records; further records are ignored.
//! Output is the three aligned rows followed by the elapsed time.

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;
use std::time::Instant;
use trialign_core::align::{Aligner, AlignerConfig};
use trialign_core::io::read_sequence_triple_from_path;
use trialign_core::score::{ScoreTable, SubstitutionMatrix};

/// Symbols accepted by the uniform scoring scheme.
const SIMPLE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ*";

#[derive(Parser, Debug)]
#[command(name = "trialign")]
#[command(version)]
#[command(about = "Local alignment of three sequences with a 3D Smith-Waterman", long_about = None)]
struct Cli {
    /// FASTA-style file with three sequence records
    input: PathBuf,

    /// Worker threads (default: all cores)
    #[arg(short = 't', long)]
    threads: Option<usize>,

    /// Cells per parallel batch within one diagonal group
    #[arg(long, default_value_t = trialign_core::align::config::DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    /// Refuse grids with more cells than this
    #[arg(long)]
    max_cells: Option<usize>,

    /// NCBI-format substitution matrix (default: BLOSUM62)
    #[arg(long, conflicts_with_all = ["match_score", "mismatch_score", "gap_score"])]
    matrix: Option<PathBuf>,

    /// Uniform scheme: score for identical symbols
    #[arg(long = "match", allow_negative_numbers = true)]
    match_score: Option<i32>,

    /// Uniform scheme: score for differing symbols
    #[arg(long = "mismatch", allow_negative_numbers = true)]
    mismatch_score: Option<i32>,

    /// Uniform scheme: score for a symbol against a gap
    #[arg(long = "gap", allow_negative_numbers = true)]
    gap_score: Option<i32>,

    /// Also print the alignment score
    #[arg(long)]
    score: bool,

    /// Log progress (debug level)
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn score_table(&self) -> Result<SubstitutionMatrix> {
        if let Some(path) = &self.matrix {
            return SubstitutionMatrix::from_path(path)
                .with_context(|| format!("failed to load matrix {}", path.display()));
        }
        if self.match_score.is_some() || self.mismatch_score.is_some() || self.gap_score.is_some() {
            return Ok(SubstitutionMatrix::simple(
                SIMPLE_ALPHABET,
                self.match_score.unwrap_or(2),
                self.mismatch_score.unwrap_or(-1),
                self.gap_score.unwrap_or(-2),
            ));
        }
        Ok(SubstitutionMatrix::blosum62())
    }

    fn config(&self) -> AlignerConfig {
        AlignerConfig {
            threads: self.threads,
            batch_size: self.batch_size,
            max_cells: self.max_cells,
        }
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run<S: ScoreTable>(cli: &Cli, table: &S) -> Result<()> {
    let triple = read_sequence_triple_from_path(&cli.input)
        .with_context(|| format!("could not parse sequence file {}", cli.input.display()))?;
    let [a, b, c] = triple.sequences();

    let started = Instant::now();
    let alignment = Aligner::with_config(table, cli.config())
        .align(a, b, c)
        .context("alignment failed")?;
    let elapsed = started.elapsed();

    for idx in 0..3 {
        println!("{}", alignment.row_str(idx));
    }
    if cli.score {
        println!("score: {:.3}", alignment.score);
    }
    println!("\nCompleted in {:.6} seconds.", elapsed.as_secs_f64());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);
    let table = cli.score_table()?;
    run(&cli, &table)
}
