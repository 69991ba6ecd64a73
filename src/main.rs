//! chainlift CLI entry point
//!
//! Lifts loci from one genome assembly to another through a UCSC chain file.
//! Loci are read one per line in the `chr1(+):123` form, mapped (optionally
//! in parallel), and written in the same form; unmapped loci print as `-`
//! unless dropped.

use anyhow::{Context, Result};
use chainlift::{parse_chain_file, GenomeChain, Locus};
use clap::Parser;
use rayon::prelude::*;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "chainlift")]
#[command(about = "Lift genome coordinates between assemblies via a UCSC chain file")]
#[command(version)]
struct Cli {
    /// Chain file (plain, .gz or .bz2)
    chain: PathBuf,

    /// File of loci to lift, one per line as chr1(+):123 (stdin if omitted)
    input: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Loci given directly on the command line, e.g. -l 'chr1(+):123'
    #[arg(short = 'l', long = "locus")]
    loci: Vec<String>,

    /// Number of worker threads for mapping (default: number of CPUs)
    #[arg(short = 't', long)]
    threads: Option<usize>,

    /// Omit unmapped loci instead of printing '-'
    #[arg(long)]
    drop_unmapped: bool,
}

fn read_loci(cli: &Cli) -> Result<Vec<Locus>> {
    let mut raw: Vec<String> = cli.loci.clone();

    if raw.is_empty() {
        let reader: Box<dyn BufRead> = match &cli.input {
            Some(path) => Box::new(BufReader::new(
                std::fs::File::open(path)
                    .with_context(|| format!("cannot open input file {}", path.display()))?,
            )),
            None => Box::new(BufReader::new(std::io::stdin())),
        };
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if !trimmed.is_empty() && !trimmed.starts_with('#') {
                raw.push(trimmed.to_string());
            }
        }
    }

    raw.iter()
        .map(|s| {
            s.parse::<Locus>()
                .with_context(|| format!("cannot parse locus '{s}'"))
        })
        .collect()
}

fn lift(chain: &GenomeChain, loci: Vec<Locus>) -> Vec<Option<Locus>> {
    loci.par_iter().map(|locus| chain.map(locus)).collect()
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("cannot configure thread pool")?;
    }

    let started = Instant::now();
    let chain = parse_chain_file(&cli.chain)
        .with_context(|| format!("cannot parse chain file {}", cli.chain.display()))?;
    log::info!(
        "loaded {} blocks over {} chromosomes in {:.2?}",
        chain.block_count(),
        chain.chromosome_count(),
        started.elapsed()
    );

    let loci = read_loci(&cli)?;
    let mapped = lift(&chain, loci);

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("cannot create output file {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout().lock()),
    };
    let mut unmapped = 0usize;
    for result in &mapped {
        match result {
            Some(locus) => writeln!(out, "{locus}")?,
            None => {
                unmapped += 1;
                if !cli.drop_unmapped {
                    writeln!(out, "-")?;
                }
            }
        }
    }
    out.flush()?;
    log::info!("mapped {}/{} loci", mapped.len() - unmapped, mapped.len());

    Ok(())
}
