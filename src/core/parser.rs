//! Chain file parsing
//!
//! Parses UCSC chain format files (see
//! <https://genome.ucsc.edu/goldenPath/help/chain.html>) into a
//! [`GenomeChain`].
//!
//! # Chain file format
//!
//! ```text
//! chain score srcChr srcSize srcStrand srcStart srcEnd tgtChr tgtSize tgtStrand tgtStart tgtEnd id
//! size srcGap tgtGap
//! size srcGap tgtGap
//! size
//! ```
//!
//! A file holds one or more chains. Each data line emits one ungapped
//! alignment block of `size` positions and then advances the running source
//! and target positions past the block and its gaps; the final, gapless data
//! line must land exactly on the extents declared in the header. Blank lines
//! and `#` comments are ignored.
//!
//! Parsing is all-or-nothing: the first malformed line or arithmetic
//! mismatch aborts the parse with the 1-based line number.

use crate::core::chain::{GenomeChain, GenomeChainBuilder};
use crate::core::error::{ChainParseError, ChainResult, Side};
use crate::core::model::{ChromosomeName, Locus, LocusRange, Strand};
use log::{debug, trace};
use std::io;
use std::sync::atomic::{AtomicU64, Ordering};

const LOG_EVERY: u64 = 10_000;

/// Running state for the chain currently being consumed: the chromosome and
/// strand context from the header, the positions reached so far, and the
/// declared extents the terminal block must reconcile with.
#[derive(Debug)]
struct ChainContext {
    source_chr: ChromosomeName,
    target_chr: ChromosomeName,
    source_strand: Strand,
    target_strand: Strand,
    source_pos: i64,
    target_pos: i64,
    source_end: i64,
    target_end: i64,
}

/// Stateful parser turning a sequence of chain-file lines into a
/// [`GenomeChain`].
///
/// The grammar is order-dependent (block lines accumulate positions declared
/// by the preceding header), so the input is an ordinary sequential
/// iterator; out-of-order delivery is unrepresentable. The line counter is
/// atomic so the parser can be shared with a progress reporter while a
/// parse runs on another thread.
///
/// ```no_run
/// use chainlift::{GenomeChainParser, Locus};
/// use std::io::BufRead;
///
/// # let loci: Vec<Locus> = Vec::new();
/// let file = std::fs::File::open("hg19ToHg38.chain")?;
/// let parser = GenomeChainParser::new();
/// let chain = parser.parse(std::io::BufReader::new(file).lines())?;
/// let lifted: Vec<Locus> = loci.iter().filter_map(|l| chain.map(l)).collect();
/// # Ok::<(), chainlift::LiftoverError>(())
/// ```
#[derive(Debug, Default)]
pub struct GenomeChainParser {
    line_number: AtomicU64,
}

impl GenomeChainParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of input lines consumed so far, for progress reporting.
    pub fn lines_processed(&self) -> u64 {
        self.line_number.load(Ordering::Relaxed)
    }

    /// Consume `lines` and build the liftover structure.
    ///
    /// Every line counts toward the reported line numbers, including blank
    /// and comment lines, so errors point at the actual file line.
    pub fn parse<I>(&self, lines: I) -> ChainResult<GenomeChain>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        let mut builder = GenomeChainBuilder::new();
        let mut context: Option<ChainContext> = None;

        for line in lines {
            let line_number = self.line_number.fetch_add(1, Ordering::Relaxed) + 1;
            let line = line.map_err(|source| ChainParseError::Io {
                line: line_number,
                source,
            })?;
            if line_number % LOG_EVERY == 0 {
                debug!("Reading line #{}", line_number);
            }

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            if trimmed.split_whitespace().next() == Some("chain") {
                context = Some(parse_header(trimmed, line_number)?);
            } else {
                let current = context.as_mut().ok_or_else(|| {
                    ChainParseError::BlockBeforeHeader {
                        line: line_number,
                        content: trimmed.chars().take(120).collect(),
                    }
                })?;
                parse_block(trimmed, line_number, current, &mut builder)?;
            }
        }

        Ok(builder.build())
    }
}

fn field<'a>(
    parts: &[&'a str],
    idx: usize,
    expected: usize,
    line_number: u64,
    content: &str,
) -> ChainResult<&'a str> {
    parts.get(idx).copied().ok_or_else(|| {
        ChainParseError::malformed(
            line_number,
            format!("expected {} fields, got {}", expected, parts.len()),
            content,
        )
    })
}

fn numeric(value: &str, name: &str, line_number: u64, content: &str) -> ChainResult<i64> {
    match value.parse::<i64>() {
        Ok(n) if n >= 0 => Ok(n),
        _ => Err(ChainParseError::malformed(
            line_number,
            format!("invalid {} '{}', expected a non-negative integer", name, value),
            content,
        )),
    }
}

fn strand(symbol: &str, name: &str, line_number: u64, content: &str) -> ChainResult<Strand> {
    Strand::from_symbol(symbol).ok_or_else(|| {
        ChainParseError::malformed(
            line_number,
            format!("unrecognized {} strand '{}', expected '+' or '-'", name, symbol),
            content,
        )
    })
}

fn chromosome(value: &str, line_number: u64, content: &str) -> ChainResult<ChromosomeName> {
    ChromosomeName::new(value)
        .map_err(|e| ChainParseError::malformed(line_number, e.to_string(), content))
}

/// Parse a `chain` header line and open a fresh [`ChainContext`].
///
/// Score (field 1), chromosome sizes (fields 3 and 8) and the trailing chain
/// id are ignored; the running positions start at the declared alignment
/// starts.
fn parse_header(line: &str, line_number: u64) -> ChainResult<ChainContext> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    let source_chr = chromosome(field(&parts, 2, 12, line_number, line)?, line_number, line)?;
    let source_strand = strand(
        field(&parts, 4, 12, line_number, line)?,
        "source",
        line_number,
        line,
    )?;
    let source_pos = numeric(
        field(&parts, 5, 12, line_number, line)?,
        "source start",
        line_number,
        line,
    )?;
    let source_end = numeric(
        field(&parts, 6, 12, line_number, line)?,
        "source end",
        line_number,
        line,
    )?;
    let target_chr = chromosome(field(&parts, 7, 12, line_number, line)?, line_number, line)?;
    let target_strand = strand(
        field(&parts, 9, 12, line_number, line)?,
        "target",
        line_number,
        line,
    )?;
    let target_pos = numeric(
        field(&parts, 10, 12, line_number, line)?,
        "target start",
        line_number,
        line,
    )?;
    let target_end = numeric(
        field(&parts, 11, 12, line_number, line)?,
        "target end",
        line_number,
        line,
    )?;

    trace!(
        "chain: {}({}):{} -> {}({}):{}",
        source_chr,
        source_strand,
        source_pos,
        target_chr,
        target_strand,
        target_pos
    );

    Ok(ChainContext {
        source_chr,
        target_chr,
        source_strand,
        target_strand,
        source_pos,
        target_pos,
        source_end,
        target_end,
    })
}

/// Parse one block line, emit its alignment block, and advance the running
/// positions. A one-field line terminates the chain and must reconcile with
/// the header's declared extents.
fn parse_block(
    line: &str,
    line_number: u64,
    context: &mut ChainContext,
    builder: &mut GenomeChainBuilder,
) -> ChainResult<()> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 1 && parts.len() != 3 {
        return Err(ChainParseError::malformed(
            line_number,
            format!("expected 1 or 3 fields, got {}", parts.len()),
            line,
        ));
    }

    let size = numeric(parts[0], "block size", line_number, line)?;
    let (source_gap, target_gap) = if parts.len() == 3 {
        (
            numeric(parts[1], "source gap", line_number, line)?,
            numeric(parts[2], "target gap", line_number, line)?,
        )
    } else {
        (0, 0)
    };

    let source = block_range(
        &context.source_chr,
        context.source_pos,
        size,
        context.source_strand,
        line_number,
        line,
    )?;
    let target = block_range(
        &context.target_chr,
        context.target_pos,
        size,
        context.target_strand,
        line_number,
        line,
    )?;
    trace!("{} -> {}", source, target);
    builder.add(source, target);

    context.source_pos += size + source_gap;
    context.target_pos += size + target_gap;

    if parts.len() == 1 {
        if context.source_pos != context.source_end {
            return Err(ChainParseError::EndMismatch {
                line: line_number,
                side: Side::Source,
                expected: context.source_end,
                actual: context.source_pos,
            });
        }
        if context.target_pos != context.target_end {
            return Err(ChainParseError::EndMismatch {
                line: line_number,
                side: Side::Target,
                expected: context.target_end,
                actual: context.target_pos,
            });
        }
    }

    Ok(())
}

fn block_range(
    chr: &ChromosomeName,
    start: i64,
    size: i64,
    strand: Strand,
    line_number: u64,
    line: &str,
) -> ChainResult<LocusRange> {
    LocusRange::new(
        Locus::new(chr.clone(), start, strand),
        Locus::new(chr.clone(), start + size, strand),
    )
    .map_err(|e| ChainParseError::malformed(line_number, e.to_string(), line))
}
