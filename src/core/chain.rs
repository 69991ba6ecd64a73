//! Genome chain: the liftover lookup structure
//!
//! A [`GenomeChain`] owns the alignment blocks accumulated from a chain file,
//! indexed per source chromosome and strand and sorted by source start so a
//! position lookup is one binary search. The structure is immutable after
//! [`GenomeChainBuilder::build`], so any number of threads may call
//! [`GenomeChain::map`] concurrently without coordination.

use crate::core::model::{ChromosomeName, Locus, LocusRange, Strand};
use std::collections::HashMap;

/// One ungapped aligned interval pair: coordinates in `[source.start,
/// source.end)` map to `[target.start, target.end)` by constant offset.
/// Source and target always have equal lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AlignmentBlock {
    source: LocusRange,
    target: LocusRange,
}

impl AlignmentBlock {
    fn source(&self) -> &LocusRange {
        &self.source
    }

    fn target(&self) -> &LocusRange {
        &self.target
    }
}

/// Blocks for one source chromosome, split by source strand and sorted by
/// source start position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct StrandedBlocks {
    plus: Vec<AlignmentBlock>,
    minus: Vec<AlignmentBlock>,
}

impl StrandedBlocks {
    fn of(&self, strand: Strand) -> &[AlignmentBlock] {
        match strand {
            Strand::Plus => &self.plus,
            Strand::Minus => &self.minus,
        }
    }

    fn of_mut(&mut self, strand: Strand) -> &mut Vec<AlignmentBlock> {
        match strand {
            Strand::Plus => &mut self.plus,
            Strand::Minus => &mut self.minus,
        }
    }
}

/// Accumulates alignment blocks during a parse pass.
///
/// The builder is single-producer and not thread-safe; `build` consumes it,
/// so the resulting [`GenomeChain`] can never alias still-mutable storage.
#[derive(Debug, Default)]
pub struct GenomeChainBuilder {
    index: HashMap<ChromosomeName, StrandedBlocks>,
}

impl GenomeChainBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one block. The ranges carry their own invariants (same
    /// chromosome and strand per side, start <= end); equal source/target
    /// lengths are the parser's responsibility.
    pub fn add(&mut self, source: LocusRange, target: LocusRange) {
        debug_assert_eq!(source.length(), target.length());
        self.index
            .entry(source.chromosome().clone())
            .or_default()
            .of_mut(source.strand())
            .push(AlignmentBlock { source, target });
    }

    /// Finalize into an immutable [`GenomeChain`].
    ///
    /// Sorts each (chromosome, strand) group by source start. The parser
    /// already emits blocks in order; the sort keeps the contract honest for
    /// any other producer.
    pub fn build(mut self) -> GenomeChain {
        let mut block_count = 0;
        for group in self.index.values_mut() {
            group.plus.sort_by_key(|b| b.source().start().position());
            group.minus.sort_by_key(|b| b.source().start().position());
            block_count += group.plus.len() + group.minus.len();
        }
        GenomeChain {
            index: self.index,
            block_count,
        }
    }
}

/// An immutable coordinate mapping between two genome assemblies.
///
/// Built once by [`GenomeChainBuilder`], then queried any number of times;
/// it holds no interior mutability, so it is `Send + Sync` and safe to share
/// across threads for concurrent lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenomeChain {
    index: HashMap<ChromosomeName, StrandedBlocks>,
    block_count: usize,
}

impl GenomeChain {
    pub fn builder() -> GenomeChainBuilder {
        GenomeChainBuilder::new()
    }

    /// Map a locus to the other assembly.
    ///
    /// Returns `None` when the chromosome/strand combination never appears
    /// in the chain or the position falls in a gap; neither is an error.
    /// A position maps iff some block's half-open source interval contains
    /// it, in which case the result is the block's target start plus the
    /// offset into the block, carrying the target side's chromosome and
    /// strand verbatim.
    pub fn map(&self, locus: &Locus) -> Option<Locus> {
        let blocks = self.index.get(locus.chromosome())?.of(locus.strand());
        let position = locus.position();
        // First block whose source end is past the position; it contains
        // the position iff its source start is at or before it.
        let candidate = blocks.partition_point(|b| b.source().end().position() <= position);
        let block = blocks.get(candidate)?;
        if position < block.source().start().position() {
            return None;
        }
        let delta = position - block.source().start().position();
        let target = block.target();
        Some(Locus::new(
            target.chromosome().clone(),
            target.start().position() + delta,
            target.strand(),
        ))
    }

    /// Total number of alignment blocks.
    pub fn block_count(&self) -> usize {
        self.block_count
    }

    /// Number of distinct source chromosomes.
    pub fn chromosome_count(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.block_count == 0
    }
}
