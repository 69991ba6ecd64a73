//! chainlift - genome coordinate liftover via UCSC chain files
//!
//! Parses a chain alignment file into an immutable [`GenomeChain`] that
//! translates positions between genome assemblies. Parsing is strictly
//! sequential and all-or-nothing; the built chain is read-only and can be
//! queried from any number of threads at once.
//!
//! # Example
//!
//! ```
//! use chainlift::{parse_chain_str, ChromosomeName, Locus, Strand};
//!
//! let chain = parse_chain_str(
//!     "chain 0 chr1 1000 + 10 20 chr2 1000 + 100 110\n10\n",
//! )?;
//!
//! let locus = Locus::new(ChromosomeName::new("chr1")?, 15, Strand::Plus);
//! let lifted = chain.map(&locus);
//! assert_eq!(lifted.map(|l| l.to_string()), Some("chr2(+):105".to_string()));
//! # Ok::<(), chainlift::LiftoverError>(())
//! ```

pub mod core;

// Re-export commonly used types
pub use crate::core::{
    parse_chain_file, parse_chain_reader, parse_chain_str, ChainParseError, ChainResult,
    ChromosomeName, CompressionFormat, GenomeChain, GenomeChainBuilder, GenomeChainParser,
    LiftoverError, Locus, LocusRange, ModelError, Result, Strand,
};
