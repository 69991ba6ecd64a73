//! Core liftover functionality
//!
//! Value types, the chain file parser, and the queryable genome chain.

mod chain;
mod error;
pub mod io;
mod model;
mod parser;

pub use chain::{GenomeChain, GenomeChainBuilder};
pub use error::{
    ChainParseError, ChainResult, LiftoverError, ModelError, ModelResult, Result, Side,
};
pub use io::{
    detect_compression, open_chain_file, parse_chain_file, parse_chain_reader, parse_chain_str,
    CompressionFormat,
};
pub use model::{ChromosomeName, Locus, LocusRange, Strand};
pub use parser::GenomeChainParser;
