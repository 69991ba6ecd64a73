//! Genomic coordinate value types
//!
//! Immutable primitives shared by the parser and the liftover structure:
//! chromosome names, strands, single positions (`Locus`) and half-open
//! position ranges (`LocusRange`). Positions are always 0-based.

use crate::core::error::ModelError;
use std::fmt;
use std::str::FromStr;

/// A validated chromosome name, e.g. "chr1", "chrX", "chrM".
///
/// Equality, ordering and hashing are plain string semantics. Scaffold and
/// patch names ("chr1_gl000191_random") are accepted; only empty names and
/// names containing whitespace are rejected.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChromosomeName(String);

impl ChromosomeName {
    pub fn new(name: impl Into<String>) -> Result<Self, ModelError> {
        let name = name.into();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(ModelError::InvalidChromosomeName(name));
        }
        Ok(ChromosomeName(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChromosomeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ChromosomeName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChromosomeName::new(s)
    }
}

/// A strand of a chromosome: plus or minus.
///
/// The chain format always specifies a strand, so there is no "unknown"
/// variant. `Plus` orders before `Minus`, which gives [`Locus`] a total
/// order for tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strand {
    Plus,
    Minus,
}

impl Strand {
    /// Parse "+" or "-"; anything else is `None`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Strand::Plus),
            "-" => Some(Strand::Minus),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Strand::Plus => "+",
            Strand::Minus => "-",
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single position on a reference genome.
///
/// The position is 0-based and signed; negative values are permitted so that
/// arithmetic on loci never wraps. Ordering is lexicographic by
/// (chromosome, position, strand).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Locus {
    chromosome: ChromosomeName,
    position: i64,
    strand: Strand,
}

impl Locus {
    pub fn new(chromosome: ChromosomeName, position: i64, strand: Strand) -> Self {
        Locus {
            chromosome,
            position,
            strand,
        }
    }

    pub fn chromosome(&self) -> &ChromosomeName {
        &self.chromosome
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    pub fn strand(&self) -> Strand {
        self.strand
    }

    /// Two loci are compatible iff they share a chromosome and strand.
    pub fn is_compatible_with(&self, other: &Locus) -> bool {
        self.chromosome == other.chromosome && self.strand == other.strand
    }
}

impl fmt::Display for Locus {
    /// Formats as `chr1(+):123`; [`Locus::from_str`] round-trips this.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}):{}", self.chromosome, self.strand, self.position)
    }
}

impl FromStr for Locus {
    type Err = ModelError;

    /// Parses the `chr1(+):123` display form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidLocus(s.to_string());
        let open = s.find('(').ok_or_else(invalid)?;
        let rest = &s[open + 1..];
        let close = rest.find(')').ok_or_else(invalid)?;
        let chromosome = ChromosomeName::new(&s[..open]).map_err(|_| invalid())?;
        let strand = Strand::from_symbol(&rest[..close]).ok_or_else(invalid)?;
        let position = rest[close + 1..]
            .strip_prefix(':')
            .and_then(|p| p.parse::<i64>().ok())
            .ok_or_else(invalid)?;
        Ok(Locus::new(chromosome, position, strand))
    }
}

/// A half-open interval `[start, end)` of positions on one chromosome and
/// strand.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocusRange {
    start: Locus,
    end: Locus,
}

impl LocusRange {
    /// Both loci must share a chromosome and strand, and `start` must not
    /// come after `end`.
    pub fn new(start: Locus, end: Locus) -> Result<Self, ModelError> {
        if !start.is_compatible_with(&end) {
            return Err(ModelError::IncompatibleLoci {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        if start.position > end.position {
            return Err(ModelError::InvertedRange {
                start: start.position,
                end: end.position,
            });
        }
        Ok(LocusRange { start, end })
    }

    pub fn start(&self) -> &Locus {
        &self.start
    }

    pub fn end(&self) -> &Locus {
        &self.end
    }

    pub fn chromosome(&self) -> &ChromosomeName {
        self.start.chromosome()
    }

    pub fn strand(&self) -> Strand {
        self.start.strand()
    }

    /// Number of positions covered.
    pub fn length(&self) -> i64 {
        self.end.position - self.start.position
    }

    /// Half-open containment; a locus on another chromosome or strand is
    /// never contained.
    pub fn contains(&self, locus: &Locus) -> bool {
        locus.is_compatible_with(&self.start)
            && self.start.position <= locus.position
            && locus.position < self.end.position
    }
}

impl fmt::Display for LocusRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}):{}-{}",
            self.chromosome(),
            self.strand(),
            self.start.position,
            self.end.position
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chr(name: &str) -> ChromosomeName {
        ChromosomeName::new(name).unwrap()
    }

    #[test]
    fn test_chromosome_name_validation() {
        assert!(ChromosomeName::new("chr1").is_ok());
        assert!(ChromosomeName::new("chr1_gl000191_random").is_ok());
        assert!(ChromosomeName::new("").is_err());
        assert!(ChromosomeName::new("chr 1").is_err());
        assert!(ChromosomeName::new("chr1\t").is_err());
    }

    #[test]
    fn test_strand_symbols() {
        assert_eq!(Strand::from_symbol("+"), Some(Strand::Plus));
        assert_eq!(Strand::from_symbol("-"), Some(Strand::Minus));
        assert_eq!(Strand::from_symbol("?"), None);
        assert_eq!(Strand::from_symbol(""), None);
        assert_eq!(Strand::Plus.symbol(), "+");
        assert_eq!(Strand::Minus.symbol(), "-");
    }

    #[test]
    fn test_strand_ordering() {
        assert!(Strand::Plus < Strand::Minus);
    }

    #[test]
    fn test_locus_ordering() {
        let a = Locus::new(chr("chr1"), 100, Strand::Plus);
        let b = Locus::new(chr("chr1"), 200, Strand::Plus);
        let c = Locus::new(chr("chr2"), 50, Strand::Plus);
        let d = Locus::new(chr("chr1"), 100, Strand::Minus);
        assert!(a < b);
        assert!(b < c); // chromosome compares first
        assert!(a < d); // strand breaks the tie
    }

    #[test]
    fn test_locus_compatibility() {
        let a = Locus::new(chr("chr1"), 100, Strand::Plus);
        let b = Locus::new(chr("chr1"), 900, Strand::Plus);
        let c = Locus::new(chr("chr1"), 100, Strand::Minus);
        let d = Locus::new(chr("chr2"), 100, Strand::Plus);
        assert!(a.is_compatible_with(&b));
        assert!(!a.is_compatible_with(&c));
        assert!(!a.is_compatible_with(&d));
    }

    #[test]
    fn test_locus_display_round_trip() {
        let locus = Locus::new(chr("chr1"), 123, Strand::Plus);
        assert_eq!(locus.to_string(), "chr1(+):123");
        assert_eq!("chr1(+):123".parse::<Locus>().unwrap(), locus);

        let negative = Locus::new(chr("chrM"), -5, Strand::Minus);
        assert_eq!(negative.to_string(), "chrM(-):-5");
        assert_eq!("chrM(-):-5".parse::<Locus>().unwrap(), negative);
    }

    #[test]
    fn test_locus_parse_errors() {
        assert!("chr1:123".parse::<Locus>().is_err());
        assert!("chr1(?):123".parse::<Locus>().is_err());
        assert!("chr1(+):abc".parse::<Locus>().is_err());
        assert!("(+):123".parse::<Locus>().is_err());
        assert!("chr1(+)123".parse::<Locus>().is_err());
    }

    #[test]
    fn test_range_invariants() {
        let start = Locus::new(chr("chr1"), 10, Strand::Plus);
        let end = Locus::new(chr("chr1"), 20, Strand::Plus);
        let range = LocusRange::new(start.clone(), end.clone()).unwrap();
        assert_eq!(range.length(), 10);

        // inverted
        assert!(LocusRange::new(end.clone(), start.clone()).is_err());

        // mismatched chromosome
        let other = Locus::new(chr("chr2"), 20, Strand::Plus);
        assert!(LocusRange::new(start.clone(), other).is_err());

        // mismatched strand
        let flipped = Locus::new(chr("chr1"), 20, Strand::Minus);
        assert!(LocusRange::new(start, flipped).is_err());
    }

    #[test]
    fn test_range_empty_allowed() {
        let at = Locus::new(chr("chr1"), 10, Strand::Plus);
        let range = LocusRange::new(at.clone(), at.clone()).unwrap();
        assert_eq!(range.length(), 0);
        assert!(!range.contains(&at));
    }

    #[test]
    fn test_range_half_open_containment() {
        let start = Locus::new(chr("chr1"), 10, Strand::Plus);
        let end = Locus::new(chr("chr1"), 20, Strand::Plus);
        let range = LocusRange::new(start, end).unwrap();

        assert!(range.contains(&Locus::new(chr("chr1"), 10, Strand::Plus)));
        assert!(range.contains(&Locus::new(chr("chr1"), 19, Strand::Plus)));
        assert!(!range.contains(&Locus::new(chr("chr1"), 20, Strand::Plus)));
        assert!(!range.contains(&Locus::new(chr("chr1"), 9, Strand::Plus)));
        assert!(!range.contains(&Locus::new(chr("chr1"), 15, Strand::Minus)));
        assert!(!range.contains(&Locus::new(chr("chr2"), 15, Strand::Plus)));
    }

    #[test]
    fn test_range_display() {
        let start = Locus::new(chr("chr1"), 10, Strand::Plus);
        let end = Locus::new(chr("chr1"), 20, Strand::Plus);
        let range = LocusRange::new(start, end).unwrap();
        assert_eq!(range.to_string(), "chr1(+):10-20");
    }
}
