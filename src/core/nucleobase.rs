use serde::{Deserialize, Serialize};

/// One of the four DNA letters.
///
/// Each letter carries a distinct power-of-two weight, so the weights of
/// any unordered pair of letters sum to a value no other pair produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Nucleobase {
    A,
    C,
    G,
    T,
}

impl Nucleobase {
    /// All letters, heaviest first. This is also the order letters are
    /// emitted in when decoding a heterozygous pair.
    pub const DESCENDING: [Nucleobase; 4] = [Self::T, Self::G, Self::C, Self::A];

    /// Bit weight of this letter
    #[must_use]
    pub const fn weight(self) -> u32 {
        match self {
            Self::A => 1,
            Self::C => 2,
            Self::G => 4,
            Self::T => 8,
        }
    }

    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::A),
            'C' => Some(Self::C),
            'G' => Some(Self::G),
            'T' => Some(Self::T),
            _ => None,
        }
    }

    #[must_use]
    pub const fn from_weight(weight: u32) -> Option<Self> {
        match weight {
            1 => Some(Self::A),
            2 => Some(Self::C),
            4 => Some(Self::G),
            8 => Some(Self::T),
            _ => None,
        }
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::C => 'C',
            Self::G => 'G',
            Self::T => 'T',
        }
    }
}

impl std::fmt::Display for Nucleobase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Homozygous pair values (AA, CC, GG, TT)
pub const HOMOZYGOUS_PAIRS: [u32; 4] = [2, 4, 8, 16];

/// Heterozygous pair values (CA, GA, GC, TA, TC, TG)
pub const HETEROZYGOUS_PAIRS: [u32; 6] = [3, 5, 6, 9, 10, 12];

/// A genotype packed into the sum of its letter weights.
///
/// Encoding never fails: characters outside `A`/`C`/`G`/`T` contribute
/// nothing, so malformed text yields a value (often 0) that simply has no
/// textual form when decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedPair(pub u32);

impl EncodedPair {
    /// Encode genotype text such as `"AG"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use snp_annotator::core::nucleobase::EncodedPair;
    ///
    /// assert_eq!(EncodedPair::encode("TA"), EncodedPair::encode("AT"));
    /// assert_eq!(EncodedPair::encode("GG").value(), 8);
    /// assert_eq!(EncodedPair::encode("XX").value(), 0);
    /// ```
    #[must_use]
    pub fn encode(text: &str) -> Self {
        let sum = text
            .chars()
            .filter_map(Nucleobase::from_char)
            .fold(0u32, |sum, base| sum.saturating_add(base.weight()));
        Self(sum)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn is_homozygous(self) -> bool {
        HOMOZYGOUS_PAIRS.contains(&self.0)
    }

    #[must_use]
    pub fn is_heterozygous(self) -> bool {
        HETEROZYGOUS_PAIRS.contains(&self.0)
    }

    /// Whether this value is producible from exactly two recognized letters
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.is_homozygous() || self.is_heterozygous()
    }

    /// The letters making up this pair, heaviest first
    #[must_use]
    pub fn bases(self) -> Option<[Nucleobase; 2]> {
        if self.is_homozygous() {
            let base = Nucleobase::from_weight(self.0 / 2)?;
            return Some([base, base]);
        }
        if !self.is_heterozygous() {
            return None;
        }

        let mut contained = Nucleobase::DESCENDING
            .into_iter()
            .filter(|base| self.0 & base.weight() != 0);
        Some([contained.next()?, contained.next()?])
    }

    /// Canonical text of this pair, or `None` when no two-letter genotype
    /// encodes to this value.
    ///
    /// Heterozygous pairs are written heaviest letter first (T, G, C, A),
    /// so `AC` and `CA` both decode to `"CA"`.
    #[must_use]
    pub fn decode(self) -> Option<String> {
        self.bases()
            .map(|[first, second]| [first.letter(), second.letter()].iter().collect())
    }
}

impl From<u32> for EncodedPair {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for EncodedPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.decode() {
            Some(text) => write!(f, "{text}"),
            None => write!(f, "?({})", self.0),
        }
    }
}

/// Encode genotype text into its packed integer form
#[must_use]
pub fn encode(text: &str) -> u32 {
    EncodedPair::encode(text).value()
}

/// Decode a packed integer back into canonical genotype text
#[must_use]
pub fn decode(value: u32) -> Option<String> {
    EncodedPair(value).decode()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LETTERS: [char; 4] = ['A', 'C', 'G', 'T'];

    #[test]
    fn test_encode_known_values() {
        assert_eq!(encode("AA"), 2);
        assert_eq!(encode("TT"), 16);
        assert_eq!(encode("TA"), 9);
        assert_eq!(encode("GG"), 8);
    }

    #[test]
    fn test_encode_is_order_independent() {
        for a in LETTERS {
            for b in LETTERS {
                let forward: String = [a, b].iter().collect();
                let reverse: String = [b, a].iter().collect();
                assert_eq!(encode(&forward), encode(&reverse), "{forward} vs {reverse}");
            }
        }
        assert_eq!(encode("AT"), 9);
    }

    #[test]
    fn test_encode_unrecognized_letters() {
        assert_eq!(encode("XX"), 0);
        assert_eq!(encode(""), 0);
        assert_eq!(encode("--"), 0);
        // lowercase letters are not recognized
        assert_eq!(encode("aa"), 0);
        // partial recognition still sums what it can
        assert_eq!(encode("AX"), 1);
        assert_eq!(encode("ACGT"), 15);
    }

    #[test]
    fn test_decode_known_values() {
        assert_eq!(decode(2).as_deref(), Some("AA"));
        assert_eq!(decode(3).as_deref(), Some("CA"));
        assert_eq!(decode(5).as_deref(), Some("GA"));
        assert_eq!(decode(9).as_deref(), Some("TA"));
        assert_eq!(decode(4).as_deref(), Some("CC"));
        assert_eq!(decode(6).as_deref(), Some("GC"));
        assert_eq!(decode(10).as_deref(), Some("TC"));
        assert_eq!(decode(8).as_deref(), Some("GG"));
        assert_eq!(decode(12).as_deref(), Some("TG"));
        assert_eq!(decode(16).as_deref(), Some("TT"));
    }

    #[test]
    fn test_decode_invalid_values() {
        assert_eq!(decode(40), None);
        assert_eq!(decode(0), None);
        // a single A is not a pair
        assert_eq!(decode(1), None);
        for value in [7, 11, 13, 14, 15] {
            assert_eq!(decode(value), None, "value {value}");
        }
    }

    #[test]
    fn test_every_pair_decodes_to_canonical_form() {
        for a in LETTERS {
            for b in LETTERS {
                let text: String = [a, b].iter().collect();
                let pair = EncodedPair::encode(&text);
                assert!(pair.is_valid(), "{text} encoded to {pair:?}");

                let canonical = pair.decode().unwrap();
                assert_eq!(EncodedPair::encode(&canonical), pair);
                assert_eq!(decode(encode(&canonical)), Some(canonical));
            }
        }
    }

    #[test]
    fn test_zygosity() {
        assert!(EncodedPair::encode("CC").is_homozygous());
        assert!(!EncodedPair::encode("CC").is_heterozygous());
        assert!(EncodedPair::encode("CT").is_heterozygous());
        assert!(!EncodedPair(0).is_valid());
    }

    #[test]
    fn test_bases_heaviest_first() {
        assert_eq!(
            EncodedPair::encode("AG").bases(),
            Some([Nucleobase::G, Nucleobase::A])
        );
        assert_eq!(
            EncodedPair::encode("TT").bases(),
            Some([Nucleobase::T, Nucleobase::T])
        );
        assert_eq!(EncodedPair(7).bases(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(EncodedPair::encode("AC").to_string(), "CA");
        assert_eq!(EncodedPair(40).to_string(), "?(40)");
    }
}
