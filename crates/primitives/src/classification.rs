//! Size and book-to-market classification of a universe.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::Symbol;

/// Size bucket relative to the cross-sectional mean market cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum SizeBucket {
    /// Market cap strictly above the mean.
    #[display("big")]
    Big,
    /// Market cap at or below the mean.
    #[display("small")]
    Small,
}

/// Book-to-market bucket relative to the cross-sectional mean ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum ValueBucket {
    /// Ratio strictly above the mean.
    #[display("high")]
    High,
    /// Ratio at or below the mean.
    #[display("low")]
    Low,
}

/// Two partitions of the same universe: {Big, Small} and {High, Low}.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Securities with market cap above the mean.
    pub big: Vec<Symbol>,
    /// Securities with market cap at or below the mean.
    pub small: Vec<Symbol>,
    /// Securities with book-to-market above the mean.
    pub high: Vec<Symbol>,
    /// Securities with book-to-market at or below the mean.
    pub low: Vec<Symbol>,
    /// Mean market cap used as the size breakpoint (`None` for an empty universe).
    pub size_threshold: Option<f64>,
    /// Mean book-to-market used as the value breakpoint (`None` for an empty universe).
    pub btm_threshold: Option<f64>,
}

impl Classification {
    /// Number of classified securities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.big.len() + self.small.len()
    }

    /// Check if nothing was classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Members of a size bucket.
    #[must_use]
    pub fn size_members(&self, bucket: SizeBucket) -> &[Symbol] {
        match bucket {
            SizeBucket::Big => &self.big,
            SizeBucket::Small => &self.small,
        }
    }

    /// Members of a value bucket.
    #[must_use]
    pub fn value_members(&self, bucket: ValueBucket) -> &[Symbol] {
        match bucket {
            ValueBucket::High => &self.high,
            ValueBucket::Low => &self.low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_lookup() {
        let c = Classification {
            big: vec!["A".into()],
            small: vec!["B".into(), "C".into()],
            high: vec!["A".into()],
            low: vec!["B".into(), "C".into()],
            size_threshold: Some(53.3),
            btm_threshold: Some(0.1),
        };

        assert_eq!(c.len(), 3);
        assert_eq!(c.size_members(SizeBucket::Big), &[Symbol::new("A")]);
        assert_eq!(c.size_members(SizeBucket::Small).len(), 2);
        assert_eq!(c.value_members(ValueBucket::Low), &[Symbol::new("B"), Symbol::new("C")]);
    }

    #[test]
    fn bucket_display() {
        assert_eq!(SizeBucket::Big.to_string(), "big");
        assert_eq!(ValueBucket::Low.to_string(), "low");
    }
}
