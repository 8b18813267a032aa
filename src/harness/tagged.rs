use std::cmp::Ordering;

use num_traits::ToPrimitive;

use crate::traits::SortElement;

/// An integer key carrying its original position.
///
/// Equality and ordering look at `key` only, so two `Tagged` values with the
/// same key are "equal" to every sort while `tag` still tells them apart.
/// Used to observe stability.
#[derive(Debug, Clone, Copy)]
pub struct Tagged {
    pub key: i64,
    pub tag: usize,
}

impl Tagged {
    /// Tags each key with its index.
    pub fn from_keys(keys: &[i64]) -> Vec<Tagged> {
        keys.iter()
            .enumerate()
            .map(|(tag, &key)| Tagged { key, tag })
            .collect()
    }
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.key.partial_cmp(&other.key)
    }
}

impl ToPrimitive for Tagged {
    fn to_i64(&self) -> Option<i64> {
        Some(self.key)
    }

    fn to_u64(&self) -> Option<u64> {
        self.key.to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        self.key.to_f64()
    }
}

impl SortElement for Tagged {
    const TYPE_NAME: &'static str = "tagged";
    const INTEGRAL: bool = true;

    fn radix_parts(self) -> Option<(bool, u64)> {
        self.key.radix_parts()
    }
}

/// `true` if every run of equal keys in `sorted` has ascending tags.
pub fn tags_in_order(sorted: &[Tagged]) -> bool {
    sorted
        .windows(2)
        .all(|w| w[0].key != w[1].key || w[0].tag < w[1].tag)
}
