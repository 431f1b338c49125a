//! Fixed-order pair grouping
//!
//! Lots are compared side by side in pairs. Grouping is positional:
//! `(items[0], items[1])`, `(items[2], items[3])`, and so on, so callers
//! control which lots end up together by ordering the input.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PairingError {
    #[error("Not enough items to form {needed} pairs: have {available}")]
    NotEnoughItems { needed: usize, available: usize },
}

/// Group `items` into `num_pairs` consecutive pairs.
///
/// Items beyond `2 * num_pairs` are ignored. Fails when the input is too
/// short to form the requested number of pairs.
pub fn split_into_pairs<T: Clone>(
    items: &[T],
    num_pairs: usize,
) -> Result<Vec<(T, T)>, PairingError> {
    if items.len() < num_pairs * 2 {
        return Err(PairingError::NotEnoughItems {
            needed: num_pairs,
            available: items.len(),
        });
    }

    Ok((0..num_pairs)
        .map(|i| (items[2 * i].clone(), items[2 * i + 1].clone()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_are_positional() {
        let pairs = split_into_pairs(&[935, 922, 924, 921], 2).unwrap();
        assert_eq!(pairs, vec![(935, 922), (924, 921)]);
    }

    #[test]
    fn test_extra_items_are_ignored() {
        let pairs = split_into_pairs(&['a', 'b', 'c', 'd', 'e'], 2).unwrap();
        assert_eq!(pairs, vec![('a', 'b'), ('c', 'd')]);
    }

    #[test]
    fn test_too_few_items_fails() {
        let err = split_into_pairs(&[1, 2, 3], 2).unwrap_err();
        assert_eq!(
            err,
            PairingError::NotEnoughItems {
                needed: 2,
                available: 3
            }
        );
    }

    #[test]
    fn test_zero_pairs_is_empty() {
        let pairs: Vec<(i32, i32)> = split_into_pairs(&[], 0).unwrap();
        assert!(pairs.is_empty());
    }
}
