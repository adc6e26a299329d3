//! Splitting byte strings into fixed-width words.
//!
//! Words keep the raw byte order of the input. The last word is right-padded
//! when the input length is not a multiple of the width; no other word is ever
//! padded. Interpreting a word as an integer is left to the caller.

use crate::abi::{PAD_BYTE, WORD_SIZE};
use crate::{Error, Result};

/// One push-sized slice of the input, in memory order.
pub type Word = [u8; WORD_SIZE];

/// Split `bytes` into `width`-byte groups, right-padding the last with `pad`.
///
/// Returns `ceil(bytes.len() / width)` groups; empty input gives none.
pub fn chunk(bytes: &[u8], width: usize, pad: u8) -> Result<Vec<Vec<u8>>> {
    if width == 0 {
        return Err(Error::InvalidWidth(width));
    }

    Ok(bytes
        .chunks(width)
        .map(|group| {
            let mut padded = Vec::with_capacity(width);
            padded.extend_from_slice(group);
            padded.resize(width, pad);
            padded
        })
        .collect())
}

/// Split `bytes` into push-sized words, zero-padding the last one.
#[must_use]
pub fn words(bytes: &[u8]) -> Vec<Word> {
    bytes
        .chunks(WORD_SIZE)
        .map(|group| {
            let mut word = [PAD_BYTE; WORD_SIZE];
            word[..group.len()].copy_from_slice(group);
            word
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_has_no_words() {
        assert!(words(b"").is_empty());
        assert_eq!(chunk(b"", 4, 0).unwrap(), Vec::<Vec<u8>>::new());
    }

    #[test]
    fn test_exact_multiple_is_not_padded() {
        assert_eq!(words(b"ABCDEFGH"), vec![*b"ABCD", *b"EFGH"]);
    }

    #[test]
    fn test_partial_tail_is_right_padded() {
        assert_eq!(words(b"AB\0"), vec![*b"AB\0\0"]);
        assert_eq!(words(b"ABCDE"), vec![*b"ABCD", *b"E\0\0\0"]);
    }

    #[test]
    fn test_single_null_is_one_word() {
        assert_eq!(words(b"\0"), vec![[0, 0, 0, 0]]);
    }

    #[test]
    fn test_chunk_generic_width_and_pad() {
        let groups = chunk(b"abcdefg", 3, b'.').unwrap();
        assert_eq!(groups, vec![b"abc".to_vec(), b"def".to_vec(), b"g..".to_vec()]);
    }

    #[test]
    fn test_chunk_width_one_is_identity() {
        let groups = chunk(b"xyz", 1, 0).unwrap();
        assert_eq!(groups, vec![vec![b'x'], vec![b'y'], vec![b'z']]);
    }

    #[test]
    fn test_chunk_rejects_zero_width() {
        assert_eq!(chunk(b"abc", 0, 0), Err(Error::InvalidWidth(0)));
        assert_eq!(chunk(b"", 0, 0), Err(Error::InvalidWidth(0)));
    }

    #[test]
    fn test_chunk_agrees_with_words() {
        let input = b"The quick brown fox";
        let generic = chunk(input, WORD_SIZE, PAD_BYTE).unwrap();
        let fixed: Vec<Vec<u8>> = words(input).iter().map(|w| w.to_vec()).collect();
        assert_eq!(generic, fixed);
    }
}
