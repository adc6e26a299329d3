use std::fmt;

use crate::abi::DEFAULT_FORBIDDEN;

/// Set of byte values that must not appear in emitted instruction bytes.
///
/// Stored as a 256-bit membership mask. `Default` gives the classic
/// `{0x00, 0x0a}` set; `new()` gives the empty set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ForbiddenBytes {
    mask: [u64; 4],
}

impl ForbiddenBytes {
    #[must_use]
    pub const fn new() -> Self {
        Self { mask: [0; 4] }
    }

    pub fn insert(&mut self, byte: u8) -> bool {
        let (word, bit) = Self::slot(byte);
        let was_set = self.mask[word] & bit != 0;
        self.mask[word] |= bit;
        !was_set
    }

    pub fn remove(&mut self, byte: u8) -> bool {
        let (word, bit) = Self::slot(byte);
        let was_set = self.mask[word] & bit != 0;
        self.mask[word] &= !bit;
        was_set
    }

    #[must_use]
    pub const fn contains(&self, byte: u8) -> bool {
        let (word, bit) = Self::slot(byte);
        self.mask[word] & bit != 0
    }

    /// First forbidden byte in `bytes`, as `(offset, byte)`.
    #[must_use]
    pub fn find_in(&self, bytes: &[u8]) -> Option<(usize, u8)> {
        bytes
            .iter()
            .copied()
            .enumerate()
            .find(|&(_, b)| self.contains(b))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mask.iter().map(|w| w.count_ones() as usize).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mask.iter().all(|&w| w == 0)
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(|&b| self.contains(b))
    }

    const fn slot(byte: u8) -> (usize, u64) {
        ((byte >> 6) as usize, 1 << (byte & 0x3F))
    }
}

impl Default for ForbiddenBytes {
    fn default() -> Self {
        DEFAULT_FORBIDDEN.iter().copied().collect()
    }
}

impl FromIterator<u8> for ForbiddenBytes {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for byte in iter {
            set.insert(byte);
        }
        set
    }
}

impl From<&[u8]> for ForbiddenBytes {
    fn from(bytes: &[u8]) -> Self {
        bytes.iter().copied().collect()
    }
}

impl fmt::Display for ForbiddenBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, byte) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{byte:#04x}")?;
        }
        f.write_str("}")
    }
}
