use crate::Trigram;

/// Pack three consecutive bytes into a trigram key: high, middle, low byte.
#[inline]
pub fn pack(a: u8, b: u8, c: u8) -> Trigram {
    ((a as Trigram) << 16) | ((b as Trigram) << 8) | (c as Trigram)
}

/// Inverse of [`pack`].
#[inline]
pub fn unpack(trigram: Trigram) -> [u8; 3] {
    [(trigram >> 16) as u8, (trigram >> 8) as u8, trigram as u8]
}

/// Lazily yield the overlapping 3-byte windows of `text`, left to right.
/// Texts shorter than three bytes yield nothing.
pub fn trigrams<T: AsRef<[u8]> + ?Sized>(text: &T) -> impl Iterator<Item = Trigram> + '_ {
    text.as_ref().windows(3).map(|w| pack(w[0], w[1], w[2]))
}

/// Extract all trigrams of `text`. A text of `n` bytes yields `n - 2` trigrams,
/// or none when `n < 3`. Bytes are taken as-is: no case folding, no UTF-8 decoding.
pub fn extract<T: AsRef<[u8]> + ?Sized>(text: &T) -> Vec<Trigram> {
    trigrams(text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_known_windows() {
        assert_eq!(extract("Cod"), vec![4419428]);
        assert_eq!(extract("Code"), vec![0x436F64, 0x6F6465]);
    }

    #[test]
    fn unpack_reverses_pack() {
        assert_eq!(unpack(pack(b'l', b'i', b'f')), *b"lif");
        assert_eq!(unpack(pack(0xff, 0x00, 0x80)), [0xff, 0x00, 0x80]);
    }
}
