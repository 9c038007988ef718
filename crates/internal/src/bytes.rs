//! Byte-slice helpers used by the mode implementations

/// XOR `src` into `dst` over the length of the shorter slice
#[inline]
pub fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}

/// Increment a big-endian counter in place, wrapping on overflow
#[inline]
pub fn increment_be(counter: &mut [u8]) {
    for byte in counter.iter_mut().rev() {
        let (next, carry) = byte.overflowing_add(1);
        *byte = next;
        if !carry {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xor_in_place_shorter_source() {
        let mut dst = [0xFFu8; 4];
        xor_in_place(&mut dst, &[0x0F, 0xF0]);
        assert_eq!(dst, [0xF0, 0x0F, 0xFF, 0xFF]);
    }

    #[test]
    fn test_increment_be_carries() {
        let mut c = hex::decode("00ff").unwrap();
        increment_be(&mut c);
        assert_eq!(c, hex::decode("0100").unwrap());

        let mut wrap = [0xFFu8; 3];
        increment_be(&mut wrap);
        assert_eq!(wrap, [0, 0, 0]);
    }
}
