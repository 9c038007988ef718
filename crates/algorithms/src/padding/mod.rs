//! Padding schemes for block-aligned modes
//!
//! Every scheme implements [`PaddingScheme`](cipherkit_api::PaddingScheme).
//! Schemes that end in a count byte (PKCS#7, ANSI X9.23, ISO 10126) share one
//! validator that inspects the whole final block with a branch-free
//! accumulator, so the time taken does not depend on where a bad byte sits.

mod iso;
mod pkcs1;
mod pkcs7;
mod zero;

pub use iso::{AnsiX923, Iso10126, Iso7816};
pub use pkcs1::{Pkcs1, Pkcs1BlockType};
pub use pkcs7::{Pkcs5, Pkcs7};
pub use zero::{NoPadding, ZeroPadding};

use cipherkit_api::{Error, Result};
use cipherkit_internal::ct_lt_mask;

/// Largest block size a count byte can describe
const MAX_COUNTED_BLOCK: usize = 255;

/// Reject block sizes a one-byte count cannot express
fn check_block_size(scheme: &'static str, block_size: usize) -> Result<()> {
    if block_size == 0 || block_size > MAX_COUNTED_BLOCK {
        return Err(Error::parameter(
            scheme,
            format!("block size {} must be between 1 and 255", block_size),
        ));
    }
    Ok(())
}

/// Bytes needed to reach the next block boundary; a full block when aligned
#[inline]
fn fill_length(len: usize, block_size: usize) -> usize {
    block_size - len % block_size
}

/// What the bytes before a trailing count byte must contain
#[derive(Debug, Clone, Copy)]
enum Filler {
    /// Each byte equals the count (PKCS#7)
    Count,
    /// Each byte is zero (ANSI X9.23)
    Zero,
    /// Unconstrained (ISO 10126)
    Any,
}

/// Validate a count-terminated pad and return the unpadded length
fn counted_unpad_len(
    scheme: &'static str,
    data: &[u8],
    block_size: usize,
    filler: Filler,
) -> Result<usize> {
    check_block_size(scheme, block_size)?;
    if data.is_empty() || data.len() % block_size != 0 {
        return Err(Error::InvalidPadding { scheme });
    }

    let block = &data[data.len() - block_size..];
    let count = block[block_size - 1];

    let mut bad = ct_lt_mask(count, 1) | ct_lt_mask(block_size as u8, count);
    let expected = match filler {
        Filler::Count => Some(count),
        Filler::Zero => Some(0),
        Filler::Any => None,
    };
    if let Some(expected) = expected {
        // position 1 is the byte just before the count
        for position in 1..block_size {
            let in_pad = ct_lt_mask(position as u8, count);
            bad |= in_pad & (block[block_size - 1 - position] ^ expected);
        }
    }

    if bad != 0 {
        return Err(Error::InvalidPadding { scheme });
    }
    Ok(data.len() - count as usize)
}

#[cfg(test)]
mod tests;
