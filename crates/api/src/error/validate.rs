//! Validation utilities shared by ciphers, modes and paddings

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::parameter(context, message));
    }
    Ok(())
}

/// Validate a key length against the accepted set
#[inline(always)]
pub fn key_size(algorithm: &'static str, actual: usize, accepted: &[usize]) -> Result<()> {
    if !accepted.contains(&actual) {
        return Err(Error::InvalidKeySize { algorithm, actual });
    }
    Ok(())
}

/// Validate a key length against an inclusive range
#[inline(always)]
pub fn key_size_range(algorithm: &'static str, actual: usize, min: usize, max: usize) -> Result<()> {
    if actual < min || actual > max {
        return Err(Error::InvalidKeySize { algorithm, actual });
    }
    Ok(())
}

/// Validate an exact IV length
#[inline(always)]
pub fn iv_size(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidIvSize { context, actual });
    }
    Ok(())
}

/// Validate an IV length against an inclusive range
#[inline(always)]
pub fn iv_size_range(context: &'static str, actual: usize, min: usize, max: usize) -> Result<()> {
    if actual < min || actual > max {
        return Err(Error::InvalidIvSize { context, actual });
    }
    Ok(())
}

/// Require an IV to be present and return it
#[inline(always)]
pub fn required_iv<'a>(context: &'static str, iv: Option<&'a [u8]>) -> Result<&'a [u8]> {
    iv.ok_or(Error::InvalidIvSize { context, actual: 0 })
}

/// Validate that a length is a whole number of blocks
#[inline(always)]
pub fn block_aligned(context: &'static str, actual: usize, block_size: usize) -> Result<()> {
    if block_size == 0 || actual % block_size != 0 {
        return Err(Error::InvalidDataLength {
            context,
            block_size,
            actual,
        });
    }
    Ok(())
}

/// Validate that a buffer holds exactly one block
#[inline(always)]
pub fn block_length(context: &'static str, actual: usize, block_size: usize) -> Result<()> {
    if actual != block_size {
        return Err(Error::InvalidDataLength {
            context,
            block_size,
            actual,
        });
    }
    Ok(())
}

/// Validate authentication
#[inline(always)]
pub fn authentication(is_valid: bool, context: &'static str) -> Result<()> {
    if !is_valid {
        return Err(Error::AuthenticationFailed { context });
    }
    Ok(())
}
