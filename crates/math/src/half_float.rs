//! IEEE 754 binary16 conversion.
//!
//! A half is carried as its raw `u16` bit pattern: 1 sign bit, 5 exponent
//! bits (bias 15) and 10 significand bits. Both directions work purely on
//! bit patterns, so no float rounding happens on the way.

use crate::ConvertError;

pub const HALF_SIGN: u16 = 0x8000;
pub const HALF_EXPONENT: u16 = 0x7c00;
pub const HALF_SIGNIFICAND: u16 = 0x03ff;

/// Positive infinity.
pub const HALF_INFINITY: u16 = 0x7c00;

/// NaN produced when a float NaN's payload does not survive truncation.
pub const HALF_NAN: u16 = 0x7c01;

/// Largest finite half, 65504.
pub const HALF_MAX: u16 = 0x7bff;

/// Convert an `f32` to the nearest half bit pattern.
///
/// Rounding adds half an ulp before truncating. Magnitudes below 2^-25 flush
/// to signed zero, magnitudes that round past 65504 become signed infinity.
/// NaN stays NaN, but the payload is only kept when its top 10 bits are
/// non-zero.
pub fn half_from_float(f: f32) -> u16 {
    let bits = f.to_bits();
    let sign = ((bits & 0x8000_0000) >> 16) as u16;
    let mut exponent = bits & 0x7f80_0000;
    let mut significand = bits & 0x007f_ffff;

    if exponent <= 0x3800_0000 {
        if exponent < 0x3300_0000 {
            return sign;
        }
        // subnormal half: make the implicit bit explicit and shift into place
        exponent >>= 23;
        significand |= 0x0080_0000;
        significand >>= 113 - exponent;
        significand += 0x0000_1000;
        return sign | (significand >> 13) as u16;
    }

    if exponent >= 0x4780_0000 {
        if exponent == 0x7f80_0000 && significand != 0 {
            significand >>= 13;
            if significand == 0 {
                return HALF_NAN;
            }
            return sign | HALF_EXPONENT | significand as u16;
        }
        return sign | HALF_INFINITY;
    }

    // Summed, not or-ed: a significand that rounds up carries into the exponent.
    exponent -= 0x3800_0000;
    significand += 0x0000_1000;
    sign + (exponent >> 13) as u16 + (significand >> 13) as u16
}

/// Convert a half bit pattern to `f32`. Every half is exactly representable,
/// so this never rounds.
pub fn float_from_half(h: u16) -> f32 {
    let sign = ((h & HALF_SIGN) as u32) << 16;
    let exponent = h & HALF_EXPONENT;

    let bits = if exponent == 0 {
        let mut significand = (h & HALF_SIGNIFICAND) as u32;
        if significand == 0 {
            sign
        } else {
            // normalize: each shift until the implicit bit shows up lowers the exponent
            let mut shifts = 0u32;
            significand <<= 1;
            while (significand & 0x0400) == 0 {
                significand <<= 1;
                shifts += 1;
            }
            let exponent = (127 - 15 - shifts) << 23;
            sign | exponent | ((significand & 0x03ff) << 13)
        }
    } else if exponent == HALF_EXPONENT {
        sign | 0x7f80_0000 | (((h & HALF_SIGNIFICAND) as u32) << 13)
    } else {
        sign | ((((h & 0x7fff) as u32) + 0x1_c000) << 13)
    };
    f32::from_bits(bits)
}

/// Encode `src` into `dst` element by element. Nothing is written when the
/// lengths differ.
pub fn halves_from_floats(src: &[f32], dst: &mut [u16]) -> Result<(), ConvertError> {
    check_lengths(src.len(), dst.len())?;
    for (half, &float) in dst.iter_mut().zip(src) {
        *half = half_from_float(float);
    }
    Ok(())
}

/// Decode `src` into `dst` element by element. Nothing is written when the
/// lengths differ.
pub fn floats_from_halves(src: &[u16], dst: &mut [f32]) -> Result<(), ConvertError> {
    check_lengths(src.len(), dst.len())?;
    for (float, &half) in dst.iter_mut().zip(src) {
        *float = float_from_half(half);
    }
    Ok(())
}

fn check_lengths(expected: usize, actual: usize) -> Result<(), ConvertError> {
    if expected != actual {
        return Err(ConvertError::LengthMismatch { expected, actual });
    }
    Ok(())
}
