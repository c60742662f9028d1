/// Decodes the 32-bit float LOCUS stores latitude and longitude in.
///
/// Little-endian word, sign in bit 31, biased exponent in bits 30..23 and
/// the mantissa in bits 22..0 with an implicit leading one. There are no
/// special cases: an all-zero word is `2^-127`, not zero, and the all-ones
/// exponent is just a large power of two.
pub fn decode_float(bytes: [u8; 4]) -> f64 {
    let bits = u32::from_le_bytes(bytes);
    let exponent = ((bits >> 23) & 0xff) as i32 - 127;
    let mantissa = 1.0 + f64::from(bits & 0x007f_ffff) / f64::from(1u32 << 23);
    let value = mantissa * 2f64.powi(exponent);
    if bits & 0x8000_0000 != 0 {
        -value
    } else {
        value
    }
}
