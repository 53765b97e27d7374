//! Fixed point math for 8-bit color blending
//!
//! All division by 255 is exact with round-half-up, computed as a pair of
//! shift-and-add corrections rather than an integer divide.
//!
//! See <https://sestevenson.wordpress.com/2009/08/19/rounding-in-fixed-point-number-conversions/>

/// Interpolate a value between two end points using fixed point math
pub fn lerp_u8(p: u8, q: u8, a: u8) -> u8 {
    let base_shift = 8;
    let base_msb = 1 << (base_shift - 1);
    let v = if p > q { 1 } else { 0 };
    let (q,p,a) = (i32::from(q), i32::from(p), i32::from(a));
    let t0 : i32 = (q - p) * a + base_msb - v; // Signed multiplication
    let t1 : i32 = ((t0>>base_shift) + t0) >> base_shift;
    (p + t1) as u8
}

/// Multiply two u8 values using fixed point math
pub fn multiply_u8(a: u8, b: u8) -> u8 {
    let base_shift = 8;
    let base_msb = 1 << (base_shift - 1);
    let (a,b) = (u32::from(a), u32::from(b));
    let t : u32  = a * b + base_msb;
    let tt : u32 = ((t >> base_shift) + t) >> base_shift;
    tt as u8
}

/// Pack two 8-bit channels into the low bytes of the 16-bit lanes of a u32
///
/// `lo` sits in bits 0-7 and `hi` in bits 16-23. Bits 8-15 and 24-31 are
/// headroom for the blend arithmetic.
pub fn pack_pair(lo: u8, hi: u8) -> u32 {
    u32::from(lo) | (u32::from(hi) << 16)
}

/// Alpha blend two packed channel pairs with a single pair of multiplications
///
/// `d` and `s` hold two channels each, packed by [`pack_pair`]; `alpha` is in
/// [0,255]. Each lane becomes `(d * (255 - alpha) + s * alpha) / 255` with
/// the division exact and rounded, matching [`lerp_u8`] per channel. Lane
/// products peak at 255 * 255 so the 16-bit lanes never carry into each
/// other.
pub fn blend_pair(d: u32, s: u32, alpha: u32) -> u32 {
    debug_assert!(alpha <= 255, "alpha {} > 255 :: blend_pair", alpha);
    let inv = 255 - alpha;
    let t = d * inv + s * alpha + 0x0080_0080;
    ((t + ((t >> 8) & 0x00ff_00ff)) >> 8) & 0x00ff_00ff
}
