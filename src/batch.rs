//! Word-parallel digit batch codec.
//!
//! These primitives validate and transcode small fixed-size runs of
//! ASCII digit/hex characters with single-word arithmetic instead of a
//! per-character loop: 4 or 8 bytes are packed big-endian into a `u32`
//! or `u64` (first character in the most significant byte) and checked
//! or decoded in one multiply-and-shift pass. The encode half packs a
//! small integer into binary-coded decimal, one digit per byte, so the
//! whole numeral becomes ASCII with a single `| 0x30`.
//!
//! None of these functions fail at runtime. Each documents a
//! precondition; feeding input outside it silently produces wrong
//! results, so call sites must validate first (typically with
//! [`all_hex_digits4`] or [`bytes_all_within_range`]).

const HIGH_BITS_4: u32 = 0x8080_8080;
const HIGH_BITS_8: u64 = 0x8080_8080_8080_8080;
const EXCEPT_HIGH_8: u64 = 0x7F7F_7F7F_7F7F_7F7F;

/// Adds `a` and `b` byte-wise: carries never propagate between bytes.
#[inline]
pub fn add4_bytes(a: u32, b: u32) -> u32 {
    const EVEN: u32 = 0xFF00_FF00;
    const ODD: u32 = !EVEN;
    (((a & EVEN).wrapping_add(b & EVEN)) & EVEN) | (((a & ODD).wrapping_add(b & ODD)) & ODD)
}

/// Adds `a` and `b` byte-wise over 8 packed bytes.
#[inline]
pub fn add8_bytes(a: u64, b: u64) -> u64 {
    const EVEN: u64 = 0xFF00_FF00_FF00_FF00;
    const ODD: u64 = !EVEN;
    (((a & EVEN).wrapping_add(b & EVEN)) & EVEN) | (((a & ODD).wrapping_add(b & ODD)) & ODD)
}

/// True iff any byte of `x` is zero.
///
/// See <https://graphics.stanford.edu/~seander/bithacks.html#ZeroInWord>.
#[inline]
pub fn contains_null_byte(x: u64) -> bool {
    !(((x & EXCEPT_HIGH_8).wrapping_add(EXCEPT_HIGH_8)) | x | EXCEPT_HIGH_8) != 0
}

/// Index of the first zero byte of `x`, counting from the most
/// significant byte (big-endian position 0), or 8 if there is none.
#[inline]
pub fn place_of_null_byte(x: u64) -> u32 {
    let q = !(((x & EXCEPT_HIGH_8).wrapping_add(EXCEPT_HIGH_8)) | x | EXCEPT_HIGH_8);
    if q == 0 {
        8
    } else {
        q.leading_zeros() / 8
    }
}

/// True iff some byte of `x` equals `b`.
#[inline]
pub fn contains_byte(x: u64, b: u8) -> bool {
    contains_null_byte(x ^ (u64::from(b) * 0x0101_0101_0101_0101))
}

/// True iff every byte of `x` lies in the half-open range `[min, max)`.
#[inline]
pub fn bytes_all_within_range(x: u64, min: u8, max: u8) -> bool {
    let a = x
        .wrapping_add(HIGH_BITS_8)
        .wrapping_sub(u64::from(max) * 0x0101_0101_0101_0101);
    let b = x.wrapping_sub(u64::from(min) * 0x0101_0101_0101_0101);
    (a | b) & HIGH_BITS_8 == 0
}

/// True iff all 4 packed bytes are ASCII hex digits
/// (`'0'-'9'`, `'A'-'F'` or `'a'-'f'`). Any other byte, including null,
/// makes this false.
///
/// Three parallel range tests (decimal, uppercase, lowercase) run at
/// once; a byte passes if at least one range accepts it, so the failure
/// indicators of the three are ANDed together.
#[inline]
pub fn all_hex_digits4(digits: u32) -> bool {
    // per-byte constants: 0x7F - high bound, and the two's complement of
    // the low bound (byte-wise add of -'0' etc.)
    let a_lo = add4_bytes(digits, 0x7F7F_7F7F - 0x3939_3939); // > '9'
    let a_hi = add4_bytes(digits, 0xD0D0_D0D0); // < '0'
    let b_lo = add4_bytes(digits, 0x7F7F_7F7F - 0x4646_4646); // > 'F'
    let b_hi = add4_bytes(digits, 0xBFBF_BFBF); // < 'A'
    let c_lo = add4_bytes(digits, 0x7F7F_7F7F - 0x6666_6666); // > 'f'
    let c_hi = add4_bytes(digits, 0x9F9F_9F9F); // < 'a'
    ((a_lo | a_hi) & (b_lo | b_hi) & (c_lo | c_hi)) & HIGH_BITS_4 == 0
}

/// Maps 4 packed hex-digit bytes to their nibble values (0-15), one per
/// byte, same layout.
///
/// Precondition: [`all_hex_digits4`] was true for `chars`.
#[inline]
pub fn hex_nibbles4(chars: u32) -> u32 {
    // '0'-'9' become 0-9; 'A'-'F' and 'a'-'f' both collapse to 0x41-0x46
    let chars = chars & 0x4F4F_4F4F;
    // letters all have the 6th bit set
    let is_alpha = chars & 0x4040_4040;
    // strip that bit (0x41-0x46 -> 1-6), then add 9 per letter byte
    (is_alpha >> 6).wrapping_mul(9).wrapping_add(chars ^ is_alpha)
}

/// Decodes 4 packed ASCII hex digits (big-endian) into their `u32`
/// value, e.g. `"1234"` packed big-endian yields `0x1234`.
///
/// Precondition: [`all_hex_digits4`] was true for `xdigits`.
#[inline]
pub fn parse_hex_digits4(xdigits: u32) -> u32 {
    let x = hex_nibbles4(xdigits);
    // fold adjacent nibble pairs into bytes, then byte pairs into the result
    let x = ((x >> 8) & 0x00FF_00FF) * 16 + (x & 0x00FF_00FF);
    ((x >> 16) << 8) | (x & 0xFF)
}

/// Decodes 4 packed ASCII decimal digit values (bytes already reduced to
/// 0-9, e.g. via `^ 0x30303030`) into the represented integer (0-9999).
///
/// Precondition: every byte is in `0..=9`.
#[inline]
pub fn parse_digits4(digits: u32) -> u32 {
    // pair up neighbours: byte i becomes 10*d[i-1] + d[i]
    let digits = digits.wrapping_add((digits >> 8).wrapping_mul(10));
    ((digits & 0x00FF_00FF).wrapping_mul(100 + (1 << 16))) >> 16
}

/// Decodes 8 packed ASCII decimal digit values (bytes reduced to 0-9)
/// into the represented integer (0-99999999) with two multiplies.
///
/// Adapted from the trick used by Rust's own `dec2flt`, which in turn
/// credits <https://johnnylee-sde.github.io/Fast-numeric-string-to-int/>.
///
/// Precondition: every byte is in `0..=9`.
#[inline]
pub fn parse_digits8(digits: u64) -> u64 {
    const MASK: u64 = 0x0000_00FF_0000_00FF;
    const MUL1: u64 = 0x0000_0001_0000_2710; // 10000 + (1 << 32)
    const MUL2: u64 = 0x0000_0064_000F_4240; // 1000000 + (100 << 32)
    let digits = digits.wrapping_add((digits >> 8).wrapping_mul(10));
    let v1 = (digits & MASK).wrapping_mul(MUL1);
    let v2 = ((digits >> 16) & MASK).wrapping_mul(MUL2);
    v1.wrapping_add(v2) >> 32
}

/// Repacks `x < 100` as two BCD digit bytes (big-endian digit order).
///
/// Precondition violation (`x >= 100`) yields garbage, by contract.
#[inline]
pub fn u64_to_bcd2(x: u64) -> u64 {
    // 6554 / 2^16 ~ 1/10; move the tens digit up a byte
    let ten_carry = (x * 6554 >> 16) * (256 - 10);
    x + ten_carry
}

/// Repacks `x < 10000` as four BCD digit bytes (big-endian digit order).
#[inline]
pub fn u64_to_bcd4(x: u64) -> u64 {
    // split hundreds from the rest, then tens within each half
    let top = ((x * 5243) >> 19) & 0xFF; // ~ x / 100
    let x = x + top * (65536 - 100);
    let top = ((x * 103) >> 10) & 0xF_000F; // ~ /10 per 16-bit lane
    x + top * (256 - 10)
}

/// Repacks `x < 100000000` as eight BCD digit bytes (big-endian digit
/// order).
#[inline]
pub fn u64_to_bcd8(x: u64) -> u64 {
    let top = (x * 109_951_163) >> 40; // ~ x / 10000
    let x = x + top * ((1u64 << 32) - 10000);
    let top = ((x * 5243) >> 19) & 0xFF_0000_00FF;
    let x = x + top * (65536 - 100);
    let top = ((x * 103) >> 10) & 0x000F_000F_000F_000F;
    x + top * (256 - 10)
}
