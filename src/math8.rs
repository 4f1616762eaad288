/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
/// A scale of 255 returns the value unchanged.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Map `offset` within `0..=span` onto `0..=steps` with integer math
///
/// Multiplies before dividing so no precision is lost. Truncates toward zero and
/// saturates to `steps` when `offset` exceeds `span`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn interpolate(offset: u16, span: u16, steps: u8) -> u8 {
    if span == 0 {
        return 0;
    }
    let offset = if offset > span { span } else { offset };
    ((offset as u32 * steps as u32) / span as u32) as u8
}
