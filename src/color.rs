//! 8-bit RGB color helpers.
//!
//! Colors are `palette::Srgb<u8>` values in nominal R, G, B order. The
//! physical byte order on the wire is only applied when a frame is rendered
//! (see [`WiringOrder`](crate::WiringOrder)).

use palette::Srgb;

/// Three 8-bit intensity channels.
pub type Color = Srgb<u8>;

/// All channels off.
pub const OFF: Color = Srgb::new(0, 0, 0);
/// Full red; the canonical start of the color wheel.
pub const RED: Color = Srgb::new(255, 0, 0);
/// Full green.
pub const GREEN: Color = Srgb::new(0, 255, 0);
/// Full blue.
pub const BLUE: Color = Srgb::new(0, 0, 255);
/// All channels at full intensity.
pub const WHITE: Color = Srgb::new(255, 255, 255);

/// Number of distinct positions on the wheel used by [`wheel`].
pub const WHEEL_POSITIONS: u16 = 765;

/// Returns true if every channel is zero.
#[inline]
pub fn is_off(color: Color) -> bool {
    color.red == 0 && color.green == 0 && color.blue == 0
}

/// Scales a color by `brightness` (0 = off, 255 = unchanged).
///
/// Each channel becomes `round(brightness / 255 * channel)`.
pub fn apply_brightness(color: &mut Color, brightness: u8) {
    if brightness == u8::MAX {
        return;
    }

    color.red = scale(color.red, brightness);
    color.green = scale(color.green, brightness);
    color.blue = scale(color.blue, brightness);
}

/// Returns a copy of `color` scaled by `brightness`.
#[inline]
pub fn with_brightness(mut color: Color, brightness: u8) -> Color {
    apply_brightness(&mut color, brightness);
    color
}

// round(a * b / 255) without floats; a * b + 127 never lands on a tie since 255 is odd
#[inline]
fn scale(channel: u8, brightness: u8) -> u8 {
    ((channel as u16 * brightness as u16 + 127) / 255) as u8
}

/// Advances `color` one step around the Red → Green → Blue → Red wheel.
///
/// A color with all three channels lit is not on the wheel and is reset to
/// [`RED`] before stepping.
// TODO: return whether the reset happened so callers seeding the wheel from
// external buffers can tell their color was discarded.
pub fn apply_fade(color: &mut Color, step_size: u8) {
    if color.red != 0 && color.green != 0 && color.blue != 0 {
        *color = RED;
    }

    let step = step_size.max(1);
    let (red, green, blue) = (&mut color.red, &mut color.green, &mut color.blue);

    if *green < 255 && *blue == 0 {
        fade_phase(red, green, blue, step);
    } else if *green > 0 {
        fade_phase(green, blue, red, step);
    } else {
        fade_phase(blue, red, green, step);
    }
}

/// One step of a single wheel phase.
///
/// `lead` is the channel fading out and `next` the one fading in. When the
/// subtraction wraps the phase is finished: the overshoot spills over into
/// the following phase through `after`.
#[inline]
fn fade_phase(lead: &mut u8, next: &mut u8, after: &mut u8, step: u8) {
    let rest = lead.wrapping_sub(step);

    if rest > *lead {
        *lead = 0;
        *next = rest;
        *after = 255 - rest;
    } else {
        *lead = rest;
        *next = next.wrapping_add(step);
    }
}

/// Color at `position` on the wheel (`position % 765`).
///
/// 0 is red, 255 green, 510 blue.
pub fn wheel(position: u16) -> Color {
    let position = position % WHEEL_POSITIONS;

    if position <= 255 {
        let p = position as u8;
        Srgb::new(255 - p, p, 0)
    } else if position <= 510 {
        let p = (position - 255) as u8;
        Srgb::new(0, 255 - p, p)
    } else {
        let p = (position - 510) as u8;
        Srgb::new(p, 0, 255 - p)
    }
}
