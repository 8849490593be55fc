//! Core value types shared by buffers and renderers.

use crate::color::Color;

/// A single addressed pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel {
    /// Position on the strip, 0-based.
    pub position: u16,

    /// Color shown at that position.
    pub color: Color,
}

impl Pixel {
    /// Creates a new pixel.
    #[inline]
    pub fn new(position: u16, color: Color) -> Self {
        Self { position, color }
    }
}

/// A run of `length` consecutive pixels sharing one color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Number of pixels covered by this run.
    pub length: u16,

    /// Color of every pixel in the run.
    pub color: Color,
}

impl Segment {
    /// Creates a new segment.
    #[inline]
    pub fn new(length: u16, color: Color) -> Self {
        Self { length, color }
    }
}

/// Order in which the three color bytes of a pixel are sent to the strip.
///
/// Fixed per LED batch; WS2812B parts are usually `Grb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WiringOrder {
    Rgb,
    #[default]
    Grb,
    Brg,
    Bgr,
}

impl WiringOrder {
    /// Channel bytes of `color` in transmission order.
    #[inline]
    pub fn arrange(self, color: Color) -> [u8; 3] {
        let (red, green, blue) = (color.red, color.green, color.blue);

        match self {
            WiringOrder::Rgb => [red, green, blue],
            WiringOrder::Grb => [green, red, blue],
            WiringOrder::Brg => [blue, red, green],
            WiringOrder::Bgr => [blue, green, red],
        }
    }
}

/// Errors reported by fixed-capacity buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BufferError {
    /// Buffer capacity exceeded.
    CapacityExceeded,

    /// An operation that needs at least one color was given none.
    Empty,
}

impl core::fmt::Display for BufferError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BufferError::CapacityExceeded => {
                write!(f, "buffer capacity exceeded")
            }
            BufferError::Empty => {
                write!(f, "at least one color is required")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BufferError {}
