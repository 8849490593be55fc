//! Run-length ("substrip") strip composition.

use crate::color::{self, Color};
use crate::types::{BufferError, Segment};
use heapless::Vec;

/// Ordered list of segments covering a prefix of the strip.
///
/// Segments are rendered in order, each repeated `length` times. Positions
/// past the summed length render as off, and segments reaching past the end
/// of the strip are cut off. Neither case is an error.
///
/// Cloning produces an independent deep copy.
///
/// # Type Parameters
/// * `N` - Maximum number of segments this buffer can hold
#[derive(Debug, Clone, PartialEq)]
pub struct SubstripBuffer<const N: usize> {
    segments: Vec<Segment, N>,
}

impl<const N: usize> SubstripBuffer<N> {
    /// Creates an empty buffer.
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Creates a buffer holding a copy of `segments`.
    ///
    /// # Errors
    /// * `CapacityExceeded` - More than `N` segments were given
    pub fn from_segments(segments: &[Segment]) -> Result<Self, BufferError> {
        let segments = Vec::from_slice(segments).map_err(|_| BufferError::CapacityExceeded)?;
        Ok(Self { segments })
    }

    /// Creates a buffer from a fixed set of segments.
    ///
    /// Fails to compile when `M` exceeds the capacity `N`.
    pub fn from_array<const M: usize>(segments: [Segment; M]) -> Self {
        const { assert!(M <= N, "more segments than buffer capacity") };
        let mut buffer = Self::new();
        buffer.segments.extend(segments);
        buffer
    }

    /// Splits `strip_size` pixels evenly between `colors`.
    ///
    /// Every segment gets `strip_size / colors.len()` pixels; the last one also
    /// takes the remainder so the total is exactly `strip_size`.
    ///
    /// # Errors
    /// * `Empty` - `colors` is empty
    /// * `CapacityExceeded` - More than `N` colors were given
    pub fn distribute(colors: &[Color], strip_size: u16) -> Result<Self, BufferError> {
        if colors.is_empty() {
            return Err(BufferError::Empty);
        }

        if colors.len() > N {
            return Err(BufferError::CapacityExceeded);
        }

        let count = colors.len() as u16;
        let share = strip_size / count;
        let remainder = strip_size % count;

        let mut buffer = Self::new();
        for (i, &color) in colors.iter().enumerate() {
            let length = if i == colors.len() - 1 {
                share + remainder
            } else {
                share
            };
            buffer.push(length, color)?;
        }

        Ok(buffer)
    }

    /// Appends a segment.
    ///
    /// # Errors
    /// * `CapacityExceeded` - The buffer is full
    pub fn push(&mut self, length: u16, color: Color) -> Result<(), BufferError> {
        self.segments
            .push(Segment::new(length, color))
            .map_err(|_| BufferError::CapacityExceeded)
    }

    /// Scales every segment color by `brightness` (255 = unchanged).
    pub fn apply_brightness(&mut self, brightness: u8) {
        if brightness == u8::MAX {
            return;
        }

        for segment in self.segments.iter_mut() {
            color::apply_brightness(&mut segment.color, brightness);
        }
    }

    /// Sum of all segment lengths.
    pub fn total_len(&self) -> u32 {
        self.segments.iter().map(|s| s.length as u32).sum()
    }

    /// Segments in render order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Mutable access to the segment at `index`.
    pub fn segment_mut(&mut self, index: usize) -> Option<&mut Segment> {
        self.segments.get_mut(index)
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if there are no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Drops all segments.
    pub fn clear(&mut self) {
        self.segments.clear();
    }
}

impl<const N: usize> Default for SubstripBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
