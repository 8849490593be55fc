//! Sparse, position-addressed pixel storage.

use crate::color::Color;
use crate::types::{BufferError, Pixel};
use heapless::Vec;

/// Ordered collection of individually colored pixels.
///
/// Only the pixels that are actually lit need to be stored; every position
/// without an entry renders as off. Entries are kept strictly ascending by
/// position with no duplicates, which lets the renderer walk the buffer in a
/// single pass alongside the strip.
///
/// # Type Parameters
/// * `N` - Maximum number of pixels this buffer can hold
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer<const N: usize> {
    pixels: Vec<Pixel, N>,
}

impl<const N: usize> PixelBuffer<N> {
    /// Creates an empty buffer.
    pub const fn new() -> Self {
        Self { pixels: Vec::new() }
    }

    /// Sets the color at `position`, adding the pixel if it is not present yet.
    ///
    /// An existing pixel is overwritten in place and never fails. Adding a new
    /// pixel shifts all later entries one slot to the right.
    ///
    /// # Errors
    /// * `CapacityExceeded` - A new pixel was needed but the buffer is full
    pub fn insert(&mut self, position: u16, color: Color) -> Result<(), BufferError> {
        let mut index = self.pixels.len();

        for (i, pixel) in self.pixels.iter_mut().enumerate() {
            if pixel.position == position {
                pixel.color = color;
                return Ok(());
            }

            if pixel.position > position {
                index = i;
                break;
            }
        }

        self.pixels
            .insert(index, Pixel::new(position, color))
            .map_err(|_| BufferError::CapacityExceeded)
    }

    /// Returns true if a pixel is stored at `position`.
    pub fn exists(&self, position: u16) -> bool {
        self.index_of(position).is_some()
    }

    /// Color stored at `position`, if any.
    pub fn get(&self, position: u16) -> Option<Color> {
        self.index_of(position).map(|i| self.pixels[i].color)
    }

    /// Removes the pixel at array `index` (not position).
    ///
    /// Returns `None` and leaves the buffer untouched if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Option<Pixel> {
        if index >= self.pixels.len() {
            return None;
        }

        Some(self.pixels.remove(index))
    }

    /// Removes the pixel stored at `position`.
    ///
    /// Returns false without touching the buffer if there is none.
    pub fn remove_at(&mut self, position: u16) -> bool {
        match self.index_of(position) {
            Some(index) => self.remove(index).is_some(),
            None => false,
        }
    }

    /// Mutable access to the color of the pixel at array `index`.
    ///
    /// Positions are not exposed mutably so the ordering cannot be broken.
    pub fn color_mut(&mut self, index: usize) -> Option<&mut Color> {
        self.pixels.get_mut(index).map(|pixel| &mut pixel.color)
    }

    /// Number of stored pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Returns true if no pixel is stored.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Returns true if no further pixel can be added.
    pub fn is_full(&self) -> bool {
        self.pixels.is_full()
    }

    /// Maximum number of pixels.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Removes every pixel.
    pub fn clear(&mut self) {
        self.pixels.clear();
    }

    /// Stored pixels in ascending position order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Iterates over the stored pixels in ascending position order.
    pub fn iter(&self) -> core::slice::Iter<'_, Pixel> {
        self.pixels.iter()
    }

    // Ascending scan that stops at the first larger position.
    fn index_of(&self, position: u16) -> Option<usize> {
        for (i, pixel) in self.pixels.iter().enumerate() {
            if pixel.position == position {
                return Some(i);
            }

            if pixel.position > position {
                break;
            }
        }

        None
    }
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const N: usize> IntoIterator for &'a PixelBuffer<N> {
    type Item = &'a Pixel;
    type IntoIter = core::slice::Iter<'a, Pixel>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
