//! Rendering of colors and buffers onto the physical strip.
//!
//! Provides the [`FrameSink`] trait for the one-wire transmitter, the
//! [`Strip`] capability shared by every kind of strip, and its two
//! implementations: [`AddressableStrip`] for per-pixel strips such as WS2812
//! and [`PwmStrip`] for plain RGB strips driven by three PWM channels.

use crate::color::{self, Color};
use crate::config::StripConfig;
use crate::pixels::PixelBuffer;
use crate::substrip::SubstripBuffer;
use crate::types::{BufferError, WiringOrder};
use embedded_hal::pwm::SetDutyCycle;

/// Trait for abstracting the serial LED transmitter.
///
/// Implement this for the hardware that clocks bytes out to the strip (bit
/// banging, SPI, RMT, PIO, ...). A frame is streamed back-to-back between
/// [`begin_frame`](FrameSink::begin_frame) and
/// [`end_frame`](FrameSink::end_frame); implementations must not pause long
/// enough in between to trigger the LEDs' latch.
pub trait FrameSink {
    /// Prepares the line for a new frame.
    fn begin_frame(&mut self);

    /// Sends one channel byte. Called three times per pixel in wiring order.
    fn transmit_channel(&mut self, byte: u8);

    /// Finishes the frame and lets the LEDs latch.
    fn end_frame(&mut self);
}

/// Rendering capability shared by addressable and non-addressable strips.
pub trait Strip {
    /// Shows `color` on the whole strip.
    fn apply_all(&mut self, color: Color);
}

/// Renderer for strips with individually addressable pixels.
///
/// Every frame covers exactly [`len`](AddressableStrip::len) pixels unless
/// the method says otherwise.
pub struct AddressableStrip<S: FrameSink> {
    sink: S,
    len: u16,
    wiring: WiringOrder,
}

impl<S: FrameSink> AddressableStrip<S> {
    /// Creates a renderer for the strip described by `config`.
    pub fn new(sink: S, config: &StripConfig) -> Self {
        Self {
            sink,
            len: config.strip_size,
            wiring: config.wiring,
        }
    }

    /// Number of pixels per frame.
    pub fn len(&self) -> u16 {
        self.len
    }

    /// Returns true for a strip without pixels.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Changes the number of pixels per frame, e.g. after calibration.
    pub fn set_len(&mut self, len: u16) {
        self.len = len;
    }

    /// Byte order used for every pixel.
    pub fn wiring(&self) -> WiringOrder {
        self.wiring
    }

    /// Returns a reference to the underlying sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns a mutable reference to the underlying sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the renderer and returns the sink.
    pub fn release(self) -> S {
        self.sink
    }

    /// Renders each segment in order, padding the rest of the strip with off.
    pub fn apply_substrips<const N: usize>(&mut self, buffer: &SubstripBuffer<N>) {
        let mut remaining = self.len;

        self.sink.begin_frame();
        for segment in buffer.segments() {
            let run = segment.length.min(remaining);
            for _ in 0..run {
                self.emit(segment.color);
            }
            remaining -= run;
        }
        for _ in 0..remaining {
            self.emit(color::OFF);
        }
        self.sink.end_frame();
    }

    /// Renders every pixel of every segment, ignoring the configured length.
    ///
    /// Used while the length itself is unknown, i.e. during calibration.
    pub fn preview_substrips<const N: usize>(&mut self, buffer: &SubstripBuffer<N>) {
        self.sink.begin_frame();
        for segment in buffer.segments() {
            for _ in 0..segment.length {
                self.emit(segment.color);
            }
        }
        self.sink.end_frame();
    }

    /// Renders a sparse pixel buffer; positions without a pixel are off.
    pub fn apply_pixels<const N: usize>(&mut self, buffer: &PixelBuffer<N>) {
        let mut pixels = buffer.iter().peekable();

        self.sink.begin_frame();
        for position in 0..self.len {
            match pixels.next_if(|pixel| pixel.position == position) {
                Some(pixel) => self.emit(pixel.color),
                None => self.emit(color::OFF),
            }
        }
        self.sink.end_frame();
    }

    /// Renders one color per position; positions past the slice are off.
    pub fn apply_colors(&mut self, colors: &[Color]) {
        self.apply_fn(|position| colors.get(position as usize).copied().unwrap_or(color::OFF));
    }

    /// Renders the color returned by `color_at` for each position in order.
    pub fn apply_fn<F: FnMut(u16) -> Color>(&mut self, mut color_at: F) {
        self.sink.begin_frame();
        for position in 0..self.len {
            let color = color_at(position);
            self.emit(color);
        }
        self.sink.end_frame();
    }

    /// Renders `color` on the first `len` pixels only.
    ///
    /// The rest of the strip keeps whatever it latched last, which is what
    /// lets a sweep paint over the previous frame.
    pub fn apply_prefix(&mut self, color: Color, len: u16) {
        self.sink.begin_frame();
        for _ in 0..len {
            self.emit(color);
        }
        self.sink.end_frame();
    }

    /// Splits the strip evenly between `colors` and renders the result.
    ///
    /// # Errors
    /// * `Empty` - `colors` is empty
    /// * `CapacityExceeded` - More than `N` colors were given
    pub fn distribute<const N: usize>(&mut self, colors: &[Color]) -> Result<(), BufferError> {
        let buffer = SubstripBuffer::<N>::distribute(colors, self.len)?;
        self.apply_substrips(&buffer);
        Ok(())
    }

    #[inline]
    fn emit(&mut self, color: Color) {
        for byte in self.wiring.arrange(color) {
            self.sink.transmit_channel(byte);
        }
    }
}

impl<S: FrameSink> Strip for AddressableStrip<S> {
    fn apply_all(&mut self, color: Color) {
        self.apply_fn(|_| color);
    }
}

/// Renderer for non-addressable RGB strips on three PWM channels.
///
/// The whole strip always shows one color, so only uniform effects can run
/// on it.
pub struct PwmStrip<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    red: R,
    green: G,
    blue: B,
    common_anode: bool,
}

impl<R, G, B> PwmStrip<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    /// Creates a PWM strip.
    ///
    /// # Arguments
    /// * `red` - PWM channel for the red LEDs
    /// * `green` - PWM channel for the green LEDs
    /// * `blue` - PWM channel for the blue LEDs
    /// * `common_anode` - true for inverted (common anode) drivers
    pub fn new(red: R, green: G, blue: B, common_anode: bool) -> Self {
        Self {
            red,
            green,
            blue,
            common_anode,
        }
    }

    /// Returns the three channels.
    pub fn release(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }

    fn level(&self, value: u8) -> u16 {
        if self.common_anode {
            (u8::MAX - value) as u16
        } else {
            value as u16
        }
    }
}

impl<R, G, B> Strip for PwmStrip<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    fn apply_all(&mut self, color: Color) {
        let (red, green, blue) = (
            self.level(color.red),
            self.level(color.green),
            self.level(color.blue),
        );

        // A failed update keeps the previous level.
        let _ = self.red.set_duty_cycle_fraction(red, 255);
        let _ = self.green.set_duty_cycle_fraction(green, 255);
        let _ = self.blue.set_duty_cycle_fraction(blue, 255);
    }
}
