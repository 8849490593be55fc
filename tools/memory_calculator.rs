#!/usr/bin/env rust-script
//! Memory calculator for rgb-strip
//!
//! Prints the RAM footprint of the buffers and effects for the capacities you
//! are likely to pick, so you can size them before flashing a small MCU.
//!
//! Usage:
//!   cargo run --bin memory_calculator

use embassy_time::Duration as EmbassyDurationInner;
use embassy_time::Instant as EmbassyInstantInner;
use rand::rngs::SmallRng;
use rgb_strip::effects::fade::{Breathe, BreatheArray, BreatheRainbow, BreatheRandom, Fade};
use rgb_strip::effects::rain::{Rain, RainConfig};
use rgb_strip::effects::rainbow::{Rainbow, RotateRainbow};
use rgb_strip::effects::sweep::{Sweep, SweepArray, SweepRainbow};
use rgb_strip::{
    CalibrationController, Color, Millis, Pixel, PixelBuffer, Segment, StripConfig,
    SubstripBuffer, TimeDuration, TimeInstant, TimeSource,
};
use std::mem::size_of;

// ============================================================================
// Mock Instant Types
// ============================================================================

// u64 milliseconds, e.g. a 64-bit monotonic timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Duration64(u64);

impl TimeDuration for Duration64 {
    fn as_millis(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Instant64(u64);

impl TimeInstant for Instant64 {
    type Duration = Duration64;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        Duration64(self.0.saturating_sub(earlier.0))
    }
}

// Embassy wrappers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EmbassyDuration(EmbassyDurationInner);

impl TimeDuration for EmbassyDuration {
    fn as_millis(&self) -> u64 {
        self.0.as_millis()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EmbassyInstant(EmbassyInstantInner);

impl TimeInstant for EmbassyInstant {
    type Duration = EmbassyDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        EmbassyDuration(self.0 - earlier.0)
    }
}

struct MillisTimeSource;

impl TimeSource<Millis> for MillisTimeSource {
    fn now(&self) -> Millis {
        Millis(0)
    }
}

// ============================================================================
// Display Functions
// ============================================================================

fn print_header() {
    println!("╔════════════════════════════════════════════════════════════════╗");
    println!("║           RGB Strip Memory Footprint Calculator                ║");
    println!("╚════════════════════════════════════════════════════════════════╝");
    println!();
}

fn print_component_sizes() {
    println!("Component Sizes:");
    println!("├─ Color:                          {} bytes", size_of::<Color>());
    println!("├─ Pixel:                          {} bytes", size_of::<Pixel>());
    println!("├─ Segment:                        {} bytes", size_of::<Segment>());
    println!("├─ StripConfig:                    {} bytes", size_of::<StripConfig>());
    println!("└─ RainConfig:                     {} bytes", size_of::<RainConfig>());
    println!();
}

fn print_buffer_table() {
    println!("Buffer Memory Usage:");
    println!("┌──────────┬──────────────────┬──────────────────┐");
    println!("│ Capacity │ PixelBuffer<N>   │ SubstripBuffer<N>│");
    println!("├──────────┼──────────────────┼──────────────────┤");

    let rows = [
        (4, size_of::<PixelBuffer<4>>(), size_of::<SubstripBuffer<4>>()),
        (16, size_of::<PixelBuffer<16>>(), size_of::<SubstripBuffer<16>>()),
        (32, size_of::<PixelBuffer<32>>(), size_of::<SubstripBuffer<32>>()),
        (64, size_of::<PixelBuffer<64>>(), size_of::<SubstripBuffer<64>>()),
        (144, size_of::<PixelBuffer<144>>(), size_of::<SubstripBuffer<144>>()),
    ];

    for (capacity, pixels, substrips) in rows {
        println!(
            "│ {:^8} │ {:>14} B │ {:>14} B │",
            capacity, pixels, substrips
        );
    }

    println!("└──────────┴──────────────────┴──────────────────┘");
    println!();
}

fn print_effect_sizes<I: TimeInstant>(instant_name: &str) {
    println!("Effect Sizes (instant = {}):", instant_name);
    println!("├─ Fade:                           {} bytes", size_of::<Fade<I>>());
    println!("├─ Breathe:                        {} bytes", size_of::<Breathe<I>>());
    println!("├─ BreatheArray<8>:                {} bytes", size_of::<BreatheArray<I, 8>>());
    println!(
        "├─ BreatheRandom<SmallRng>:        {} bytes",
        size_of::<BreatheRandom<I, SmallRng>>()
    );
    println!("├─ BreatheRainbow:                 {} bytes", size_of::<BreatheRainbow<I>>());
    println!("├─ Rainbow:                        {} bytes", size_of::<Rainbow<I>>());
    println!("├─ RotateRainbow:                  {} bytes", size_of::<RotateRainbow<I>>());
    println!("├─ Sweep:                          {} bytes", size_of::<Sweep<I>>());
    println!("├─ SweepArray<8>:                  {} bytes", size_of::<SweepArray<I, 8>>());
    println!("├─ SweepRainbow:                   {} bytes", size_of::<SweepRainbow<I>>());
    println!(
        "└─ Rain<SmallRng, 32>:             {} bytes",
        size_of::<Rain<I, SmallRng, 32>>()
    );
    println!();
}

fn print_calibration_size() {
    println!("Calibration:");
    println!(
        "└─ CalibrationController<Millis>:  {} bytes",
        size_of::<CalibrationController<'static, Millis, MillisTimeSource>>()
    );
    println!();
}

fn main() {
    print_header();
    print_component_sizes();
    print_buffer_table();

    print_effect_sizes::<Millis>("Millis (u32)");
    print_effect_sizes::<Instant64>("u64");
    print_effect_sizes::<EmbassyInstant>("Embassy");

    print_calibration_size();

    println!("Architecture Note:");
    println!(
        "  Running on host ({}-bit). Embedded 32-bit targets will have",
        size_of::<usize>() * 8
    );
    println!("  slightly smaller buffer headers due to the smaller usize.");
    println!();
}
