//! Display driver facade.
//!
//! [`Panel`] is the only abstraction that knows about physical panel
//! characteristics. It extends `embedded_graphics::DrawTarget` (pixel writes)
//! with one-time hardware setup, backlight control and a frame bracket.
//!
//! # Frame Bracket
//!
//! All pixel writes of one redraw pass happen between
//! [`Panel::begin_frame`] and [`Panel::end_frame`], so a transport can batch
//! them (the firmware flushes its dirty window on `end_frame`). The bracket is
//! held by a [`Frame`] guard, which closes the frame on every exit path,
//! including early returns on a write error.

use core::ops::{Deref, DerefMut};

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;

#[cfg(test)]
pub(crate) mod memory;

// =============================================================================
// Configuration Types
// =============================================================================

/// Panel rotation relative to its native (portrait) scan order.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Whether rows and columns are exchanged (landscape on a portrait panel).
    pub const fn swaps_axes(self) -> bool { matches!(self, Self::Deg90 | Self::Deg270) }
}

/// Pixel format on the wire.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorFormat {
    /// 16 bits per pixel, 2 bytes on the wire.
    #[default]
    Rgb565,
    /// 18 bits per pixel, 3 bytes on the wire.
    Rgb666,
}

impl ColorFormat {
    /// Bytes per pixel on the wire.
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgb565 => 2,
            Self::Rgb666 => 3,
        }
    }
}

/// Fixed hardware setup applied once at boot.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    /// Width after rotation.
    pub width: u32,
    /// Height after rotation.
    pub height: u32,
    pub rotation: Rotation,
    pub color_format: ColorFormat,
}

// =============================================================================
// Errors
// =============================================================================

/// Driver-level faults reported by panel implementations.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError {
    /// Bus transfer to the panel failed.
    Communication,
    /// A frame or pixel write before `init` completed.
    NotInitialized,
    /// Configuration does not match the panel or its buffer.
    InvalidConfig,
}

impl core::fmt::Display for PanelError {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.write_str(match self {
            Self::Communication => "panel communication failed",
            Self::NotInitialized => "panel not initialized",
            Self::InvalidConfig => "invalid panel configuration",
        })
    }
}

impl core::error::Error for PanelError {}

// =============================================================================
// Panel Trait
// =============================================================================

/// Hardware-agnostic display panel.
///
/// Pixel writes go through the `DrawTarget` supertrait; implementations may
/// buffer them until [`end_frame`](Panel::end_frame).
pub trait Panel: DrawTarget<Color = Rgb565> {
    /// Bring the panel up: reset, rotation, pixel format, display on.
    fn init(
        &mut self,
        config: &PanelConfig,
    ) -> Result<(), Self::Error>;

    /// Set the backlight level (0 = off, 255 = full).
    fn set_brightness(
        &mut self,
        level: u8,
    ) -> Result<(), Self::Error>;

    /// Open a pixel batch.
    fn begin_frame(&mut self) -> Result<(), Self::Error>;

    /// Close the batch opened by [`begin_frame`](Panel::begin_frame) and push it to the panel.
    fn end_frame(&mut self) -> Result<(), Self::Error>;
}

// =============================================================================
// Frame Guard
// =============================================================================

/// An open frame on a panel.
///
/// Derefs to the panel for drawing. Call [`finish`](Frame::finish) to close it
/// and observe the result; a frame dropped without `finish` (e.g. after `?`
/// returned early) is closed in `Drop` and its close error is discarded in
/// favour of the error already being propagated.
pub struct Frame<'a, P: Panel> {
    panel: &'a mut P,
    open: bool,
}

impl<'a, P: Panel> Frame<'a, P> {
    /// Open a frame on `panel`.
    pub fn begin(panel: &'a mut P) -> Result<Self, P::Error> {
        panel.begin_frame()?;
        Ok(Self { panel, open: true })
    }

    /// Close the frame, returning the transport result.
    pub fn finish(mut self) -> Result<(), P::Error> {
        self.open = false;
        self.panel.end_frame()
    }
}

impl<P: Panel> Deref for Frame<'_, P> {
    type Target = P;

    fn deref(&self) -> &P { self.panel }
}

impl<P: Panel> DerefMut for Frame<'_, P> {
    fn deref_mut(&mut self) -> &mut P { self.panel }
}

impl<P: Panel> Drop for Frame<'_, P> {
    fn drop(&mut self) {
        if self.open {
            let _ = self.panel.end_frame();
        }
    }
}
