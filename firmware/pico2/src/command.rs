//! ST7796S command set and parameter encoding.
//!
//! The controller shares the MIPI DCS command numbers of the ST7789; what
//! differs is the native resolution (320x480 portrait) and the BGR panel
//! wiring of the common 3.5" modules.

use clock_common::{ColorFormat, PanelConfig, PanelError, Rotation};
use embedded_graphics::primitives::Rectangle;

// ST7796S Commands
pub const SWRESET: u8 = 0x01;
pub const SLPOUT: u8 = 0x11;
pub const NORON: u8 = 0x13;
pub const INVON: u8 = 0x21;
pub const DISPON: u8 = 0x29;
pub const CASET: u8 = 0x2A;
pub const RASET: u8 = 0x2B;
pub const RAMWR: u8 = 0x2C;
pub const MADCTL: u8 = 0x36;
pub const COLMOD: u8 = 0x3A;

// MADCTL flags
const MADCTL_MY: u8 = 0x80; // Row address order
const MADCTL_MX: u8 = 0x40; // Column address order
const MADCTL_MV: u8 = 0x20; // Row/column exchange
const MADCTL_BGR: u8 = 0x08; // BGR subpixel order

/// Native (unrotated) panel width.
pub const NATIVE_WIDTH: u32 = 320;

/// Native (unrotated) panel height.
pub const NATIVE_HEIGHT: u32 = 480;

/// MADCTL parameter for a rotation.
pub const fn madctl(rotation: Rotation) -> u8 {
    let scan = match rotation {
        Rotation::Deg0 => MADCTL_MX,
        Rotation::Deg90 => MADCTL_MV,
        Rotation::Deg180 => MADCTL_MY,
        Rotation::Deg270 => MADCTL_MX | MADCTL_MY | MADCTL_MV,
    };
    scan | MADCTL_BGR
}

/// COLMOD parameter for a pixel format.
pub const fn colmod(format: ColorFormat) -> u8 {
    match format {
        ColorFormat::Rgb565 => 0x55,
        ColorFormat::Rgb666 => 0x66,
    }
}

/// Check that `config` describes this panel: the rotated native resolution
/// must match the configured one.
pub fn validate(config: &PanelConfig) -> Result<(), PanelError> {
    let (width, height) = if config.rotation.swaps_axes() {
        (NATIVE_HEIGHT, NATIVE_WIDTH)
    } else {
        (NATIVE_WIDTH, NATIVE_HEIGHT)
    };
    if config.width != width || config.height != height {
        return Err(PanelError::InvalidConfig);
    }
    Ok(())
}

/// CASET and RASET parameters (inclusive start/end, big-endian) for `area`.
///
/// Returns `None` for an empty area.
pub fn address_window(area: &Rectangle) -> Option<([u8; 4], [u8; 4])> {
    let end = area.bottom_right()?;
    let (x0, y0) = (area.top_left.x as u16, area.top_left.y as u16);
    let (x1, y1) = (end.x as u16, end.y as u16);
    let [x0h, x0l] = x0.to_be_bytes();
    let [x1h, x1l] = x1.to_be_bytes();
    let [y0h, y0l] = y0.to_be_bytes();
    let [y1h, y1l] = y1.to_be_bytes();
    Some(([x0h, x0l, x1h, x1l], [y0h, y0l, y1h, y1l]))
}
