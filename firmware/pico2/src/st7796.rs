//! Blocking ST7796S panel driver for embassy-rp.
//!
//! Implements [`Panel`] on top of a RAM [`Framebuffer`]: pixel writes only
//! touch RAM, and `end_frame` sends the dirty window over SPI. A one-second
//! clock tick changes a few digits at most, so a flush is usually a few
//! kilobytes instead of the full 300 KB frame.
//!
//! # Frame Flush
//!
//! 1. CASET/RASET set the address window to the dirty rectangle
//! 2. RAMWR, then the window rows top to bottom with CS held low
//! 3. RGB666 panels get each row expanded to 3 bytes per pixel on the fly
//!
//! If a transfer fails the dirty window is kept, so the next frame sends it
//! again.

use clock_common::{ColorFormat, Panel, PanelConfig, PanelError};
use clock_pico2::command::{
    CASET, COLMOD, DISPON, INVON, MADCTL, NORON, RAMWR, RASET, SLPOUT, SWRESET, address_window, colmod, madctl,
    validate,
};
use clock_pico2::framebuffer::{Framebuffer, WIDTH, expand_to_rgb666};
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::pwm::Pwm;
use embassy_rp::spi::{Blocking, Spi};
use embassy_time::{Duration, block_for};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::display::backlight_pwm_config;

/// ST7796S panel: SPI link, control pins, backlight PWM and framebuffer.
pub struct St7796<'d> {
    spi: Spi<'d, SPI0, Blocking>,
    dc: Output<'d>,
    cs: Output<'d>,
    backlight: Pwm<'d>,
    framebuffer: Framebuffer<'d>,
    /// Wire format, set by `init`.
    format: Option<ColorFormat>,
}

impl<'d> St7796<'d> {
    pub fn new(
        spi: Spi<'d, SPI0, Blocking>,
        dc: Output<'d>,
        cs: Output<'d>,
        backlight: Pwm<'d>,
        framebuffer: Framebuffer<'d>,
    ) -> Self {
        Self { spi, dc, cs, backlight, framebuffer, format: None }
    }

    /// Send a command byte (DC low) followed by its parameters (DC high).
    fn command(
        &mut self,
        cmd: u8,
        params: &[u8],
    ) -> Result<(), PanelError> {
        self.cs.set_low();
        self.dc.set_low();
        let mut result = self.spi.blocking_write(&[cmd]);
        if result.is_ok() && !params.is_empty() {
            self.dc.set_high();
            result = self.spi.blocking_write(params);
        }
        self.cs.set_high();
        result.map_err(|_| PanelError::Communication)
    }

    fn initialized_format(&self) -> Result<ColorFormat, PanelError> { self.format.ok_or(PanelError::NotInitialized) }

    /// Send the dirty window, if any.
    fn flush(
        &mut self,
        format: ColorFormat,
    ) -> Result<(), PanelError> {
        let Some(area) = self.framebuffer.take_dirty() else {
            return Ok(());
        };
        let result = self.write_window(&area, format);
        if result.is_err() {
            self.framebuffer.mark_dirty(area);
        }
        result
    }

    fn write_window(
        &mut self,
        area: &Rectangle,
        format: ColorFormat,
    ) -> Result<(), PanelError> {
        let Some((caset, raset)) = address_window(area) else {
            return Ok(());
        };
        self.command(CASET, &caset)?;
        self.command(RASET, &raset)?;

        // RAMWR then the pixel rows with CS held low
        self.cs.set_low();
        self.dc.set_low();
        let result = self.stream_rows(area, format);
        self.cs.set_high();
        result
    }

    fn stream_rows(
        &mut self,
        area: &Rectangle,
        format: ColorFormat,
    ) -> Result<(), PanelError> {
        self.spi.blocking_write(&[RAMWR]).map_err(|_| PanelError::Communication)?;
        self.dc.set_high();

        let x = area.top_left.x as usize;
        let width = area.size.width as usize;
        let mut wide = [0u8; WIDTH * 3];
        for y in area.rows() {
            let row = self.framebuffer.row(x, y as usize, width);
            let written = match format {
                ColorFormat::Rgb565 => self.spi.blocking_write(row),
                ColorFormat::Rgb666 => {
                    let len = expand_to_rgb666(row, &mut wide);
                    self.spi.blocking_write(&wide[..len])
                }
            };
            written.map_err(|_| PanelError::Communication)?;
        }
        Ok(())
    }
}

impl OriginDimensions for St7796<'_> {
    fn size(&self) -> Size { self.framebuffer.size() }
}

impl DrawTarget for St7796<'_> {
    type Color = Rgb565;
    type Error = PanelError;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.initialized_format()?;
        self.framebuffer.draw_iter(pixels).map_err(|never| match never {})
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.initialized_format()?;
        self.framebuffer.fill_solid(area, color).map_err(|never| match never {})
    }
}

impl Panel for St7796<'_> {
    fn init(
        &mut self,
        config: &PanelConfig,
    ) -> Result<(), Self::Error> {
        validate(config)?;

        // Software reset
        self.command(SWRESET, &[])?;
        block_for(Duration::from_millis(150));

        // Exit sleep mode
        self.command(SLPOUT, &[])?;
        block_for(Duration::from_millis(120));

        self.command(COLMOD, &[colmod(config.color_format)])?;
        self.command(MADCTL, &[madctl(config.rotation)])?;

        // Inversion on (IPS modules)
        self.command(INVON, &[])?;
        self.command(NORON, &[])?;
        self.command(DISPON, &[])?;
        block_for(Duration::from_millis(10));

        self.format = Some(config.color_format);
        Ok(())
    }

    fn set_brightness(
        &mut self,
        level: u8,
    ) -> Result<(), Self::Error> {
        self.backlight.set_config(&backlight_pwm_config(level));
        Ok(())
    }

    fn begin_frame(&mut self) -> Result<(), Self::Error> {
        self.initialized_format()?;
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), Self::Error> {
        let format = self.initialized_format()?;
        self.flush(format)
    }
}
