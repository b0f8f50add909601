//! Desktop panel backed by an SDL2 window.
//!
//! Keeps two buffers: `ram` holds what a real panel controller would hold,
//! `screen` is what the window shows, i.e. `ram` dimmed by the backlight
//! level. The window is refreshed on `end_frame` and on brightness changes.

use clock_common::colors::BLACK;
use clock_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use clock_common::{Panel, PanelConfig, PanelError};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{SimulatorDisplay, Window};

/// Scale a color by a backlight level (255 = unchanged).
fn dim(
    color: Rgb565,
    level: u8,
) -> Rgb565 {
    let scale = |channel: u8| (u16::from(channel) * u16::from(level) / 255) as u8;
    Rgb565::new(scale(color.r()), scale(color.g()), scale(color.b()))
}

pub struct SimulatorPanel {
    ram: SimulatorDisplay<Rgb565>,
    screen: SimulatorDisplay<Rgb565>,
    window: Window,
    brightness: u8,
    initialized: bool,
}

impl SimulatorPanel {
    pub fn new(window: Window) -> Self {
        let size = Size::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        Self {
            ram: SimulatorDisplay::new(size),
            screen: SimulatorDisplay::new(size),
            window,
            brightness: u8::MAX,
            initialized: false,
        }
    }

    /// The window, for event polling.
    pub fn window_mut(&mut self) -> &mut Window { &mut self.window }

    fn check_initialized(&self) -> Result<(), PanelError> {
        if self.initialized { Ok(()) } else { Err(PanelError::NotInitialized) }
    }

    /// Copy `ram` to the window through the backlight.
    fn present(&mut self) {
        let level = self.brightness;
        let ram = &self.ram;
        let pixels = ram.bounding_box().points().map(|point| Pixel(point, dim(ram.get_pixel(point), level)));
        // SimulatorDisplay never fails to draw
        let Ok(()) = self.screen.draw_iter(pixels);
        self.window.update(&self.screen);
    }
}

impl OriginDimensions for SimulatorPanel {
    fn size(&self) -> Size { self.ram.size() }
}

impl DrawTarget for SimulatorPanel {
    type Color = Rgb565;
    type Error = PanelError;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.check_initialized()?;
        self.ram.draw_iter(pixels).map_err(|never| match never {})
    }
}

impl Panel for SimulatorPanel {
    fn init(
        &mut self,
        config: &PanelConfig,
    ) -> Result<(), Self::Error> {
        if Size::new(config.width, config.height) != self.ram.size() {
            return Err(PanelError::InvalidConfig);
        }
        let Ok(()) = self.ram.clear(BLACK);
        self.initialized = true;
        self.present();
        Ok(())
    }

    fn set_brightness(
        &mut self,
        level: u8,
    ) -> Result<(), Self::Error> {
        self.brightness = level;
        if self.initialized {
            self.present();
        }
        Ok(())
    }

    fn begin_frame(&mut self) -> Result<(), Self::Error> { self.check_initialized() }

    fn end_frame(&mut self) -> Result<(), Self::Error> {
        self.check_initialized()?;
        self.present();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dim() {
        let color = Rgb565::new(31, 63, 31);
        assert_eq!(dim(color, 255), color);
        assert_eq!(dim(color, 0), Rgb565::BLACK);
        assert_eq!(dim(color, 128), Rgb565::new(15, 31, 15));
    }
}
