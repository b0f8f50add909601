//! In-memory panel for host tests.
//!
//! Keeps a full RGB565 pixel buffer and records every draw call, frame
//! bracket and brightness change. Faults can be injected per operation.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Point, Size};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::{PointsIter, Rectangle};
use embedded_graphics::Pixel;

use super::{Panel, PanelConfig, PanelError};
use crate::colors::BLACK;
use crate::config::{PANEL, SCREEN_HEIGHT, SCREEN_WIDTH};

pub struct MemoryPanel {
    pixels: Vec<Rgb565>,
    open_frames: u32,
    pub config: Option<PanelConfig>,
    pub brightness: Option<u8>,
    pub frames_begun: u32,
    pub frames_ended: u32,
    /// Bounding box of the pixels of every draw call that wrote something.
    pub draws: Vec<Rectangle>,
    pub pixel_writes: usize,
    pub fail_begin: bool,
    pub fail_end: bool,
    pub fail_draw: bool,
}

impl MemoryPanel {
    pub fn new() -> Self {
        Self {
            pixels: vec![BLACK; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
            open_frames: 0,
            config: None,
            brightness: None,
            frames_begun: 0,
            frames_ended: 0,
            draws: Vec::new(),
            pixel_writes: 0,
            fail_begin: false,
            fail_end: false,
            fail_draw: false,
        }
    }

    /// A panel that already went through `init` with the production config.
    pub fn ready() -> Self {
        let mut panel = Self::new();
        panel.config = Some(PANEL);
        panel
    }

    pub fn in_frame(&self) -> bool { self.open_frames > 0 }

    pub fn pixel(
        &self,
        x: i32,
        y: i32,
    ) -> Rgb565 {
        self.pixels[Self::index(Point::new(x, y))]
    }

    /// Number of pixels in `area` that hold `color`.
    pub fn count(
        &self,
        area: &Rectangle,
        color: Rgb565,
    ) -> usize {
        area.points().filter(|p| self.pixels[Self::index(*p)] == color).count()
    }

    /// Fill the whole buffer without recording a draw call.
    pub fn flood(
        &mut self,
        color: Rgb565,
    ) {
        self.pixels.fill(color);
    }

    /// Forget recorded draw calls.
    pub fn reset_draws(&mut self) {
        self.draws.clear();
        self.pixel_writes = 0;
    }

    fn index(point: Point) -> usize {
        assert!(
            point.x >= 0 && point.y >= 0 && (point.x as u32) < SCREEN_WIDTH && (point.y as u32) < SCREEN_HEIGHT,
            "pixel write outside the panel at {point:?}"
        );
        point.y as usize * SCREEN_WIDTH as usize + point.x as usize
    }

    fn check_write(&self) -> Result<(), PanelError> {
        if self.fail_draw {
            return Err(PanelError::Communication);
        }
        assert!(self.in_frame(), "pixel write outside of a frame");
        Ok(())
    }
}

impl OriginDimensions for MemoryPanel {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for MemoryPanel {
    type Color = Rgb565;
    type Error = PanelError;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.check_write()?;
        let mut min = Point::new(i32::MAX, i32::MAX);
        let mut max = Point::new(i32::MIN, i32::MIN);
        let mut written = 0;
        for Pixel(point, color) in pixels {
            let idx = Self::index(point);
            self.pixels[idx] = color;
            min = min.component_min(point);
            max = max.component_max(point);
            written += 1;
        }
        if written > 0 {
            self.draws.push(Rectangle::with_corners(min, max));
            self.pixel_writes += written;
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.check_write()?;
        for point in area.points() {
            let idx = Self::index(point);
            self.pixels[idx] = color;
        }
        self.draws.push(*area);
        self.pixel_writes += area.points().count();
        Ok(())
    }
}

impl Panel for MemoryPanel {
    fn init(
        &mut self,
        config: &PanelConfig,
    ) -> Result<(), Self::Error> {
        if config.width != SCREEN_WIDTH || config.height != SCREEN_HEIGHT {
            return Err(PanelError::InvalidConfig);
        }
        self.config = Some(*config);
        Ok(())
    }

    fn set_brightness(
        &mut self,
        level: u8,
    ) -> Result<(), Self::Error> {
        self.brightness = Some(level);
        Ok(())
    }

    fn begin_frame(&mut self) -> Result<(), Self::Error> {
        if self.fail_begin {
            return Err(PanelError::Communication);
        }
        if self.config.is_none() {
            return Err(PanelError::NotInitialized);
        }
        assert!(!self.in_frame(), "nested frame");
        self.open_frames += 1;
        self.frames_begun += 1;
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), Self::Error> {
        assert!(self.in_frame(), "end_frame without begin_frame");
        self.open_frames -= 1;
        self.frames_ended += 1;
        if self.fail_end {
            return Err(PanelError::Communication);
        }
        Ok(())
    }
}
