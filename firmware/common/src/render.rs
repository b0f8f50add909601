//! Incremental redraw of the clock face.
//!
//! This module provides:
//! - [`Region`] / [`RegionSet`] - Named screen regions and a set of them
//! - [`Variant`] - Which elements a build shows (time only, or time + sensors)
//! - [`Theme`] - Digit color, background and backlight level
//! - [`Renderer`] - Owns the panel and the retained snapshot, repaints only
//!   what changed
//!
//! # Update Strategy
//!
//! | Region | First pass | Later passes |
//! |--------|-----------|--------------|
//! | Decoration (colon, unit signs) | Painted once | Never |
//! | Hours / Minutes | Painted | When the value changed |
//! | Seconds | Painted | Every pass |
//! | Temperature / Humidity / Pressure | Painted (blank if `None`) | When the reading changed |
//! | Status icon | Painted | When the Wi-Fi or sync flag changed |
//!
//! A field repaint clears the field rectangle to the background and then
//! stencils the digits, so old digits never bleed through.
//!
//! # Failure Handling
//!
//! Every pass runs inside a [`Frame`]. If a pixel write or the frame close
//! fails, the error is returned, the frame is still closed and the retained
//! snapshot is left untouched; the next pass diffs against the old state and
//! repaints whatever the failed pass may have missed.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::Rectangle;

use crate::assets::icons::{COLON, DEGREE, MMHG, PERCENT, SYNC_PENDING, WIFI_OFF};
use crate::assets::{BIG, Font, SMALL};
use crate::colors::{AMBER, BLACK, DIM_BLUE, DIM_GRAY, GRAY, RED, RED_ORANGE};
use crate::compositor::{fill_rect, paint};
use crate::config::layout::{
    COLON_POS, DEGREE_POS, HOURS_AREA, HUMIDITY_AREA, HUMIDITY_DIGITS, MINUTES_AREA, MMHG_POS, PERCENT_POS,
    PRESSURE_AREA, PRESSURE_DIGITS, SECONDS_AREA, STATUS_AREA, TEMPERATURE_AREA, TEMPERATURE_DIGITS, TIME_DIGITS,
};
use crate::config::{BRIGHTNESS_DIM, BRIGHTNESS_FULL, BRIGHTNESS_MEDIUM};
use crate::number::draw_number;
use crate::panel::{Frame, Panel, PanelConfig};
use crate::snapshot::{DisplaySnapshot, Link};

// =============================================================================
// Regions
// =============================================================================

/// A part of the screen that is painted as a unit.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Region {
    /// Static elements: hour/minute colon and unit signs.
    Decoration,
    /// Connectivity icon.
    Status,
    Hours,
    Minutes,
    Seconds,
    Temperature,
    Humidity,
    Pressure,
}

impl Region {
    pub const ALL: [Self; 8] = [
        Self::Decoration,
        Self::Status,
        Self::Hours,
        Self::Minutes,
        Self::Seconds,
        Self::Temperature,
        Self::Humidity,
        Self::Pressure,
    ];

    /// The fixed rectangle of a dynamic region. Decoration is spread over
    /// several places and has none.
    pub const fn area(self) -> Option<Rectangle> {
        match self {
            Self::Decoration => None,
            Self::Status => Some(STATUS_AREA),
            Self::Hours => Some(HOURS_AREA),
            Self::Minutes => Some(MINUTES_AREA),
            Self::Seconds => Some(SECONDS_AREA),
            Self::Temperature => Some(TEMPERATURE_AREA),
            Self::Humidity => Some(HUMIDITY_AREA),
            Self::Pressure => Some(PRESSURE_AREA),
        }
    }

    const fn bit(self) -> u8 { 1 << self as u8 }
}

/// Set of [`Region`]s, one bit each.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegionSet(u8);

impl RegionSet {
    pub const EMPTY: Self = Self(0);

    pub const fn of(regions: &[Region]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < regions.len() {
            bits |= regions[i].bit();
            i += 1;
        }
        Self(bits)
    }

    pub fn insert(
        &mut self,
        region: Region,
    ) {
        self.0 |= region.bit();
    }

    pub const fn contains(
        self,
        region: Region,
    ) -> bool {
        self.0 & region.bit() != 0
    }

    pub const fn len(self) -> usize { self.0.count_ones() as usize }

    pub const fn is_empty(self) -> bool { self.0 == 0 }

    pub const fn intersection(
        self,
        other: Self,
    ) -> Self {
        Self(self.0 & other.0)
    }

    /// Members in painting order.
    pub fn iter(self) -> impl Iterator<Item = Region> { Region::ALL.into_iter().filter(move |r| self.contains(*r)) }
}

impl core::fmt::Debug for RegionSet {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

// =============================================================================
// Variant and Theme
// =============================================================================

/// Which elements the clock face carries.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Variant {
    /// Hours, minutes and seconds only. Sensor and link fields are ignored.
    Clock,
    /// Time plus temperature, humidity, pressure and the status icon.
    #[default]
    Station,
}

impl Variant {
    /// Regions this variant ever paints.
    pub const fn regions(self) -> RegionSet {
        match self {
            Self::Clock => RegionSet::of(&[Region::Decoration, Region::Hours, Region::Minutes, Region::Seconds]),
            Self::Station => RegionSet::of(&Region::ALL),
        }
    }
}

/// Colors and backlight level of the clock face.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Theme {
    /// Digits and the colon.
    pub digits: Rgb565,
    pub background: Rgb565,
    /// Backlight level passed to [`Panel::set_brightness`].
    pub brightness: u8,
}

impl Theme {
    pub const OFFLINE: Self = Self { digits: DIM_BLUE, background: BLACK, brightness: BRIGHTNESS_DIM };

    pub const UNSYNCED: Self = Self { digits: AMBER, background: BLACK, brightness: BRIGHTNESS_MEDIUM };

    pub const ONLINE: Self = Self { digits: RED, background: BLACK, brightness: BRIGHTNESS_FULL };

    /// Signal the link state through color and brightness.
    pub const fn for_link(link: Link) -> Self {
        match link {
            Link::Offline => Self::OFFLINE,
            Link::Unsynced => Self::UNSYNCED,
            Link::Online => Self::ONLINE,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::ONLINE }
}

/// Unit signs next to the measurements.
const UNIT_COLOR: Rgb565 = DIM_GRAY;

// =============================================================================
// Renderer
// =============================================================================

/// What the panel currently shows.
#[derive(Clone, Copy, Debug)]
enum Retained {
    /// Unknown panel content; the next pass paints everything.
    Uninitialized,
    /// The panel shows this snapshot.
    Primed(DisplaySnapshot),
}

/// Retained-mode clock face renderer.
///
/// Owns the panel. Each [`redraw`](Self::redraw) compares the new snapshot
/// with the one last shown and repaints only the regions whose fields
/// differ.
pub struct Renderer<P: Panel> {
    panel: P,
    retained: Retained,
    theme: Theme,
    variant: Variant,
}

impl<P: Panel> Renderer<P> {
    /// Initialize `panel` and apply the default theme's brightness.
    /// The first [`redraw`](Self::redraw) paints the full screen.
    pub fn new(
        mut panel: P,
        config: &PanelConfig,
        variant: Variant,
    ) -> Result<Self, P::Error> {
        let theme = Theme::default();
        panel.init(config)?;
        panel.set_brightness(theme.brightness)?;
        Ok(Self { panel, retained: Retained::Uninitialized, theme, variant })
    }

    /// Bring the panel up to date with `snapshot`.
    ///
    /// Returns the regions that were painted.
    pub fn redraw(
        &mut self,
        snapshot: &DisplaySnapshot,
    ) -> Result<RegionSet, P::Error> {
        let dirty = self.dirty_regions(snapshot);
        let (theme, variant) = (self.theme, self.variant);

        let mut frame = Frame::begin(&mut self.panel)?;
        if matches!(self.retained, Retained::Uninitialized) {
            let screen = frame.bounding_box();
            fill_rect(&mut *frame, &screen, theme.background)?;
        }
        for region in dirty.iter() {
            paint_region(&mut *frame, region, snapshot, &theme, variant)?;
        }
        frame.finish()?;

        self.retained = Retained::Primed(*snapshot);
        Ok(dirty)
    }

    /// Switch colors and backlight. The next pass repaints everything in the
    /// new colors.
    pub fn set_theme(
        &mut self,
        theme: Theme,
    ) -> Result<(), P::Error> {
        self.panel.set_brightness(theme.brightness)?;
        self.theme = theme;
        self.retained = Retained::Uninitialized;
        Ok(())
    }

    /// Forget what the panel shows; the next pass repaints everything.
    pub fn invalidate(&mut self) { self.retained = Retained::Uninitialized; }

    /// Whether the panel content is known (a pass has completed since the
    /// last invalidation).
    pub const fn is_primed(&self) -> bool { matches!(self.retained, Retained::Primed(_)) }

    pub const fn theme(&self) -> Theme { self.theme }

    pub const fn variant(&self) -> Variant { self.variant }

    pub const fn panel(&self) -> &P { &self.panel }

    pub fn panel_mut(&mut self) -> &mut P { &mut self.panel }

    pub fn into_panel(self) -> P { self.panel }

    fn dirty_regions(
        &self,
        next: &DisplaySnapshot,
    ) -> RegionSet {
        let prev = match self.retained {
            Retained::Uninitialized => return self.variant.regions(),
            Retained::Primed(prev) => prev,
        };

        let mut dirty = RegionSet::EMPTY;
        dirty.insert(Region::Seconds);
        if prev.hours != next.hours {
            dirty.insert(Region::Hours);
        }
        if prev.minutes != next.minutes {
            dirty.insert(Region::Minutes);
        }
        if prev.wifi_connected != next.wifi_connected || prev.time_synced != next.time_synced {
            dirty.insert(Region::Status);
        }
        if prev.temperature != next.temperature {
            dirty.insert(Region::Temperature);
        }
        if prev.humidity != next.humidity {
            dirty.insert(Region::Humidity);
        }
        if prev.pressure != next.pressure {
            dirty.insert(Region::Pressure);
        }
        dirty.intersection(self.variant.regions())
    }
}

// =============================================================================
// Region Painting
// =============================================================================

fn paint_region<D>(
    target: &mut D,
    region: Region,
    snapshot: &DisplaySnapshot,
    theme: &Theme,
    variant: Variant,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    match region {
        Region::Decoration => paint_decoration(target, theme, variant),
        Region::Status => paint_status(target, snapshot.link(), theme),
        Region::Hours => paint_field(target, &HOURS_AREA, &BIG, Some(snapshot.hours.into()), TIME_DIGITS, theme),
        Region::Minutes => paint_field(target, &MINUTES_AREA, &BIG, Some(snapshot.minutes.into()), TIME_DIGITS, theme),
        Region::Seconds => paint_field(target, &SECONDS_AREA, &SMALL, Some(snapshot.seconds.into()), TIME_DIGITS, theme),
        Region::Temperature => paint_field(
            target,
            &TEMPERATURE_AREA,
            &SMALL,
            snapshot.temperature_display(),
            TEMPERATURE_DIGITS,
            theme,
        ),
        Region::Humidity => {
            paint_field(target, &HUMIDITY_AREA, &SMALL, snapshot.humidity_display(), HUMIDITY_DIGITS, theme)
        }
        Region::Pressure => {
            paint_field(target, &PRESSURE_AREA, &SMALL, snapshot.pressure_display(), PRESSURE_DIGITS, theme)
        }
    }
}

fn paint_decoration<D>(
    target: &mut D,
    theme: &Theme,
    variant: Variant,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    paint(target, COLON_POS, &COLON, theme.digits)?;
    if variant == Variant::Station {
        paint(target, DEGREE_POS, &DEGREE, UNIT_COLOR)?;
        paint(target, PERCENT_POS, &PERCENT, UNIT_COLOR)?;
        paint(target, MMHG_POS, &MMHG, UNIT_COLOR)?;
    }
    Ok(())
}

/// Exactly one of: no-wifi icon, sync-pending icon, nothing.
fn paint_status<D>(
    target: &mut D,
    link: Link,
    theme: &Theme,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    fill_rect(target, &STATUS_AREA, theme.background)?;
    match link {
        Link::Offline => paint(target, STATUS_AREA.top_left, &WIFI_OFF, GRAY),
        Link::Unsynced => paint(target, STATUS_AREA.top_left, &SYNC_PENDING, RED_ORANGE),
        Link::Online => Ok(()),
    }
}

/// Clear `area` and draw `value` into it. `None` leaves the area blank.
fn paint_field<D>(
    target: &mut D,
    area: &Rectangle,
    font: &Font,
    value: Option<u32>,
    min_digits: usize,
    theme: &Theme,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    fill_rect(target, area, theme.background)?;
    if let Some(value) = value {
        draw_number(target, font, area.top_left, theme.digits, value, min_digits)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use embedded_graphics::geometry::{Point, Size};
    use embedded_graphics::primitives::PointsIter;

    use super::*;
    use crate::assets::Glyph;
    use crate::config::{PANEL, SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::panel::PanelError;
    use crate::panel::memory::MemoryPanel;

    fn station() -> DisplaySnapshot {
        DisplaySnapshot::at(12, 34, 56).with_link(true, true).with_environment(Some(21.5), Some(40.2), Some(1000.0))
    }

    fn primed(
        variant: Variant,
        snapshot: &DisplaySnapshot,
    ) -> Renderer<MemoryPanel> {
        let mut renderer = Renderer::new(MemoryPanel::new(), &PANEL, variant).unwrap();
        renderer.redraw(snapshot).unwrap();
        renderer.panel_mut().reset_draws();
        renderer
    }

    fn set(regions: &[Region]) -> RegionSet { RegionSet::of(regions) }

    /// Every draw call of the last pass stayed inside the given regions.
    fn assert_draws_within(
        panel: &MemoryPanel,
        regions: RegionSet,
    ) {
        for draw in &panel.draws {
            let inside = regions.iter().filter_map(Region::area).any(|area| {
                draw.bottom_right().is_some_and(|br| area.contains(draw.top_left) && area.contains(br))
            });
            assert!(inside, "draw {draw:?} outside {regions:?}");
        }
    }

    #[test]
    fn test_new_initializes_panel() {
        let renderer = Renderer::new(MemoryPanel::new(), &PANEL, Variant::Station).unwrap();
        assert_eq!(renderer.panel().config, Some(PANEL));
        assert_eq!(renderer.panel().brightness, Some(BRIGHTNESS_FULL));
        assert!(!renderer.is_primed());
        assert_eq!(renderer.panel().frames_begun, 0);
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = PanelConfig { width: 320, ..PANEL };
        assert_eq!(Renderer::new(MemoryPanel::new(), &config, Variant::Clock).err(), Some(PanelError::InvalidConfig));
    }

    #[test]
    fn test_first_pass_paints_everything() {
        let mut panel = MemoryPanel::new();
        panel.flood(RED);
        let mut renderer = Renderer::new(panel, &PANEL, Variant::Station).unwrap();

        let painted = renderer.redraw(&station()).unwrap();
        assert_eq!(painted, RegionSet::of(&Region::ALL));
        assert!(renderer.is_primed());

        let panel = renderer.panel();
        assert_eq!(panel.frames_begun, 1);
        assert_eq!(panel.frames_ended, 1);
        // Whole screen cleared first.
        assert_eq!(panel.draws[0], Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)));
        // Digits lit in the theme color.
        for region in
            [Region::Hours, Region::Minutes, Region::Seconds, Region::Temperature, Region::Humidity, Region::Pressure]
        {
            let area = region.area().unwrap();
            assert!(panel.count(&area, Theme::ONLINE.digits) > 0, "{region:?} not painted");
        }
        // Each decoration element painted exactly once.
        let decorations = [
            (COLON_POS, &COLON, Theme::ONLINE.digits),
            (DEGREE_POS, &DEGREE, UNIT_COLOR),
            (PERCENT_POS, &PERCENT, UNIT_COLOR),
            (MMHG_POS, &MMHG, UNIT_COLOR),
        ];
        for (origin, glyph, color) in decorations {
            let area = Rectangle::new(origin, glyph.size());
            let stencils = panel
                .draws
                .iter()
                .filter(|draw| draw.bottom_right().is_some_and(|br| area.contains(draw.top_left) && area.contains(br)))
                .count();
            assert_eq!(stencils, 1, "decoration at {origin:?}");
            assert!(panel.count(&area, color) > 0, "decoration at {origin:?} not lit");
        }
        // Synced: status area blank.
        assert_eq!(panel.count(&STATUS_AREA, BLACK), STATUS_AREA.points().count());
    }

    #[test]
    fn test_unchanged_snapshot_repaints_only_seconds() {
        let snapshot = station();
        let mut renderer = primed(Variant::Station, &snapshot);

        let painted = renderer.redraw(&snapshot).unwrap();
        assert_eq!(painted, set(&[Region::Seconds]));
        assert_draws_within(renderer.panel(), painted);
        assert_eq!(renderer.panel().frames_ended, 2);
    }

    #[test]
    fn test_single_field_change_repaints_only_that_field() {
        let base = station();
        let cases = [
            (Region::Hours, DisplaySnapshot { hours: 13, ..base }),
            (Region::Minutes, DisplaySnapshot { minutes: 35, ..base }),
            (Region::Status, DisplaySnapshot { time_synced: false, ..base }),
            (Region::Temperature, DisplaySnapshot { temperature: Some(22.0), ..base }),
            (Region::Humidity, DisplaySnapshot { humidity: Some(41.0), ..base }),
            (Region::Pressure, DisplaySnapshot { pressure: Some(1010.0), ..base }),
            (Region::Temperature, DisplaySnapshot { temperature: None, ..base }),
        ];

        for (region, next) in cases {
            let mut renderer = primed(Variant::Station, &base);
            let painted = renderer.redraw(&next).unwrap();
            assert_eq!(painted, set(&[region, Region::Seconds]), "changing {region:?}");
            assert_draws_within(renderer.panel(), painted);
        }
    }

    #[test]
    fn test_fractional_reading_change_repaints_field() {
        let base = station();
        let cases = [
            (Region::Temperature, DisplaySnapshot { temperature: Some(21.9), ..base }),
            (Region::Humidity, DisplaySnapshot { humidity: Some(40.7), ..base }),
            (Region::Pressure, DisplaySnapshot { pressure: Some(1000.3), ..base }),
        ];

        for (region, next) in cases {
            let mut renderer = primed(Variant::Station, &base);
            assert_eq!(renderer.redraw(&next).unwrap(), set(&[region, Region::Seconds]), "changing {region:?}");
        }
    }

    #[test]
    fn test_sync_flag_change_while_offline_repaints_status() {
        let base = station().with_link(false, true);
        let mut renderer = primed(Variant::Station, &base);

        let painted = renderer.redraw(&base.with_link(false, false)).unwrap();
        assert_eq!(painted, set(&[Region::Status, Region::Seconds]));
        // Still offline: the no-wifi icon stays.
        let icon_pixels: usize = WIFI_OFF.mask().iter().map(|b| b.count_ones() as usize).sum();
        assert_eq!(renderer.panel().count(&STATUS_AREA, GRAY), icon_pixels);
    }

    #[test]
    fn test_missing_reading_blanks_region() {
        let base = station();
        let mut renderer = primed(Variant::Station, &base);
        let area = HUMIDITY_AREA;
        assert!(renderer.panel().count(&area, Theme::ONLINE.digits) > 0);

        renderer.redraw(&DisplaySnapshot { humidity: None, ..base }).unwrap();
        assert_eq!(renderer.panel().count(&area, BLACK), area.points().count());
    }

    #[test]
    fn test_status_icon_exclusivity() {
        let icon_pixels = |glyph: &Glyph| -> usize { glyph.mask().iter().map(|b| b.count_ones() as usize).sum() };
        let base = station();
        let mut renderer = primed(Variant::Station, &base);
        let area = STATUS_AREA;

        renderer.redraw(&base.with_link(false, false)).unwrap();
        assert_eq!(renderer.panel().count(&area, GRAY), icon_pixels(&WIFI_OFF));
        assert_eq!(renderer.panel().count(&area, RED_ORANGE), 0);

        renderer.redraw(&base.with_link(true, false)).unwrap();
        assert_eq!(renderer.panel().count(&area, GRAY), 0);
        assert_eq!(renderer.panel().count(&area, RED_ORANGE), icon_pixels(&SYNC_PENDING));

        renderer.redraw(&base.with_link(true, true)).unwrap();
        assert_eq!(renderer.panel().count(&area, BLACK), area.points().count());

        // Wi-Fi lost while synced: straight to the no-wifi icon.
        renderer.redraw(&base.with_link(false, true)).unwrap();
        assert_eq!(renderer.panel().count(&area, GRAY), icon_pixels(&WIFI_OFF));
    }

    #[test]
    fn test_midnight_rollover() {
        let mut renderer = Renderer::new(MemoryPanel::new(), &PANEL, Variant::Clock).unwrap();

        let first = renderer.redraw(&DisplaySnapshot::at(23, 59, 58)).unwrap();
        assert!(first.contains(Region::Hours));
        assert!(first.contains(Region::Minutes));
        assert!(first.contains(Region::Seconds));

        let second = renderer.redraw(&DisplaySnapshot::at(23, 59, 59)).unwrap();
        assert_eq!(second, set(&[Region::Seconds]));

        let third = renderer.redraw(&DisplaySnapshot::at(0, 0, 0)).unwrap();
        assert_eq!(third, set(&[Region::Hours, Region::Minutes, Region::Seconds]));
    }

    #[test]
    fn test_clock_variant_ignores_sensors_and_link() {
        let base = station();
        let mut renderer = primed(Variant::Clock, &base);
        let next = DisplaySnapshot { temperature: None, pressure: Some(900.0), wifi_connected: false, ..base };

        assert_eq!(renderer.redraw(&next).unwrap(), set(&[Region::Seconds]));
        let panel = renderer.panel();
        assert_eq!(panel.count(&TEMPERATURE_AREA, BLACK), TEMPERATURE_AREA.points().count());
        assert_eq!(panel.count(&STATUS_AREA, BLACK), STATUS_AREA.points().count());
        assert_eq!(panel.count(&Rectangle::new(DEGREE_POS, DEGREE.size()), BLACK), DEGREE.size().width as usize * 16);
    }

    #[test]
    fn test_failed_pass_keeps_retained_state() {
        let base = station();
        let mut renderer = primed(Variant::Station, &base);
        let next = DisplaySnapshot { minutes: 35, ..base };

        renderer.panel_mut().fail_draw = true;
        assert_eq!(renderer.redraw(&next), Err(PanelError::Communication));
        assert!(!renderer.panel().in_frame());
        assert_eq!(renderer.panel().frames_begun, renderer.panel().frames_ended);

        // Still diffs against the old snapshot.
        renderer.panel_mut().fail_draw = false;
        assert_eq!(renderer.redraw(&next).unwrap(), set(&[Region::Minutes, Region::Seconds]));
    }

    #[test]
    fn test_failed_frame_close_keeps_retained_state() {
        let mut renderer = Renderer::new(MemoryPanel::new(), &PANEL, Variant::Clock).unwrap();
        renderer.panel_mut().fail_end = true;
        assert!(renderer.redraw(&DisplaySnapshot::at(1, 2, 3)).is_err());
        assert!(!renderer.is_primed());

        renderer.panel_mut().fail_end = false;
        assert_eq!(renderer.redraw(&DisplaySnapshot::at(1, 2, 3)).unwrap(), Variant::Clock.regions());
    }

    #[test]
    fn test_failed_frame_open_paints_nothing() {
        let mut renderer = Renderer::new(MemoryPanel::new(), &PANEL, Variant::Clock).unwrap();
        renderer.panel_mut().fail_begin = true;
        assert!(renderer.redraw(&DisplaySnapshot::at(1, 2, 3)).is_err());
        assert!(renderer.panel().draws.is_empty());
        assert_eq!(renderer.panel().frames_ended, 0);
    }

    #[test]
    fn test_theme_change_forces_full_repaint() {
        let base = station();
        let mut renderer = primed(Variant::Station, &base);

        let theme = Theme::for_link(Link::Unsynced);
        renderer.set_theme(theme).unwrap();
        assert_eq!(renderer.panel().brightness, Some(BRIGHTNESS_MEDIUM));
        assert_eq!(renderer.theme(), theme);

        assert_eq!(renderer.redraw(&base).unwrap(), RegionSet::of(&Region::ALL));
        let panel = renderer.panel();
        assert_eq!(panel.count(&HOURS_AREA, RED), 0);
        assert!(panel.count(&HOURS_AREA, AMBER) > 0);
        assert!(panel.count(&Rectangle::new(COLON_POS, COLON.size()), AMBER) > 0);
    }

    #[test]
    fn test_invalidate_forces_full_repaint() {
        let base = station();
        let mut renderer = primed(Variant::Clock, &base);
        renderer.invalidate();
        assert!(!renderer.is_primed());
        assert_eq!(renderer.redraw(&base).unwrap(), Variant::Clock.regions());
    }

    #[test]
    fn test_theme_for_link() {
        assert_eq!(Theme::for_link(Link::Offline).brightness, BRIGHTNESS_DIM);
        assert_eq!(Theme::for_link(Link::Offline).digits, DIM_BLUE);
        assert_eq!(Theme::for_link(Link::Online), Theme::default());
    }

    #[test]
    fn test_region_set() {
        let mut regions = RegionSet::EMPTY;
        assert!(regions.is_empty());
        regions.insert(Region::Pressure);
        regions.insert(Region::Hours);
        regions.insert(Region::Hours);
        assert_eq!(regions.len(), 2);
        assert_eq!(regions.iter().collect::<Vec<_>>(), vec![Region::Hours, Region::Pressure]);
        assert_eq!(format!("{regions:?}"), "{Hours, Pressure}");
        assert_eq!(Variant::Clock.regions().len(), 4);
        assert_eq!(Region::Decoration.area(), None);
    }
}
