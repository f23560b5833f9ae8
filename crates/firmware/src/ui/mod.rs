//! Fixed views drawn by the tick core itself.
//!
//! Menu screens are supplied by the application; the core only draws the
//! status line under every menu frame and the locked view shown while the
//! storage is exposed to a USB host.

// Layout arithmetic works on LCD coordinates (at most 212×64), which fit
// i32 with lots of headroom.
#![allow(clippy::cast_possible_wrap, clippy::arithmetic_side_effects)]

use core::fmt::Write as _;

use embedded_graphics::mono_font::{ascii::FONT_6X10, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use platform::{config, BatteryStatus, BATTERY_BARS};

/// Height of the status line in pixels, separator included.
pub const STATUS_LINE_HEIGHT: u32 = 11;

/// Bottom status bar: product name, pack voltage and battery gauge.
pub struct StatusLine;

impl StatusLine {
    /// Draw the status line at the bottom of `display`.
    ///
    /// # Errors
    ///
    /// Returns `D::Error` if any drawing operation fails.
    pub fn render<D, C>(display: &mut D, battery: BatteryStatus) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
        C: PixelColor + From<BinaryColor>,
    {
        let bounds = display.bounding_box();
        let width = bounds.size.width as i32;
        let top = bounds.size.height as i32 - STATUS_LINE_HEIGHT as i32;
        let ink = C::from(BinaryColor::On);
        let text_style = MonoTextStyle::new(&FONT_6X10, ink);
        let top_left = TextStyleBuilder::new().baseline(Baseline::Top).build();

        Line::new(Point::new(0, top), Point::new(width - 1, top))
            .into_styled(PrimitiveStyle::with_stroke(ink, 1))
            .draw(display)?;

        Text::with_text_style(config::APP_NAME, Point::new(1, top + 1), text_style, top_left)
            .draw(display)?;

        // Gauge: one 3px bar per step inside a frame, nub on the right.
        let gauge_width = BATTERY_BARS as i32 * 4 + 2;
        let gauge_left = width - gauge_width - 3;
        Rectangle::new(
            Point::new(gauge_left, top + 2),
            Size::new(gauge_width as u32, 8),
        )
        .into_styled(PrimitiveStyle::with_stroke(ink, 1))
        .draw(display)?;
        Rectangle::new(Point::new(gauge_left + gauge_width, top + 4), Size::new(2, 4))
            .into_styled(PrimitiveStyle::with_fill(ink))
            .draw(display)?;
        for bar in 0..i32::from(battery.clamped_bars()) {
            Rectangle::new(Point::new(gauge_left + 2 + bar * 4, top + 4), Size::new(3, 4))
                .into_styled(PrimitiveStyle::with_fill(ink))
                .draw(display)?;
        }

        let mut voltage: heapless::String<8> = heapless::String::new();
        let _ = write!(
            voltage,
            "{}{}.{}V",
            if battery.warning { "!" } else { "" },
            battery.voltage_dv / 10,
            battery.voltage_dv % 10
        );
        let right = TextStyleBuilder::new()
            .baseline(Baseline::Top)
            .alignment(Alignment::Right)
            .build();
        Text::with_text_style(
            &voltage,
            Point::new(gauge_left - 3, top + 1),
            text_style,
            right,
        )
        .draw(display)?;

        Ok(())
    }
}

/// Fixed view shown while the USB host owns the storage.
pub struct MassStorageView;

impl MassStorageView {
    /// Draw the locked view. Expects a cleared frame.
    ///
    /// # Errors
    ///
    /// Returns `D::Error` if any drawing operation fails.
    pub fn render<D, C>(display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
        C: PixelColor + From<BinaryColor>,
    {
        let bounds = display.bounding_box();
        let center = bounds.center();
        let ink = C::from(BinaryColor::On);
        let text_style = MonoTextStyle::new(&FONT_6X10, ink);
        let centered = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();

        Rectangle::new(bounds.top_left, bounds.size)
            .into_styled(PrimitiveStyle::with_stroke(ink, 1))
            .draw(display)?;

        Text::with_text_style(
            "USB STORAGE",
            Point::new(center.x, center.y - 6),
            text_style,
            centered,
        )
        .draw(display)?;

        Text::with_text_style(
            "Unplug to resume",
            Point::new(center.x, center.y + 6),
            text_style,
            centered,
        )
        .draw(display)?;

        Ok(())
    }
}
