/// Clock face renderer.
/// Formats the wall-clock time and rasterizes it with rusttype onto a
/// tiny-skia pixmap, anchored at the text box's lower-left corner.
use chrono::{DateTime, Local, TimeZone};
use tiny_skia::Pixmap;

use crate::animation::bounce::Point;

/// Source of the wall-clock time shown on the face
pub trait TimeSource {
    fn now(&self) -> DateTime<Local>;
}

/// Host local time
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// 24-hour, zero-padded `HH:mm:ss`
pub fn format_time<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%H:%M:%S").to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
}

pub struct ClockFace {
    font: Option<rusttype::Font<'static>>,
    scale: rusttype::Scale,
}

impl ClockFace {
    pub fn new(font: Option<rusttype::Font<'static>>, size: f32) -> Self {
        Self {
            font,
            scale: rusttype::Scale::uniform(size),
        }
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Advance width and line height of `text`. Zero without a font.
    pub fn measure(&self, text: &str) -> TextExtent {
        let Some(font) = &self.font else {
            return TextExtent::default();
        };
        let v_metrics = font.v_metrics(self.scale);
        let width = font
            .layout(text, self.scale, rusttype::point(0.0, 0.0))
            .last()
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0);
        TextExtent {
            width,
            height: v_metrics.ascent - v_metrics.descent,
        }
    }

    /// Draw `text` with the lower-left corner of its box at `origin`
    /// (surface units, y up). Glyphs falling outside the pixmap are clipped.
    pub fn draw(&self, target: &mut Pixmap, text: &str, origin: Point, (r, g, b): (u8, u8, u8)) {
        let Some(font) = &self.font else {
            return;
        };
        let extent = self.measure(text);
        let v_metrics = font.v_metrics(self.scale);

        // flip to the pixmap's top-left origin
        let top = target.height() as f32 - origin.y as f32 - extent.height;
        let baseline = rusttype::point(origin.x as f32, top + v_metrics.ascent);

        let tw = target.width() as i32;
        let th = target.height() as i32;
        let data = target.data_mut();

        for glyph in font.layout(text, self.scale, baseline) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, v| {
                let px = bb.min.x + gx as i32;
                let py = bb.min.y + gy as i32;
                if px < 0 || px >= tw || py < 0 || py >= th || v <= 0.0 {
                    return;
                }
                let idx = ((py * tw + px) * 4) as usize;
                blend_over(&mut data[idx..idx + 4], [r, g, b], v.min(1.0));
            });
        }
    }
}

/// Source-over of an opaque colour at coverage `a` onto a premultiplied pixel
fn blend_over(dst: &mut [u8], src: [u8; 3], a: f32) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d = (s as f32 * a + *d as f32 * (1.0 - a)).round() as u8;
    }
    dst[3] = (255.0 * a + dst[3] as f32 * (1.0 - a)).round() as u8;
}
