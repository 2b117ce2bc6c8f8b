use crate::geometry;
use egui::{Color32, ColorImage, Pos2, Rect, Vec2};
use image::{Rgba, RgbaImage};

/// The persistent pixel surface strokes are painted onto.
///
/// The canvas is allocated once, at a fixed position on the widget surface,
/// and is never resized. Every pixel mutation bumps [`Canvas::version`] so the
/// texture cache knows when to re-upload.
///
/// One canvas pixel covers one egui point. On displays where
/// `pixels_per_point` is above 1 the texture is magnified with nearest
/// filtering, and saved images have the canvas size in points.
pub struct Canvas {
    pixels: RgbaImage,
    /// Placement within the widget surface.
    rect: Rect,
    version: u64,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("size", &self.pixels.dimensions())
            .field("rect", &self.rect)
            .field("version", &self.version)
            .finish()
    }
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba([color.r(), color.g(), color.b(), 255])
}

impl Canvas {
    pub fn new(rect: Rect, background: Color32) -> Self {
        let width = rect.width().max(1.0) as u32;
        let height = rect.height().max(1.0) as u32;
        Self {
            pixels: RgbaImage::from_pixel(width, height, to_rgba(background)),
            rect,
            version: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        self.pixels
            .get_pixel_checked(x, y)
            .map(|Rgba([r, g, b, _])| Color32::from_rgb(*r, *g, *b))
    }

    /// Whether a surface-local position falls on the canvas.
    pub fn contains(&self, surface_pos: Pos2) -> bool {
        geometry::contains(self.rect, surface_pos)
    }

    /// Converts a surface-local position to canvas pixel space.
    pub fn to_canvas_local(&self, surface_pos: Pos2) -> Pos2 {
        surface_pos - self.rect.min.to_vec2()
    }

    pub fn fill(&mut self, color: Color32) {
        let rgba = to_rgba(color);
        for pixel in self.pixels.pixels_mut() {
            *pixel = rgba;
        }
        self.version += 1;
    }

    /// Fills every pixel within `radius` of `center`.
    pub fn fill_circle(&mut self, center: Pos2, radius: u32, color: Color32) {
        let (cx, cy) = (center.x.round() as i64, center.y.round() as i64);
        let r = i64::from(radius);
        let r_sq = r * r;
        self.fill_where(cx - r, cy - r, cx + r, cy + r, color, |x, y| {
            let (dx, dy) = (x - cx, y - cy);
            dx * dx + dy * dy <= r_sq
        });
    }

    /// Paints a segment `width` pixels wide with flat ends at `start` and `end`.
    pub fn draw_line(&mut self, start: Pos2, end: Pos2, width: u32, color: Color32) {
        let a = Pos2::new(start.x.round(), start.y.round());
        let b = Pos2::new(end.x.round(), end.y.round());
        let half = width as f32 / 2.0;
        let dir: Vec2 = b - a;
        let len_sq = dir.length_sq();

        let reach = half.ceil() as i64;
        let min_x = a.x.min(b.x) as i64 - reach;
        let max_x = a.x.max(b.x) as i64 + reach;
        let min_y = a.y.min(b.y) as i64 - reach;
        let max_y = a.y.max(b.y) as i64 + reach;

        self.fill_where(min_x, min_y, max_x, max_y, color, |x, y| {
            let p = Pos2::new(x as f32, y as f32);
            if len_sq == 0.0 {
                return p.distance(a) <= half;
            }
            let t = (p - a).dot(dir) / len_sq;
            if !(0.0..=1.0).contains(&t) {
                return false;
            }
            let closest = a + dir * t;
            p.distance(closest) <= half
        });
    }

    /// Paints pixels inside the inclusive box for which `inside` holds,
    /// clipped to the canvas.
    fn fill_where(
        &mut self,
        min_x: i64,
        min_y: i64,
        max_x: i64,
        max_y: i64,
        color: Color32,
        inside: impl Fn(i64, i64) -> bool,
    ) {
        let x0 = min_x.max(0);
        let y0 = min_y.max(0);
        let x1 = max_x.min(i64::from(self.width()) - 1);
        let y1 = max_y.min(i64::from(self.height()) - 1);
        if x0 > x1 || y0 > y1 {
            return;
        }

        let rgba = to_rgba(color);
        for y in y0..=y1 {
            for x in x0..=x1 {
                if inside(x, y) {
                    self.pixels.put_pixel(x as u32, y as u32, rgba);
                }
            }
        }
        self.version += 1;
    }

    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied(
            [self.width() as usize, self.height() as usize],
            self.pixels.as_raw(),
        )
    }
}
