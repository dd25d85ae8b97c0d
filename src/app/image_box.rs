// SPDX-License-Identifier: GPL-3.0-only

//! Fixed-size image box
//!
//! Renders a partner image inside a bordered box of constant size using
//! Unicode half-block characters (two vertical pixels per cell). The image
//! is scaled down to fit without cropping and never scaled up; the rest of
//! the box shows the white background.

use crate::app::style::{IMAGE_BOX_BACKGROUND, palette};
use crate::constants::{IMAGE_BOX_COLS, IMAGE_BOX_ROWS};
use crate::storage::DecodedImage;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Widget};

/// Largest size that fits `src` inside `bounds` keeping the aspect ratio,
/// without enlarging it
pub fn contain_size(src: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = src;
    let (max_w, max_h) = bounds;
    if src_w == 0 || src_h == 0 || max_w == 0 || max_h == 0 {
        return (0, 0);
    }
    if src_w <= max_w && src_h <= max_h {
        return (src_w, src_h);
    }

    let scale = (max_w as f64 / src_w as f64).min(max_h as f64 / src_h as f64);
    let w = ((src_w as f64 * scale).round() as u32).clamp(1, max_w);
    let h = ((src_h as f64 * scale).round() as u32).clamp(1, max_h);
    (w, h)
}

/// Image (or its alt text) inside a bordered containment box
pub struct ImageBox<'a> {
    image: Option<&'a DecodedImage>,
    alt: &'a str,
}

impl<'a> ImageBox<'a> {
    pub fn new(image: Option<&'a DecodedImage>, alt: &'a str) -> Self {
        Self { image, alt }
    }

    /// Bordered box of the fixed size, centered in `area` and clipped to it
    pub fn outer_rect(area: Rect) -> Rect {
        let width = (IMAGE_BOX_COLS + 2).min(area.width);
        let height = (IMAGE_BOX_ROWS + 2).min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }
}

impl Widget for ImageBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let outer = Self::outer_rect(area);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette::GRAY_300));
        let inner = block.inner(outer);
        block.render(outer, buf);

        // Fill background
        for y in inner.top()..inner.bottom() {
            for x in inner.left()..inner.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(' ');
                    cell.set_bg(IMAGE_BOX_BACKGROUND);
                }
            }
        }

        match self.image {
            Some(image) => render_half_blocks(image, inner, buf),
            None => render_alt_text(self.alt, inner, buf),
        }
    }
}

fn render_alt_text(alt: &str, area: Rect, buf: &mut Buffer) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let text: String = alt.chars().take(area.width as usize).collect();
    let width = text.chars().count() as u16;
    let x = area.x + (area.width - width) / 2;
    let y = area.y + area.height / 2;
    buf.set_string(
        x,
        y,
        text,
        Style::default()
            .fg(palette::GRAY_500)
            .bg(IMAGE_BOX_BACKGROUND),
    );
}

fn render_half_blocks(image: &DecodedImage, area: Rect, buf: &mut Buffer) {
    // Each terminal cell displays 2 vertical pixels using half-block characters
    let box_px = (area.width as u32, area.height as u32 * 2);
    let (draw_w, draw_h) = contain_size((image.width, image.height), box_px);
    if draw_w == 0 || draw_h == 0 {
        return;
    }

    // Center the image
    let offset_x = (box_px.0 - draw_w) / 2;
    let offset_y = (box_px.1 - draw_h) / 2;

    let sample = |px: u32, py: u32| -> Color {
        if px < offset_x || py < offset_y || px >= offset_x + draw_w || py >= offset_y + draw_h {
            return IMAGE_BOX_BACKGROUND;
        }
        let src_x = (px - offset_x) * image.width / draw_w;
        let src_y = (py - offset_y) * image.height / draw_h;
        over_white(image.pixel(src_x, src_y))
    };

    for ty in 0..area.height {
        for tx in 0..area.width {
            let px = tx as u32;
            let top = sample(px, ty as u32 * 2);
            let bottom = sample(px, ty as u32 * 2 + 1);

            if let Some(cell) = buf.cell_mut((area.x + tx, area.y + ty)) {
                cell.set_char('▀');
                cell.set_fg(top);
                cell.set_bg(bottom);
            }
        }
    }
}

/// Composite an RGBA pixel over the white box background
fn over_white([r, g, b, a]: [u8; 4]) -> Color {
    let blend = |c: u8| ((c as u16 * a as u16 + 255 * (255 - a as u16)) / 255) as u8;
    Color::Rgb(blend(r), blend(g), blend(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> DecodedImage {
        DecodedImage {
            width,
            height,
            rgba: Arc::new(rgba.repeat((width * height) as usize)),
        }
    }

    #[test]
    fn test_contain_never_upscales() {
        assert_eq!(contain_size((10, 6), (30, 20)), (10, 6));
    }

    #[test]
    fn test_contain_keeps_aspect() {
        // Wide logo limited by width
        assert_eq!(contain_size((300, 100), (30, 20)), (30, 10));
        // Tall image limited by height
        assert_eq!(contain_size((100, 400), (30, 20)), (5, 20));
    }

    #[test]
    fn test_contain_degenerate() {
        assert_eq!(contain_size((0, 10), (30, 20)), (0, 0));
        assert_eq!(contain_size((10, 10), (0, 20)), (0, 0));
    }

    #[test]
    fn test_over_white() {
        assert_eq!(over_white([10, 20, 30, 255]), Color::Rgb(10, 20, 30));
        assert_eq!(over_white([0, 0, 0, 0]), Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_outer_rect_is_fixed_and_centered() {
        let rect = ImageBox::outer_rect(Rect::new(0, 0, 52, 20));
        assert_eq!(rect, Rect::new(10, 4, IMAGE_BOX_COLS + 2, IMAGE_BOX_ROWS + 2));

        let clipped = ImageBox::outer_rect(Rect::new(0, 0, 10, 5));
        assert_eq!(clipped, Rect::new(0, 0, 10, 5));
    }

    #[test]
    fn test_renders_alt_text_without_image() {
        let area = Rect::new(0, 0, 40, 14);
        let mut buf = Buffer::empty(area);
        ImageBox::new(None, "Acme").render(area, &mut buf);

        let inner = Block::bordered().inner(ImageBox::outer_rect(area));
        let y = inner.y + inner.height / 2;
        let row: String = (inner.left()..inner.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect();
        assert!(row.contains("Acme"));
    }

    #[test]
    fn test_renders_image_pixels() {
        let area = Rect::new(0, 0, IMAGE_BOX_COLS + 2, IMAGE_BOX_ROWS + 2);
        let mut buf = Buffer::empty(area);
        // Fills the box exactly: 30x20 pixels
        let image = solid(30, 20, [200, 0, 0, 255]);
        ImageBox::new(Some(&image), "Acme").render(area, &mut buf);

        let cell = &buf[(1u16, 1u16)];
        assert_eq!(cell.symbol(), "▀");
        assert_eq!(cell.fg, Color::Rgb(200, 0, 0));
        assert_eq!(cell.bg, Color::Rgb(200, 0, 0));
    }
}
