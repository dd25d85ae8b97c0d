// SPDX-License-Identifier: GPL-3.0-only

//! Slide presenter
//!
//! Every partner gets a [`SlideFrame`] when the carousel mounts, with its
//! image already decoded. Rotation never rebuilds frames; it only changes
//! which one is visible. Frames are stacked in layers: the active frame is
//! fully opaque, interactive, and on top, all others are transparent,
//! inert, and on the base layer.

use crate::app::badge::{badge_line, partner_badges};
use crate::app::image_box::ImageBox;
use crate::app::style::{slide_description_style, slide_title_style};
use crate::partners::Partner;
use crate::storage::DecodedImage;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Widget, Wrap};

/// How a frame is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Active,
    Suppressed,
}

impl Visibility {
    pub fn opacity(self) -> f32 {
        match self {
            Visibility::Active => 1.0,
            Visibility::Suppressed => 0.0,
        }
    }

    /// Whether the frame receives pointer input
    pub fn is_interactive(self) -> bool {
        self == Visibility::Active
    }

    /// Stacking order; higher is drawn later
    pub fn z_index(self) -> u8 {
        match self {
            Visibility::Active => 10,
            Visibility::Suppressed => 0,
        }
    }
}

/// One partner prepared for display
#[derive(Debug, Clone)]
pub struct SlideFrame {
    pub partner: Partner,
    pub image: Option<DecodedImage>,
}

/// A frame's position in the stack for one render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayer {
    pub index: usize,
    pub visibility: Visibility,
}

/// All frames of the carousel, built once
#[derive(Debug, Clone, Default)]
pub struct SlidePresenter {
    frames: Vec<SlideFrame>,
}

impl SlidePresenter {
    /// Pair each partner with its preloaded image
    ///
    /// `images` is matched by position; missing entries mean no image.
    pub fn new(partners: Vec<Partner>, images: Vec<Option<DecodedImage>>) -> Self {
        let mut images = images.into_iter();
        let frames = partners
            .into_iter()
            .map(|partner| SlideFrame {
                partner,
                image: images.next().flatten(),
            })
            .collect();
        Self { frames }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[SlideFrame] {
        &self.frames
    }

    /// Layers for every frame, base layer first
    pub fn layers(&self, current: Option<usize>) -> Vec<FrameLayer> {
        let mut layers: Vec<FrameLayer> = (0..self.frames.len())
            .map(|index| FrameLayer {
                index,
                visibility: if Some(index) == current {
                    Visibility::Active
                } else {
                    Visibility::Suppressed
                },
            })
            .collect();
        layers.sort_by_key(|layer| layer.visibility.z_index());
        layers
    }
}

/// Paints the frame stack; only opaque layers leave marks
pub struct SlidesView<'a> {
    presenter: &'a SlidePresenter,
    current: Option<usize>,
}

impl<'a> SlidesView<'a> {
    pub fn new(presenter: &'a SlidePresenter, current: Option<usize>) -> Self {
        Self { presenter, current }
    }
}

impl Widget for SlidesView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for layer in self.presenter.layers(self.current) {
            if layer.visibility.opacity() <= 0.0 {
                continue;
            }
            if let Some(frame) = self.presenter.frames.get(layer.index) {
                SlideWidget { frame }.render(area, buf);
            }
        }
    }
}

/// Text on the left, image box on the right
struct SlideWidget<'a> {
    frame: &'a SlideFrame,
}

impl Widget for SlideWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [text_area, image_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);

        let partner = &self.frame.partner;
        let mut lines = vec![
            badge_line(&partner_badges(partner)),
            Line::default(),
            Line::from(Span::styled(partner.name.clone(), slide_title_style())),
        ];
        if !partner.description.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                partner.description.clone(),
                slide_description_style(),
            )));
        }

        Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: true })
            .render(text_area.inner(Margin::new(2, 1)), buf);

        ImageBox::new(self.frame.image.as_ref(), &partner.name).render(image_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partners::PartnerCategory;

    fn partners(names: &[&str]) -> Vec<Partner> {
        names
            .iter()
            .map(|name| Partner {
                category: PartnerCategory::Industrial,
                name: name.to_string(),
                description: format!("{} description", name),
                ..Default::default()
            })
            .collect()
    }

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_one_frame_per_partner() {
        let presenter = SlidePresenter::new(partners(&["A", "B", "C"]), vec![None]);
        assert_eq!(presenter.len(), 3);
        assert!(presenter.frames().iter().all(|f| f.image.is_none()));
    }

    #[test]
    fn test_single_active_layer_on_top() {
        let presenter = SlidePresenter::new(partners(&["A", "B", "C"]), Vec::new());
        for current in 0..3 {
            let layers = presenter.layers(Some(current));
            assert_eq!(layers.len(), 3);

            let active: Vec<_> = layers
                .iter()
                .filter(|l| l.visibility == Visibility::Active)
                .collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].index, current);
            assert_eq!(layers.last().map(|l| l.index), Some(current));
        }
    }

    #[test]
    fn test_visibility_properties() {
        assert_eq!(Visibility::Active.opacity(), 1.0);
        assert!(Visibility::Active.is_interactive());
        assert_eq!(Visibility::Suppressed.opacity(), 0.0);
        assert!(!Visibility::Suppressed.is_interactive());
        assert!(Visibility::Active.z_index() > Visibility::Suppressed.z_index());
    }

    #[test]
    fn test_renders_only_active_frame() {
        let presenter = SlidePresenter::new(partners(&["Alpha", "Bravo"]), Vec::new());
        let area = Rect::new(0, 0, 80, 16);

        let mut buf = Buffer::empty(area);
        SlidesView::new(&presenter, Some(1)).render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Bravo"));
        assert!(!text.contains("Alpha"));
    }

    #[test]
    fn test_empty_renders_nothing() {
        let presenter = SlidePresenter::default();
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        SlidesView::new(&presenter, None).render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }
}
