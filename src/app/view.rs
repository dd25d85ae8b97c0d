// SPDX-License-Identifier: GPL-3.0-only

//! Main carousel view
//!
//! Composes the section from its parts, top to bottom:
//! - Header: title, subtitle, accent rule
//! - Slides (slides module)
//! - Indicator row (indicators module)

use crate::app::indicators::IndicatorBar;
use crate::app::slides::SlidesView;
use crate::app::state::CarouselModel;
use crate::app::style::{accent_rule_style, section_subtitle_style, section_title_style};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};

/// Width of the rule under the heading, in cells
const ACCENT_RULE_WIDTH: usize = 12;

/// Height of the title/subtitle/rule block plus spacing
const HEADER_HEIGHT: u16 = 4;

/// Where each part of the carousel goes within its area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselLayout {
    pub header: Rect,
    pub slides: Rect,
    pub indicators: Rect,
}

impl CarouselLayout {
    pub fn compute(area: Rect) -> Self {
        let [header, slides, _, indicators] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Self {
            header,
            slides,
            indicators,
        }
    }
}

/// Renders a mounted carousel
pub struct CarouselView<'a> {
    model: &'a CarouselModel,
}

impl<'a> CarouselView<'a> {
    pub fn new(model: &'a CarouselModel) -> Self {
        Self { model }
    }
}

impl CarouselModel {
    /// Indicator under a mouse position, given the area the carousel was
    /// drawn in
    pub fn indicator_at(&self, area: Rect, column: u16, row: u16) -> Option<usize> {
        let layout = CarouselLayout::compute(area);
        IndicatorBar::new(self.len(), self.current_index()).hit_test(layout.indicators, column, row)
    }
}

impl Widget for CarouselView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = CarouselLayout::compute(area);
        let model = self.model;

        Paragraph::new(vec![
            Line::styled(model.title(), section_title_style()),
            Line::styled(model.subtitle(), section_subtitle_style()),
            Line::styled("━".repeat(ACCENT_RULE_WIDTH), accent_rule_style()),
        ])
        .alignment(Alignment::Center)
        .render(layout.header, buf);

        let current = model.current_index();
        if !model.is_empty() {
            let card = Block::bordered().border_type(BorderType::Rounded);
            let inner = card.inner(layout.slides);
            card.render(layout.slides, buf);
            SlidesView::new(model.presenter(), current).render(inner, buf);
        }

        IndicatorBar::new(model.len(), current).render(layout.indicators, buf);
    }
}
