// SPDX-License-Identifier: GPL-3.0-only

//! Indicator row: one dot per slide, the active one highlighted
//!
//! Clicking a dot is a manual selection. It only writes the current index;
//! the rotation timer keeps its own schedule.

use crate::app::style::indicator_style;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

const ACTIVE_DOT: char = '●';
const INACTIVE_DOT: char = '○';
const MORE_LEFT: char = '‹';
const MORE_RIGHT: char = '›';

/// Gap between dots, in cells
const DOT_GAP: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorState {
    Active,
    Inactive,
}

impl IndicatorState {
    pub fn is_active(self) -> bool {
        self == IndicatorState::Active
    }
}

/// State of each indicator for a collection of `len` items
///
/// Exactly one entry is `Active` when `current` is a valid index.
pub fn indicator_states(len: usize, current: Option<usize>) -> Vec<IndicatorState> {
    (0..len)
        .map(|i| {
            if Some(i) == current {
                IndicatorState::Active
            } else {
                IndicatorState::Inactive
            }
        })
        .collect()
}

/// Row of indicator dots, centered in its area
///
/// When there are more dots than fit, a window of dots around the current
/// one is shown, with `‹`/`›` marking items hidden on either side.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorBar {
    len: usize,
    current: Option<usize>,
}

/// Where the dots and edge markers land for one area
#[derive(Debug, Default, PartialEq, Eq)]
struct DotLayout {
    /// Index of the leftmost visible dot
    first: usize,
    /// Column of each visible dot, left to right
    columns: Vec<u16>,
    left_marker: Option<u16>,
    right_marker: Option<u16>,
}

impl IndicatorBar {
    pub fn new(len: usize, current: Option<usize>) -> Self {
        Self { len, current }
    }

    fn layout(&self, area: Rect) -> DotLayout {
        if area.width == 0 || area.height == 0 || self.len == 0 {
            return DotLayout::default();
        }

        let stride = 1 + DOT_GAP;
        let fitting = |width: u16| ((width + DOT_GAP) / stride) as usize;

        if self.len <= fitting(area.width) {
            let total = (self.len as u16) * stride - DOT_GAP;
            let start = area.x + (area.width - total) / 2;
            return DotLayout {
                first: 0,
                columns: (0..self.len as u16).map(|i| start + i * stride).collect(),
                left_marker: None,
                right_marker: None,
            };
        }

        // A marker and a gap are reserved on each side
        let window = fitting(area.width.saturating_sub(2 * stride)).clamp(1, self.len);
        let current = self.current.unwrap_or(0).min(self.len - 1);
        let first = current.saturating_sub(window / 2).min(self.len - window);

        let total = (window as u16) * stride - DOT_GAP + 2 * stride;
        let start = area.x + area.width.saturating_sub(total) / 2;
        let right = area.right();
        let inside = move |x: u16| (x < right).then_some(x);

        DotLayout {
            first,
            columns: (0..window as u16)
                .map(|i| start + stride + i * stride)
                .filter(|&x| x < right)
                .collect(),
            left_marker: if first > 0 { inside(start) } else { None },
            right_marker: if first + window < self.len {
                inside(start + total - 1)
            } else {
                None
            },
        }
    }

    /// Indicator under the given terminal cell, if any
    pub fn hit_test(&self, area: Rect, column: u16, row: u16) -> Option<usize> {
        if row != area.y {
            return None;
        }
        let layout = self.layout(area);
        layout
            .columns
            .iter()
            .position(|&x| x == column)
            .map(|pos| layout.first + pos)
    }
}

impl Widget for IndicatorBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = self.layout(area);
        let states = indicator_states(self.len, self.current);

        for (x, state) in layout.columns.iter().zip(&states[layout.first..]) {
            if let Some(cell) = buf.cell_mut((*x, area.y)) {
                cell.set_char(if state.is_active() {
                    ACTIVE_DOT
                } else {
                    INACTIVE_DOT
                });
                cell.set_style(indicator_style(state.is_active()));
            }
        }

        for (marker, symbol) in [
            (layout.left_marker, MORE_LEFT),
            (layout.right_marker, MORE_RIGHT),
        ] {
            if let Some(cell) = marker.and_then(|x| buf.cell_mut((x, area.y))) {
                cell.set_char(symbol);
                cell.set_style(indicator_style(false));
            }
        }
    }
}
