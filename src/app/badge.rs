// SPDX-License-Identifier: GPL-3.0-only

//! Pill-style labels shown above a slide title

use crate::app::style::{category_style, since_badge_style};
use crate::partners::Partner;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// A padded, colored label
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub label: String,
    pub style: Style,
}

impl Badge {
    pub fn new(label: impl Into<String>, style: Style) -> Self {
        Self {
            label: label.into(),
            style,
        }
    }

    pub fn to_span(&self) -> Span<'static> {
        Span::styled(format!(" {} ", self.label), self.style)
    }
}

/// Category badge, followed by the "Since <year>" badge when a year is set
pub fn partner_badges(partner: &Partner) -> Vec<Badge> {
    let mut badges = vec![Badge::new(
        partner.category.label(),
        category_style(&partner.category),
    )];
    if let Some(since) = partner.since_label() {
        badges.push(Badge::new(since, since_badge_style()));
    }
    badges
}

/// Badges on one line, separated by a space
pub fn badge_line(badges: &[Badge]) -> Line<'static> {
    let mut spans = Vec::with_capacity(badges.len() * 2);
    for (i, badge) in badges.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(badge.to_span());
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partners::PartnerCategory;

    #[test]
    fn test_year_badge_is_optional() {
        let mut partner = Partner {
            category: PartnerCategory::Training,
            ..Default::default()
        };
        assert_eq!(partner_badges(&partner).len(), 1);

        partner.year = Some(2018);
        let badges = partner_badges(&partner);
        assert_eq!(badges.len(), 2);
        assert_eq!(badges[1].label, "Since 2018");
    }

    #[test]
    fn test_badge_line_text() {
        let partner = Partner {
            category: PartnerCategory::Industrial,
            year: Some(2016),
            ..Default::default()
        };
        let line = badge_line(&partner_badges(&partner));
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, " Industrial Partner   Since 2016 ");
    }
}
