// SPDX-License-Identifier: GPL-3.0-only

//! Message update handling
//!
//! `update()` is the only place carousel state changes. It returns whether
//! anything visible changed so the event loop can skip redundant draws.

use crate::app::slides::SlidePresenter;
use crate::app::state::{CarouselModel, Message};
use std::time::Instant;
use tracing::{debug, info};

impl CarouselModel {
    /// Apply `message` at time `now`; returns `true` if a redraw is needed
    pub fn update(&mut self, message: Message, now: Instant) -> bool {
        match message {
            Message::Tick => self.rotation.poll(now) > 0,
            Message::SelectIndicator(index) => self.rotation.select(index),
            Message::SelectNext => self.rotation.select_next(),
            Message::SelectPrevious => self.rotation.select_previous(),
            Message::ReplaceContent { config, images } => {
                self.title = config.section_title;
                self.subtitle = config.section_subtitle;
                self.presenter = SlidePresenter::new(config.partners, images);
                self.rotation.set_policy(config.tick_policy);

                // Same length and cadence keeps the running timer and index
                let len = self.presenter.len();
                if !self.rotation.reconfigure(len, config.interval, now) {
                    debug!("Content replaced without rotation change");
                }
                true
            }
            Message::AdjustInterval(delta_ms) => {
                let interval = self.rotation.interval().adjusted(delta_ms);
                info!(interval = %interval, "Interval adjusted");
                self.rotation.reconfigure(self.presenter.len(), interval, now)
            }
        }
    }
}
