// SPDX-License-Identifier: GPL-3.0-only

//! Carousel state management

use crate::app::slides::SlidePresenter;
use crate::config::Config;
use crate::rotation::{RotationController, RotationInterval, TimerQueue};
use crate::storage::DecodedImage;
use std::time::Instant;
use tracing::info;

/// Everything that can happen to a mounted carousel
#[derive(Debug, Clone)]
pub enum Message {
    /// Apply automatic advances that are due
    Tick,
    /// Indicator `index` was clicked or chosen from the keyboard
    SelectIndicator(usize),
    /// Manual step to the following slide
    SelectNext,
    /// Manual step to the preceding slide
    SelectPrevious,
    /// New section text, collection, cadence, and tick policy
    /// (e.g. config reloaded)
    ReplaceContent {
        config: Config,
        images: Vec<Option<DecodedImage>>,
    },
    /// Lengthen (positive) or shorten (negative) the cadence
    AdjustInterval(i64),
}

/// A mounted carousel: section text, slides, and the rotation controller
#[derive(Debug)]
pub struct CarouselModel {
    pub(crate) title: String,
    pub(crate) subtitle: String,
    pub(crate) presenter: SlidePresenter,
    pub(crate) rotation: RotationController,
}

impl CarouselModel {
    /// Build slides for `config.partners` and start rotating at `now`
    ///
    /// `images` holds the preloaded image for each partner, by position.
    pub fn mount(
        config: Config,
        images: Vec<Option<DecodedImage>>,
        queue: &TimerQueue,
        now: Instant,
    ) -> Self {
        let presenter = SlidePresenter::new(config.partners, images);
        let rotation = RotationController::mount(
            presenter.len(),
            config.interval,
            config.tick_policy,
            queue,
            now,
        );

        info!(title = %config.section_title, slides = presenter.len(), "Carousel mounted");

        Self {
            title: config.section_title,
            subtitle: config.section_subtitle,
            presenter,
            rotation,
        }
    }

    /// Tear down the carousel; its timer is cancelled
    pub fn unmount(self) {
        info!(title = %self.title, "Carousel unmounted");
        self.rotation.unmount();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn presenter(&self) -> &SlidePresenter {
        &self.presenter
    }

    pub fn rotation(&self) -> &RotationController {
        &self.rotation
    }

    /// Index of the visible slide, `None` for an empty carousel
    pub fn current_index(&self) -> Option<usize> {
        self.rotation.current_index()
    }

    pub fn len(&self) -> usize {
        self.presenter.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presenter.is_empty()
    }

    pub fn interval(&self) -> RotationInterval {
        self.rotation.interval()
    }
}
