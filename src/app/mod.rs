// SPDX-License-Identifier: MPL-2.0

//! Carousel presentation unit
//!
//! This module contains the carousel state, message handling, and
//! rendering.
//!
//! # Architecture
//!
//! - `state`: `CarouselModel` and `Message`
//! - `update`: Message handling
//! - `view`: Section layout and rendering
//! - `slides`: Slide frames, layering, and per-slide content
//! - `indicators`: Indicator dots and click hit-testing
//! - `badge`: Category and year badges
//! - `image_box`: Fixed-size image box with aspect-preserving fit
//! - `style`: Colors and the category style lookup

pub mod badge;
pub mod image_box;
pub mod indicators;
pub mod slides;
mod state;
pub mod style;
mod update;
mod view;

pub use state::{CarouselModel, Message};
pub use view::{CarouselLayout, CarouselView};
