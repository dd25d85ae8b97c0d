// SPDX-License-Identifier: MPL-2.0

//! Carousel - A timed partner carousel for the terminal
//!
//! This library provides the core functionality for the carousel, including
//! the rotation controller, slide presentation, and configuration loading.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`rotation`]: Rotation state machine, periodic timers, and clocks
//! - [`app`]: Carousel model, message handling, and rendering
//! - [`partners`]: Partner records and category labels
//! - [`config`]: User configuration handling
//! - [`storage`]: Image loading and preloading
//! - [`terminal`]: Interactive terminal front end
//!
//! # Example
//!
//! ```ignore
//! // This is a terminal application, typically run via:
//! // carousel --demo
//! ```

pub mod app;
pub mod config;
pub mod constants;
pub mod errors;
pub mod partners;
pub mod rotation;
pub mod storage;
pub mod terminal;

// Re-export commonly used types
pub use app::{CarouselModel, CarouselView, Message};
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use partners::{Partner, PartnerCategory};
pub use rotation::{RotationController, RotationInterval, RotationState, TickPolicy};
