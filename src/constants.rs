// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

use std::time::Duration;

/// Default time between automatic advances
pub const DEFAULT_INTERVAL_MS: u64 = 5000;

/// Shortest interval reachable through interactive adjustment
pub const MIN_INTERVAL_MS: u64 = 500;

/// Step used by the `+`/`-` interval keys
pub const INTERVAL_STEP_MS: i64 = 1000;

/// Default section heading
pub const DEFAULT_SECTION_TITLE: &str = "Our Collaborators";

/// Default section subheading
pub const DEFAULT_SECTION_SUBTITLE: &str = "Strategic partners supporting our mission";

/// Category label for industrial partners
pub const INDUSTRIAL_PARTNER_LABEL: &str = "Industrial Partner";

/// Category label for training partners
pub const TRAINING_PARTNER_LABEL: &str = "Training Partner";

/// Image containment box, in terminal cells.
///
/// Each cell shows two vertical pixels (half blocks), so 30x10 cells is a
/// 30x20 pixel box, the same 3:2 shape as the web layout's logo box.
pub const IMAGE_BOX_COLS: u16 = 30;
pub const IMAGE_BOX_ROWS: u16 = 10;

/// Upper bound on how long the event loop blocks waiting for input
pub const MAX_POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// Directory under the user config dir holding the partner list
pub const CONFIG_DIR_NAME: &str = "carousel";

/// File name of the partner list
pub const CONFIG_FILE_NAME: &str = "partners.json";

/// Log file used while the carousel owns the terminal
pub const LOG_FILE_NAME: &str = "carousel.log";

/// Bundled demo collection inside the embedded assets
pub const DEMO_CONFIG_ASSET: &str = "demo.json";
