// SPDX-License-Identifier: GPL-3.0-only

//! Terminal carousel
//!
//! Mounts the carousel full-screen and runs a single-threaded event loop.
//! The loop sleeps until either input arrives or the rotation timer is due,
//! then applies the resulting messages and redraws. Leaving the loop, by
//! quitting or by error, unmounts the carousel and cancels its timer.

use crate::app::{CarouselModel, CarouselView, Message};
use crate::config::Config;
use crate::constants::{INTERVAL_STEP_MS, MAX_POLL_TIMEOUT};
use crate::errors::{AppError, AppResult};
use crate::rotation::{Clock, RotationInterval, RotationState, SystemClock, TimerQueue};
use crate::storage::preload_images_blocking;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal, backend::CrosstermBackend, buffer::Buffer, layout::Rect, style::Color,
    widgets::Widget,
};
use std::io::{self, stdout};
use std::path::PathBuf;
use tracing::{error, info};

/// Where the partner list comes from
#[derive(Debug, Clone)]
pub enum ConfigSource {
    File(PathBuf),
    Demo,
}

impl ConfigSource {
    pub fn load(&self) -> AppResult<Config> {
        let config = match self {
            ConfigSource::File(path) => Config::load(path)?,
            ConfigSource::Demo => Config::demo()?,
        };
        Ok(config)
    }
}

/// Options for the interactive carousel
#[derive(Debug, Clone)]
pub struct TerminalOptions {
    pub source: ConfigSource,
    /// Overrides the interval from the config file
    pub interval: Option<RotationInterval>,
}

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Select(usize),
    Next,
    Previous,
    Reload,
    Slower,
    Faster,
    ToggleHelp,
}

/// Map a key press to an action
pub fn key_action(key: KeyEvent) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C to quit
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(KeyAction::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::Char(c @ '1'..='9') => Some(KeyAction::Select(c as usize - '1' as usize)),
        KeyCode::Right => Some(KeyAction::Next),
        KeyCode::Left => Some(KeyAction::Previous),
        KeyCode::Char('r') => Some(KeyAction::Reload),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(KeyAction::Slower),
        KeyCode::Char('-') => Some(KeyAction::Faster),
        KeyCode::Char('h') => Some(KeyAction::ToggleHelp),
        _ => None,
    }
}

/// Run the terminal carousel
pub fn run(options: TerminalOptions) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&options)?;

    // Decode every image before the first frame
    let images = preload_images_blocking(&config.partners)?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, &options, config, images);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result.map_err(Into::into)
}

fn load_config(options: &TerminalOptions) -> AppResult<Config> {
    let mut config = options.source.load()?;
    if let Some(interval) = options.interval {
        config.interval = interval;
    }
    Ok(config)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    options: &TerminalOptions,
    config: Config,
    images: Vec<Option<crate::storage::DecodedImage>>,
) -> AppResult<()> {
    let clock = SystemClock;
    let queue = TimerQueue::new();
    let mut model = CarouselModel::mount(config, images, &queue, clock.now());

    let mut show_help = false;
    let mut notice: Option<String> = None;
    let mut carousel_area = Rect::default();
    let mut dirty = true;

    let result = loop {
        if model.update(Message::Tick, clock.now()) {
            dirty = true;
        }

        if dirty {
            let status = match (&notice, show_help) {
                (Some(notice), _) => notice.clone(),
                (None, true) => build_help_message(),
                (None, false) => build_status_message(&model),
            };

            let drawn = terminal.draw(|f| {
                let area = f.area();

                // Reserve bottom line for status
                carousel_area = Rect {
                    height: area.height.saturating_sub(1),
                    ..area
                };
                f.render_widget(CarouselView::new(&model), carousel_area);

                let status_area = Rect {
                    x: area.x,
                    y: area.y + area.height.saturating_sub(1),
                    width: area.width,
                    height: 1.min(area.height),
                };
                f.render_widget(StatusBar { message: &status }, status_area);
            });
            if let Err(e) = drawn {
                break Err(AppError::from(e));
            }
            dirty = false;
        }

        // Sleep until input or the next rotation deadline
        let timeout = queue.poll_timeout(clock.now(), MAX_POLL_TIMEOUT);
        let event = match event::poll(timeout) {
            Ok(true) => match event::read() {
                Ok(event) => event,
                Err(e) => break Err(AppError::from(e)),
            },
            Ok(false) => continue,
            Err(e) => break Err(AppError::from(e)),
        };

        let message = match event {
            Event::Key(key) => match key_action(key) {
                Some(KeyAction::Quit) => break Ok(()),
                Some(KeyAction::Select(index)) => Some(Message::SelectIndicator(index)),
                Some(KeyAction::Next) => Some(Message::SelectNext),
                Some(KeyAction::Previous) => Some(Message::SelectPrevious),
                Some(KeyAction::Slower) => Some(Message::AdjustInterval(INTERVAL_STEP_MS)),
                Some(KeyAction::Faster) => Some(Message::AdjustInterval(-INTERVAL_STEP_MS)),
                Some(KeyAction::ToggleHelp) => {
                    show_help = !show_help;
                    notice = None;
                    dirty = true;
                    None
                }
                Some(KeyAction::Reload) => {
                    notice = None;
                    dirty = true;
                    match reload(options) {
                        Ok(message) => Some(message),
                        Err(e) => {
                            error!(error = %e, "Failed to reload config");
                            notice = Some(format!("Error: {}", e));
                            None
                        }
                    }
                }
                None => None,
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => model
                .indicator_at(carousel_area, mouse.column, mouse.row)
                .map(Message::SelectIndicator),
            Event::Resize(_, _) => {
                dirty = true;
                None
            }
            _ => None,
        };

        if let Some(message) = message
            && model.update(message, clock.now())
        {
            notice = None;
            dirty = true;
        }
    };

    model.unmount();
    result
}

/// Re-read the config source and build the replacement message
fn reload(options: &TerminalOptions) -> AppResult<Message> {
    let config = load_config(options)?;
    let images = preload_images_blocking(&config.partners)?;
    info!(partners = config.partners.len(), "Config reloaded");

    Ok(Message::ReplaceContent { config, images })
}

fn build_status_message(model: &CarouselModel) -> String {
    let position = match model.rotation().state() {
        RotationState::Running { index, .. } => format!("{}/{}", index + 1, model.len()),
        RotationState::Idle => "no partners".to_string(),
    };
    format!(
        "{} | every {} | ←/→ browse | 'h' help | 'q' quit",
        position,
        model.interval()
    )
}

fn build_help_message() -> String {
    String::from(
        "1-9: Jump | ←/→: Previous/next | click dot: Jump | +/-: Slower/faster | r: Reload | h: Toggle help | q/Ctrl+C: Quit",
    )
}

/// Status bar widget
struct StatusBar<'a> {
    message: &'a str,
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        // Fill background
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell_mut((x, area.y)) {
                cell.set_char(' ');
                cell.set_bg(Color::DarkGray);
            }
        }

        // Render text, cut at a character boundary
        let text: String = self.message.chars().take(area.width as usize).collect();

        buf.set_string(
            area.x,
            area.y,
            text,
            ratatui::style::Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray),
        );
    }
}
