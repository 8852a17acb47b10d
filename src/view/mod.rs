//! TUI rendering and the crossterm event loop.
//!
//! [`TuiApp`] owns the terminal, a [`SelectionController`] driving a
//! [`StripEngine`], and the key bindings. Each frame it advances the engine,
//! pumps engine events through the controller, and redraws.

pub mod help;
pub mod layout;
pub mod picker;
pub mod styles;

pub use layout::{PickerHit, PickerLayout, PICKER_HEIGHT};
pub use picker::PickerWidget;
pub use styles::{ColorConfig, PickerStyles};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::engine::{ScrollEngine, StripEngine};
use crate::model::{DomainValue, KeyAction};
use crate::state::SelectionController;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Layout},
    text::{Line, Span},
    widgets::Paragraph,
    Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Frame interval of the event loop.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Velocity of a keyboard or wheel flick, in slots per second.
pub const FLICK_VELOCITY: f64 = 12.0;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// How the picker session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user accepted this value.
    Confirmed(DomainValue),
    /// The user quit without confirming.
    Cancelled,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    controller: SelectionController<StripEngine>,
    key_bindings: KeyBindings,
    styles: PickerStyles,
    columns_per_tick: u16,
    /// Last rendered picker layout (for mouse hit testing)
    layout: Option<PickerLayout>,
    help_visible: bool,
    outcome: Option<Outcome>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture.
    pub fn new(config: &ResolvedConfig, colors: ColorConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Self::with_terminal(terminal, config, colors, Instant::now())
    }

    /// Run the main event loop until the user confirms or quits.
    ///
    /// The terminal is restored before returning, also on error.
    pub fn run(mut self) -> Result<Outcome, TuiError> {
        let result = self.event_loop();
        restore_terminal()?;
        result
    }

    fn event_loop(&mut self) -> Result<Outcome, TuiError> {
        loop {
            self.tick(Instant::now());
            self.draw()?;

            if let Some(outcome) = self.outcome {
                return Ok(outcome);
            }

            if event::poll(FRAME_INTERVAL)? {
                let now = Instant::now();
                match event::read()? {
                    Event::Key(key) => self.handle_key(key, now),
                    Event::Mouse(mouse) => self.handle_mouse(mouse, now),
                    Event::Resize(width, _) => self.handle_resize(width),
                    _ => {}
                }
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Build the application around an existing terminal.
    ///
    /// Attaches a fresh [`StripEngine`] sized to the terminal and installs a
    /// listener that logs every selection change.
    pub fn with_terminal(
        terminal: Terminal<B>,
        config: &ResolvedConfig,
        colors: ColorConfig,
        now: Instant,
    ) -> Result<Self, TuiError> {
        let width = terminal.size()?.width;

        let mut engine = StripEngine::new(config.strip_config(), now);
        engine.set_viewport_width(width);

        let mut controller = SelectionController::new(config.picker_config())
            .with_listener(|value| info!(value = value.get(), "selection changed"));
        controller.attach(engine);
        // attach already resolved the selection from the engine's position.
        if let Some(engine) = controller.engine_mut() {
            engine.take_events();
        }

        Ok(Self {
            terminal,
            controller,
            key_bindings: KeyBindings::default(),
            styles: PickerStyles::with_color_config(colors),
            columns_per_tick: config.columns_per_tick,
            layout: None,
            help_visible: false,
            outcome: None,
        })
    }

    /// Selection controller driving the picker.
    pub fn controller(&self) -> &SelectionController<StripEngine> {
        &self.controller
    }

    /// Layout of the last drawn frame.
    pub fn layout(&self) -> Option<PickerLayout> {
        self.layout
    }

    /// Whether the help overlay is shown.
    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    /// How the session ended, once it has.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The terminal, for inspecting test backends.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Advance the engine to `now` and feed its events to the controller.
    pub fn tick(&mut self, now: Instant) {
        if let Some(engine) = self.controller.engine_mut() {
            engine.advance(now);
        }
        self.controller.pump(now);
    }

    /// Handle keyboard input.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let Some(action) = self.key_bindings.get(key) else {
            return;
        };

        // While help is open, Esc closes it instead of quitting.
        if self.help_visible && action == KeyAction::Quit && key.code == event::KeyCode::Esc {
            self.help_visible = false;
            return;
        }

        debug!(?action, "key action");
        match action {
            KeyAction::FlickBackward => self.flick(-FLICK_VELOCITY, now),
            KeyAction::FlickForward => self.flick(FLICK_VELOCITY, now),
            KeyAction::StepBackward => self.step_backward(),
            KeyAction::StepForward => self.step_forward(),
            KeyAction::Confirm => {
                let value = self.controller.selected();
                info!(value = value.get(), "selection confirmed");
                self.outcome = Some(Outcome::Confirmed(value));
            }
            KeyAction::Help => self.help_visible = !self.help_visible,
            KeyAction::Quit => self.outcome = Some(Outcome::Cancelled),
        }
    }

    /// Handle mouse input: drag the strip, click the buttons, wheel to flick.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let hit = self
            .layout
            .and_then(|layout| layout.hit(mouse.column, mouse.row));

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match hit {
                Some(PickerHit::Strip) => {
                    if let Some(engine) = self.controller.engine_mut() {
                        engine.pointer_down(mouse.column, now);
                    }
                }
                Some(PickerHit::BackButton) => self.step_backward(),
                Some(PickerHit::ForwardButton) => self.step_forward(),
                None => {}
            },
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(engine) = self.controller.engine_mut() {
                    engine.pointer_move(mouse.column, now);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(engine) = self.controller.engine_mut() {
                    engine.pointer_up(now);
                }
            }
            MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
                if hit.is_some() {
                    self.flick(FLICK_VELOCITY, now);
                }
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
                if hit.is_some() {
                    self.flick(-FLICK_VELOCITY, now);
                }
            }
            _ => {}
        }
    }

    /// Terminal resized: the strip re-initialises its layout.
    pub fn handle_resize(&mut self, width: u16) {
        if let Some(engine) = self.controller.engine_mut() {
            engine.set_viewport_width(width);
        }
    }

    fn flick(&mut self, velocity: f64, now: Instant) {
        if let Some(engine) = self.controller.engine_mut() {
            engine.fling(velocity, now);
        }
    }

    fn step_backward(&mut self) {
        if self.controller.can_step_backward() {
            self.controller.step_backward();
        }
    }

    fn step_forward(&mut self) {
        if self.controller.can_step_forward() {
            self.controller.step_forward();
        }
    }

    /// Draw the current state to the terminal.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let progress = self
            .controller
            .engine()
            .map(|engine| engine.scroll_progress())
            .unwrap_or_default();
        let widget = PickerWidget::new(progress, self.controller.selected(), &self.styles)
            .steps(
                self.controller.can_step_backward(),
                self.controller.can_step_forward(),
            )
            .columns_per_tick(self.columns_per_tick);

        let styles = &self.styles;
        let key_bindings = &self.key_bindings;
        let help_visible = self.help_visible;
        let mut picker_layout = None;

        self.terminal.draw(|frame| {
            let [title, _, picker, _, footer] = Layout::vertical([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(PICKER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .areas(frame.area());

            frame.render_widget(
                Paragraph::new(Line::from(Span::styled("tickpick", styles.readout)))
                    .alignment(Alignment::Center),
                title,
            );

            picker_layout = Some(PickerLayout::compute(picker));
            frame.render_widget(widget, picker);

            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    "drag or ←/→ to scroll · [ ] ±10 · Enter confirm · ? help · q quit",
                    styles.hint,
                )))
                .alignment(Alignment::Center),
                footer,
            );

            if help_visible {
                help::render_help_overlay(frame, key_bindings, styles);
            }
        })?;

        self.layout = picker_layout;
        Ok(())
    }
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
