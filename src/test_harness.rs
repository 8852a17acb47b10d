//! Test harness for driving the picker TUI.
//!
//! Wraps `TuiApp<TestBackend>` with a simulated clock so tests can press
//! keys, click and drag, let time pass, and inspect what was drawn.

use crate::config::ResolvedConfig;
use crate::model::DomainValue;
use crate::view::{ColorConfig, Outcome, PickerHit, TuiApp, TuiError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::{Duration, Instant};

/// Frame interval used when letting simulated time pass.
const FRAME: Duration = Duration::from_millis(16);

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Trailing spaces and empty lines are dropped to keep snapshots clean.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Picker TUI on a test backend with a simulated clock.
pub struct PickerHarness {
    app: TuiApp<TestBackend>,
    now: Instant,
}

impl PickerHarness {
    /// Harness with default configuration and colors off.
    pub fn new(width: u16, height: u16) -> Result<Self, TuiError> {
        Self::with_config(width, height, &ResolvedConfig::default())
    }

    /// Harness with a specific configuration.
    pub fn with_config(width: u16, height: u16, config: &ResolvedConfig) -> Result<Self, TuiError> {
        let now = Instant::now();
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let mut app = TuiApp::with_terminal(terminal, config, ColorConfig::disabled(), now)?;
        app.draw()?;
        Ok(Self { app, now })
    }

    /// The application under test.
    pub fn app(&self) -> &TuiApp<TestBackend> {
        &self.app
    }

    /// Current selection.
    pub fn selected(&self) -> DomainValue {
        self.app.controller().selected()
    }

    /// Outcome once the user confirmed or quit.
    pub fn outcome(&self) -> Option<Outcome> {
        self.app.outcome()
    }

    /// Press a key without modifiers.
    pub fn press(&mut self, code: KeyCode) {
        self.press_with(code, KeyModifiers::NONE);
    }

    /// Press a key with modifiers.
    pub fn press_with(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        self.app.handle_key(KeyEvent::new(code, modifiers), self.now);
    }

    /// Left click at a position.
    pub fn click(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, row);
        self.mouse(MouseEventKind::Up(MouseButton::Left), column, row);
    }

    /// Click the center of a picker part. Returns false if it is not laid out.
    pub fn click_part(&mut self, part: PickerHit) -> bool {
        let Some(layout) = self.app.layout() else {
            return false;
        };
        let rect = match part {
            PickerHit::BackButton => layout.back_button,
            PickerHit::ForwardButton => layout.forward_button,
            PickerHit::Strip => layout.strip(),
        };
        if rect.width == 0 || rect.height == 0 {
            return false;
        }
        self.click(rect.x + rect.width / 2, rect.y);
        true
    }

    /// Send a raw mouse event at the current simulated time.
    pub fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        let event = MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        self.app.handle_mouse(event, self.now);
    }

    /// Let `duration` pass, ticking and drawing one frame at a time.
    pub fn advance(&mut self, duration: Duration) -> Result<(), TuiError> {
        let end = self.now + duration;
        while self.now < end {
            self.now = (self.now + FRAME).min(end);
            self.app.tick(self.now);
        }
        self.app.draw()
    }

    /// Move the simulated clock without ticking.
    pub fn skip(&mut self, duration: Duration) {
        self.now += duration;
    }

    /// Draw and return the screen as text.
    pub fn render_to_string(&mut self) -> Result<String, TuiError> {
        self.app.draw()?;
        Ok(buffer_to_string(self.app.terminal().backend().buffer()))
    }
}
