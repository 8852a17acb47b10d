//! Domain-level keyboard actions independent of key bindings.

/// Actions the picker front end understands.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Flick the strip towards smaller values. Default: h/←
    FlickBackward,
    /// Flick the strip towards larger values. Default: l/→
    FlickForward,
    /// Jump back by one block of ten. Default: [
    StepBackward,
    /// Jump forward by one block of ten. Default: ]
    StepForward,
    /// Accept the current value and exit. Default: Enter
    Confirm,
    /// Toggle the help overlay. Default: ?
    Help,
    /// Exit without confirming. Default: q/Esc
    Quit,
}

impl KeyAction {
    /// Human-readable description shown in the help overlay.
    pub fn description(self) -> &'static str {
        match self {
            KeyAction::FlickBackward => "Flick towards smaller values",
            KeyAction::FlickForward => "Flick towards larger values",
            KeyAction::StepBackward => "Jump back by 10",
            KeyAction::StepForward => "Jump forward by 10",
            KeyAction::Confirm => "Confirm selection",
            KeyAction::Help => "Toggle this help",
            KeyAction::Quit => "Quit",
        }
    }
}
