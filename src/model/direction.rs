//! Direction of travel along the strip.

/// Trend of the most recent scroll-progress samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Progress was increasing (towards larger values).
    Forward,
    /// Progress was decreasing (towards smaller values).
    Backward,
    /// No trend observed since the last reset.
    #[default]
    Unknown,
}

impl Direction {
    /// Short label for logs and the help overlay.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
            Direction::Unknown => "unknown",
        }
    }
}
