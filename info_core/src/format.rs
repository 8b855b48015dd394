//! Formatting collaborator seam
//!
//! The core decides what value to format; an injected implementation
//! decides how it looks. This keeps panel building testable without a
//! rendering context.

use format_core::{FormatOptions, NumberFormatter};

/// Capability to render numbers for display
pub trait NumberFormat {
    /// Render a general numeric value
    fn number(&self, value: f64) -> String;
    /// Render a currency amount
    fn credits(&self, value: i64) -> String;
}

/// Default implementation backed by format_core
#[derive(Debug, Clone, Default)]
pub struct StandardFormat {
    formatter: NumberFormatter,
}

impl StandardFormat {
    /// Formatter with default options
    pub fn new() -> Self {
        StandardFormat::default()
    }

    /// Formatter with explicit options
    pub fn with_options(options: FormatOptions) -> Self {
        StandardFormat {
            formatter: NumberFormatter::new(options),
        }
    }
}

impl NumberFormat for StandardFormat {
    fn number(&self, value: f64) -> String {
        self.formatter.number(value)
    }

    fn credits(&self, value: i64) -> String {
        self.formatter.credits(value)
    }
}
