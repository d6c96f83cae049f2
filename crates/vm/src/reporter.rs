//! Output capability for the interpreter.
//!
//! The interpreter never writes to stdout directly. Everything it has to
//! say — printed values, error text, diagnostics — goes through a
//! [`Reporter`], so the core's observable behavior is a sequence of
//! reported lines independent of the concrete sink.

/// Sink for everything the interpreter reports.
///
/// Three kinds of line exist: a plain integer value, a plain text line,
/// and a labeled debug diagnostic rendered as `[DEBUG] <label>: <value>`.
pub trait Reporter {
    /// Report a plain integer value (PRINT output).
    fn value(&mut self, value: i64);

    /// Report a plain text line (banners, error text, dump markers).
    fn message(&mut self, text: &str);

    /// Report a labeled diagnostic.
    fn debug(&mut self, label: &str, value: i64);
}

/// Reporter that writes each line to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn value(&mut self, value: i64) {
        println!("{value}");
    }

    fn message(&mut self, text: &str) {
        println!("{text}");
    }

    fn debug(&mut self, label: &str, value: i64) {
        println!("[DEBUG] {label}: {value}");
    }
}

/// Reporter that records every line it is given.
///
/// The recorded lines are exactly what [`ConsoleReporter`] would have
/// printed, which makes this the observation point for tests.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    /// Reported lines, in order.
    pub lines: Vec<String>,
}

impl RecordingReporter {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for RecordingReporter {
    fn value(&mut self, value: i64) {
        self.lines.push(value.to_string());
    }

    fn message(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn debug(&mut self, label: &str, value: i64) {
        self.lines.push(format!("[DEBUG] {label}: {value}"));
    }
}
