//! Diagnostic logging to stderr.
//!
//! [`LogLayer`] is a [`tracing_subscriber::Layer`] that turns each event into
//! a single `HH:MM:SS LEVEL message {k=v}` line and writes it to a sink
//! (stderr by default). Events more verbose than the layer's level are
//! dropped. Nothing is ever written to stdout, which carries only the
//! rendered header.

use std::io::{self, Write};
use std::sync::Mutex;

use chrono::Local;
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

/// A [`Layer`] that writes formatted log lines to `W`.
pub struct LogLayer<W> {
    max_level: Level,
    sink: Mutex<W>,
}

impl LogLayer<io::Stderr> {
    /// A layer writing to stderr.
    pub fn stderr(max_level: Level) -> Self {
        Self::new(io::stderr(), max_level)
    }
}

impl<W: Write> LogLayer<W> {
    pub fn new(sink: W, max_level: Level) -> Self {
        Self {
            max_level,
            sink: Mutex::new(sink),
        }
    }
}

/// Install a stderr [`LogLayer`] as the global subscriber.
///
/// `None` leaves logging off entirely.
pub fn init(max_level: Option<Level>) {
    if let Some(level) = max_level {
        tracing_subscriber::registry()
            .with(LogLayer::stderr(level))
            .init();
    }
}

/// Format one log line (without newline).
pub fn format_line(time: &str, level: Level, message: &str, fields: &[(String, String)]) -> String {
    let mut line = format!("{time} {level:>5} {message}");
    if !fields.is_empty() {
        let extras: Vec<String> = fields.iter().map(|(k, v)| format!("{k}={v}")).collect();
        if message.is_empty() {
            line.push_str(&extras.join(" "));
        } else {
            line.push_str(&format!(" {{{}}}", extras.join(", ")));
        }
    }
    line
}

impl<S, W> Layer<S> for LogLayer<W>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: Write + Send + 'static,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        // More verbose levels compare greater.
        let level = *event.metadata().level();
        if level > self.max_level {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let time = Local::now().format("%H:%M:%S").to_string();
        let line = format_line(&time, level, &visitor.message, &visitor.fields);

        let mut sink = self.sink.lock().unwrap_or_else(|e| e.into_inner());
        // A log line that cannot be written is dropped.
        let _ = writeln!(sink, "{line}");
    }
}

/// Visitor that extracts the message and extra fields from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields
                .push((field.name().to_string(), format!("{value:?}")));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields
                .push((field.name().to_string(), value.to_string()));
        }
    }
}
