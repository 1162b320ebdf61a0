//! Diagnostic rendering for the terminal.

use crate::diagnostic::Diagnostic;
use crate::label::LabelStyle;
use netsim_source::SourceDb;

const ERROR_COLOR: &str = "1;31";

/// Formats a diagnostic into a printable string.
pub trait DiagnosticRenderer {
    /// Renders one diagnostic.
    fn render(&self, diag: &Diagnostic, source_db: &SourceDb) -> String;
}

/// Renders diagnostics in a rustc-like layout:
///
/// ```text
/// error[E103]: gate 'y' of kind NOT takes 1 input, found 2
///   --> half.net:5:1
///    |
///  5 | y = NOT(a, b)
///    | ^^^^^^^^^^^^^ wrong number of operands
///    |
///    = help: ...
/// ```
pub struct TerminalRenderer {
    /// Whether to emit ANSI color escapes.
    pub color: bool,
}

impl TerminalRenderer {
    /// Creates a terminal renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, ansi: &str) -> String {
        if self.color {
            format!("\x1b[{ansi}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic, source_db: &SourceDb) -> String {
        let mut out = String::new();

        let header = format!("error[{}]", diag.code);
        out.push_str(&format!("{}: {}\n", self.paint(&header, ERROR_COLOR), diag.message));

        let located = source_db
            .resolve_span(diag.primary_span)
            .zip(source_db.try_get_file(diag.primary_span.file));
        if let Some((resolved, file)) = located {
            let line_num = resolved.line.to_string();
            let padding = " ".repeat(line_num.len());
            let line_content = file.line_text(diag.primary_span.start);

            out.push_str(&format!("{padding}--> {resolved}\n"));
            out.push_str(&format!("{padding} |\n"));
            out.push_str(&format!("{line_num} | {line_content}\n"));

            // Columns are byte offsets; the underline is laid out in chars.
            let start = (resolved.col as usize - 1).min(line_content.len());
            let end = (start + diag.primary_span.len() as usize).min(line_content.len());
            let lead = line_content.get(..start).unwrap_or("");
            let marked = line_content.get(start..end).unwrap_or("");
            let col_padding = " ".repeat(lead.chars().count());
            let carets = self.paint(&"^".repeat(marked.chars().count().max(1)), ERROR_COLOR);
            let primary_msg = diag
                .labels
                .iter()
                .find(|l| l.style == LabelStyle::Primary)
                .map(|l| format!(" {}", l.message))
                .unwrap_or_default();
            out.push_str(&format!("{padding} | {col_padding}{carets}{primary_msg}\n"));
        }

        for label in diag.labels.iter().filter(|l| l.style == LabelStyle::Secondary) {
            match source_db.resolve_span(label.span) {
                Some(resolved) => {
                    out.push_str(&format!("   = note: {} ({resolved})\n", label.message))
                }
                None => out.push_str(&format!("   = note: {}\n", label.message)),
            }
        }
        for note in &diag.notes {
            out.push_str(&format!("   = note: {note}\n"));
        }
        for help in &diag.help {
            out.push_str(&format!("   = help: {help}\n"));
        }

        out
    }
}
