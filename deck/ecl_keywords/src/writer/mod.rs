//! Deck text output.
//!
//! The structural inverse of the readers: keyword name on its own line,
//! one record per line, defaulted fields as `1*`, strings single-quoted.

use crate::table::{PvtTable, RegionTable};
use crate::Defaulted;

/// A value that can be written as one record field.
pub trait DeckField {
    fn write_field(&self, out: &mut DeckWriter);
}

impl DeckField for f64 {
    fn write_field(&self, out: &mut DeckWriter) {
        out.token(&format_f64(*self));
    }
}

impl DeckField for i32 {
    fn write_field(&self, out: &mut DeckWriter) {
        out.token(&self.to_string());
    }
}

/// Quoted, unless the text holds a `'`: a quote cannot be escaped, so
/// such text is written bare and must read back as one bare token.
impl DeckField for str {
    fn write_field(&self, out: &mut DeckWriter) {
        if self.contains('\'') && reads_back_bare(self) {
            out.token(self);
        } else {
            out.token(&format!("'{self}'"));
        }
    }
}

fn reads_back_bare(text: &str) -> bool {
    !text.starts_with('\'')
        && !text.starts_with("--")
        && !text
            .bytes()
            .any(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n' | b'/' | 0))
}

impl DeckField for String {
    fn write_field(&self, out: &mut DeckWriter) {
        self.as_str().write_field(out);
    }
}

impl<T: DeckField> DeckField for Defaulted<T> {
    fn write_field(&self, out: &mut DeckWriter) {
        match self {
            Defaulted::Given(v) => v.write_field(out),
            Defaulted::Default(_) => out.token("1*"),
        }
    }
}

/// Shortest text that reads back as the same `f64`.
///
/// Very large and very small magnitudes use exponent notation.
pub fn format_f64(v: f64) -> String {
    let magnitude = v.abs();
    if v == 0.0 || (1.0e-4..1.0e15).contains(&magnitude) {
        format!("{v}")
    } else {
        format!("{v:e}")
    }
}

/// In-memory deck text builder.
pub struct DeckWriter {
    buffer: String,
    /// Nothing written on the current line yet.
    line_empty: bool,
}

impl DeckWriter {
    pub fn new() -> Self {
        DeckWriter {
            buffer: String::new(),
            line_empty: true,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        DeckWriter {
            buffer: String::with_capacity(capacity),
            line_empty: true,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn output(self) -> String {
        self.buffer
    }

    /// Write a token, space separated from the previous one on the line.
    pub fn token(&mut self, text: &str) {
        if !self.line_empty {
            self.buffer.push(' ');
        }
        self.buffer.push_str(text);
        self.line_empty = false;
    }

    pub fn field<F: DeckField + ?Sized>(&mut self, value: &F) -> &mut Self {
        value.write_field(self);
        self
    }

    pub fn fields<F: DeckField>(&mut self, values: &[F]) -> &mut Self {
        for v in values {
            v.write_field(self);
        }
        self
    }

    pub fn newline(&mut self) {
        self.buffer.push('\n');
        self.line_empty = true;
    }

    pub fn indent(&mut self, spaces: usize) {
        for _ in 0..spaces {
            self.buffer.push(' ');
        }
    }

    /// Start a keyword block.
    pub fn keyword(&mut self, name: &str) {
        if !self.line_empty {
            self.newline();
        }
        self.buffer.push_str(name);
        self.newline();
    }

    /// A line of raw text.
    pub fn line(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.newline();
    }

    /// ` /` and a line break.
    pub fn end_record(&mut self) {
        self.token("/");
        self.newline();
    }

    /// A bare `/` line closing a list of named records.
    pub fn end_list(&mut self) {
        self.line("/");
    }

    /// One row per line, `/` after each region.
    pub fn region_table(&mut self, table: &RegionTable) {
        for r in 0..table.num_regions() {
            for i in 0..table.row_count(r) {
                for v in table.row(r, i) {
                    v.write_field(self);
                }
                self.newline();
            }
            self.end_list();
        }
    }

    /// One `/`-terminated row per pressure node.
    ///
    /// The leading value and the first triple share a line; further triples
    /// follow on indented continuation lines.
    pub fn pvt_table(&mut self, table: &PvtTable) {
        for region in &table.regions {
            for row in region {
                let (head, rest) = row.split_at(row.len().min(4));
                self.fields(head);
                for triple in rest.chunks(3) {
                    self.newline();
                    self.indent(8);
                    self.fields(triple);
                }
                self.end_record();
            }
            self.end_list();
        }
    }
}

impl Default for DeckWriter {
    fn default() -> Self {
        Self::new()
    }
}
