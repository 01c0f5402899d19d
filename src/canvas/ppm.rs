//! Plain PPM (`P3`) encoder
//!
//! Output is produced one text line at a time. Numeric tokens are appended to
//! a line buffer and the line is wrapped before a token that would bring it to
//! `max_line_len` columns. Every image row starts a new line, and the file ends
//! with one empty line.
//!
//! The first sink failure is kept and every later write is skipped, so the
//! error returned by [`PpmWriter::finish`] is the first one.

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::error::ExportError;
use crate::math::Tuple4;
use crate::MAX_COLOR_VALUE;

/// Magic token of the plain pixmap format
const MAGIC: &str = "P3";

/// Encoder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PpmOptions {
    /// A line is wrapped before it would reach this many characters.
    pub max_line_len: usize,
}

impl Default for PpmOptions {
    fn default() -> Self {
        Self { max_line_len: 70 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PpmState {
    Header,
    RowOpen,
    RowCode,
    RowClosed,
    Done,
}

/// Streaming `P3` writer with a sticky error.
pub struct PpmWriter<W: Write> {
    sink: W,
    line: String,
    max_line_len: usize,
    state: PpmState,
    err: Option<io::Error>,
}

impl<W: Write> PpmWriter<W> {
    pub fn new(sink: W, options: &PpmOptions) -> Self {
        Self {
            sink,
            line: String::with_capacity(options.max_line_len + 1),
            max_line_len: options.max_line_len,
            state: PpmState::Header,
            err: None,
        }
    }

    /// First sink failure, if any
    pub fn error(&self) -> Option<&io::Error> {
        self.err.as_ref()
    }

    /// Emit the magic token, the dimensions and the max channel value.
    pub fn write_header(&mut self, width: usize, height: usize) {
        debug_assert_eq!(self.state, PpmState::Header, "header written twice");

        self.line.push_str(MAGIC);
        self.end_line();
        // Writing into a String cannot fail.
        let _ = write!(self.line, "{} {}", width, height);
        self.end_line();
        let _ = write!(self.line, "{}", MAX_COLOR_VALUE);
        self.end_line();

        self.state = PpmState::RowClosed;
    }

    pub fn begin_row(&mut self) {
        debug_assert_eq!(self.state, PpmState::RowClosed, "row opened before header or inside a row");
        self.state = PpmState::RowOpen;
    }

    /// Clamp `color` into `[0, 1]`, scale to `0..=255` and emit its red, green
    /// and blue channels. Alpha is never written.
    pub fn write_pixel(&mut self, color: Tuple4) {
        debug_assert!(
            matches!(self.state, PpmState::RowOpen | PpmState::RowCode),
            "pixel written outside a row"
        );

        let scaled = color.saturated() * MAX_COLOR_VALUE as f32;
        let mut token = String::with_capacity(3);
        for channel in [scaled.x, scaled.y, scaled.z] {
            token.clear();
            let _ = write!(token, "{}", to_channel(channel));
            self.push_token(&token);
        }

        self.state = PpmState::RowCode;
    }

    /// Terminate the current image row. Always produces a line break.
    pub fn end_row(&mut self) {
        debug_assert!(
            matches!(self.state, PpmState::RowOpen | PpmState::RowCode),
            "row closed without being opened"
        );
        self.end_line();
        self.state = PpmState::RowClosed;
    }

    /// Write the trailing empty line, flush the sink and report the first
    /// failure.
    pub fn finish(mut self) -> Result<(), ExportError> {
        debug_assert_eq!(self.state, PpmState::RowClosed, "finish called inside a row");

        self.end_line();
        if self.err.is_none() {
            if let Err(e) = self.sink.flush() {
                self.fail(e);
            }
        }
        self.state = PpmState::Done;

        match self.err {
            Some(e) => Err(ExportError::Io(e)),
            None => Ok(()),
        }
    }

    fn push_token(&mut self, token: &str) {
        if !self.line.is_empty() {
            // Wrap before the separator so no line starts with a space.
            if self.line.len() + 1 + token.len() >= self.max_line_len {
                self.end_line();
            } else {
                self.line.push(' ');
            }
        }
        self.line.push_str(token);
    }

    fn end_line(&mut self) {
        self.line.push('\n');
        if self.err.is_none() {
            if let Err(e) = self.sink.write_all(self.line.as_bytes()) {
                self.fail(e);
            }
        }
        self.line.clear();
    }

    fn fail(&mut self, e: io::Error) {
        log::warn!("PPM sink failed, skipping remaining output: {}", e);
        self.err = Some(e);
    }
}

/// Round a channel already scaled to `0..=255`, ties to even.
fn to_channel(scaled: f32) -> u8 {
    scaled.round_ties_even() as u8
}
