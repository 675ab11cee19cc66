//! ConsoleRenderer: writes text frames to any `Write` sink.
//!
//! Frames are encoded into an internal buffer first and flushed in one write, so a turn's
//! output never interleaves with diagnostics on stderr.

use std::io::Write;

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::frame::{Rgb, TextFrame, TextStyle};

pub struct ConsoleRenderer<W: Write> {
    out: W,
    color: bool,
    buf: Vec<u8>,
}

impl<W: Write> ConsoleRenderer<W> {
    /// `color: false` writes the frame text only, with no escape sequences.
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    pub fn draw(&mut self, frame: &TextFrame) -> Result<()> {
        self.buf.clear();
        if self.color {
            encode_styled_into(frame, &mut self.buf)?;
        } else {
            encode_plain_into(frame, &mut self.buf);
        }
        self.flush_buf()
    }

    /// Write one unstyled line (used for machine-readable output).
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        self.buf.clear();
        self.buf.extend_from_slice(line.as_bytes());
        self.buf.push(b'\n');
        self.flush_buf()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a frame with its styles dropped.
pub fn encode_plain_into(frame: &TextFrame, out: &mut Vec<u8>) {
    for span in frame.spans() {
        out.extend_from_slice(span.text.as_bytes());
    }
}

/// Encode a frame as crossterm style commands plus text.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_styled_into(frame: &TextFrame, out: &mut Vec<u8>) -> Result<()> {
    for span in frame.spans() {
        if span.style.is_plain() {
            out.queue(Print(&span.text))?;
            continue;
        }
        apply_style_into(out, span.style)?;
        out.queue(Print(&span.text))?;
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: TextStyle) -> Result<()> {
    if let Some(fg) = style.fg {
        out.queue(SetForegroundColor(rgb_to_color(fg)))?;
    }
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
