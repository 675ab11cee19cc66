//! Styled text frames.
//!
//! A [`TextFrame`] is the console counterpart of a framebuffer: views build one without doing
//! any I/O, and the renderer decides whether the styles become escape codes or are dropped.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-span styling. `fg: None` keeps the terminal's own foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub fg: Option<Rgb>,
    pub bold: bool,
    pub dim: bool,
}

impl TextStyle {
    pub const PLAIN: TextStyle = TextStyle {
        fg: None,
        bold: false,
        dim: false,
    };

    pub const fn fg(rgb: Rgb) -> Self {
        Self {
            fg: Some(rgb),
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::PLAIN
    }
}

/// A run of text sharing one style. May contain newlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextFrame {
    spans: Vec<Span>,
}

impl TextFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, style: TextStyle, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        if text.is_empty() {
            return self;
        }
        // Coalesce adjacent spans with the same style.
        if let Some(last) = self.spans.last_mut() {
            if last.style == style {
                last.text.push_str(&text);
                return self;
            }
        }
        self.spans.push(Span { text, style });
        self
    }

    pub fn plain(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(TextStyle::PLAIN, text)
    }

    pub fn newline(&mut self) -> &mut Self {
        self.plain("\n")
    }

    /// Push `text` followed by a newline.
    pub fn line(&mut self, style: TextStyle, text: impl Into<String>) -> &mut Self {
        self.push(style, text).newline()
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The frame's text with all styling dropped.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}
