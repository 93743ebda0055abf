//! Description text with optional inline formatting.

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum SpanStyle {
    Emphasis,
    Strong,
    Code,
}

/// Formatting applied to the byte range `start..end` of a [`RichText`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub style: SpanStyle,
}

impl Span {
    pub const fn new(start: usize, end: usize, style: SpanStyle) -> Self {
        Self { start, end, style }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RichText {
    pub text: &'static str,
    pub spans: &'static [Span],
}

/// One run of a [`RichText`] sharing a single style.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Segment {
    pub text: &'static str,
    pub style: Option<SpanStyle>,
}

impl RichText {
    pub const fn plain(text: &'static str) -> Self {
        Self { text, spans: &[] }
    }

    pub const fn with_spans(text: &'static str, spans: &'static [Span]) -> Self {
        Self { text, spans }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Splits the text into styled runs whose concatenation is `text`.
    ///
    /// Spans that are empty, not on char boundaries, or overlap an earlier
    /// span are dropped; ends past the text are clamped.
    pub fn segments(&self) -> Vec<Segment> {
        let text = self.text;

        let mut spans: Vec<Span> = self
            .spans
            .iter()
            .map(|s| Span {
                end: s.end.min(text.len()),
                ..*s
            })
            .filter(|s| {
                s.start < s.end && text.is_char_boundary(s.start) && text.is_char_boundary(s.end)
            })
            .collect();
        spans.sort_by_key(|s| s.start);

        let mut out = Vec::with_capacity(spans.len() * 2 + 1);
        let mut cursor = 0;

        for span in spans {
            if span.start < cursor {
                continue;
            }
            if span.start > cursor {
                out.push(Segment {
                    text: &text[cursor..span.start],
                    style: None,
                });
            }
            out.push(Segment {
                text: &text[span.start..span.end],
                style: Some(span.style),
            });
            cursor = span.end;
        }

        if cursor < text.len() {
            out.push(Segment {
                text: &text[cursor..],
                style: None,
            });
        }

        out
    }
}

impl From<&'static str> for RichText {
    fn from(text: &'static str) -> Self {
        Self::plain(text)
    }
}
