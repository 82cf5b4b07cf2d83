//! Rendering of the inline markup games may emit.
//!
//! `[[img=<url>]]` marks an image and `[[break]]` a message break. Anything
//! else between double brackets is left as text.

/// A piece of game output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Plain narrative text.
    Text(&'a str),
    /// An image reference.
    Image(String),
    /// A break between messages.
    Break,
}

/// Split game output into text, image, and break segments.
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut result = Vec::new();
    let mut rest = text;
    let mut pending = 0;

    while let Some(open) = rest[pending..].find("[[").map(|i| i + pending) {
        let Some(close) = rest[open + 2..].find("]]").map(|i| i + open + 2) else {
            break;
        };
        let inner = &rest[open + 2..close];
        if inner.contains(['[', ']']) {
            pending = open + 1;
            continue;
        }

        let command: String = inner.chars().filter(|c| !c.is_whitespace()).collect();
        let segment = if let Some(url) = command.strip_prefix("img=") {
            Segment::Image(url.to_string())
        } else if command == "break" {
            Segment::Break
        } else {
            pending = close + 2;
            continue;
        };

        if open > 0 {
            result.push(Segment::Text(&rest[..open]));
        }
        result.push(segment);
        rest = &rest[close + 2..];
        pending = 0;
    }

    if !rest.is_empty() {
        result.push(Segment::Text(rest));
    }
    result
}

/// Render game output for a terminal.
pub fn render(text: &str) -> String {
    let mut out = String::new();
    for segment in segments(text) {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Image(url) => {
                out.push_str(&format!("[image: {url}]"));
                out.push('\n');
            }
            Segment::Break => out.push_str("\n\n"),
        }
    }
    out
}
