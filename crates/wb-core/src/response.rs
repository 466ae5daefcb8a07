//! Command responses.

use serde::Serialize;

/// Text returned by a command, as one or more chunks sent in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Response {
    /// Chunks in the order they should be sent.
    pub lines: Vec<String>,
}

impl Response {
    /// A single-chunk response.
    pub fn line(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
        }
    }

    /// A response made of several chunks.
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Chunks as string slices.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Whether the response has no chunks.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

impl IntoIterator for Response {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_chunks() {
        let r = Response::lines(["first", "second"]);
        assert_eq!(r.to_string(), "first\nsecond");
        assert_eq!(r.iter().count(), 2);
    }

    #[test]
    fn serializes_as_lines() {
        let json = serde_json::to_string(&Response::line("hi")).unwrap();
        assert_eq!(json, r#"{"lines":["hi"]}"#);
    }
}
