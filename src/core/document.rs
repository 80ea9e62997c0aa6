use crate::domain::model::LineEnding;

pub const CMAKE_LISTS_FILENAME: &str = "CMakeLists.txt";

/// Ordered lines of one generated `CMakeLists.txt`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<S: Into<String>>(&mut self, line: S) {
        self.lines.push(line.into());
    }

    pub fn add_optional(&mut self, line: Option<String>) {
        if let Some(line) = line {
            self.lines.push(line);
        }
    }

    pub fn extend<I: IntoIterator<Item = String>>(&mut self, lines: I) {
        self.lines.extend(lines);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines joined by `line_ending`, without a trailing terminator.
    pub fn render(&self, line_ending: LineEnding) -> String {
        self.lines.join(line_ending.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_lines_are_skipped() {
        let mut doc = Document::new();
        doc.add("project(\"App\" LANGUAGES CXX)");
        doc.add_optional(None);
        doc.add_optional(Some("set(CMAKE_INCLUDE_CURRENT_DIR ON)".to_string()));
        assert_eq!(doc.lines().len(), 2);
    }

    #[test]
    fn test_render_line_endings() {
        let mut doc = Document::new();
        doc.extend(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(doc.render(LineEnding::Crlf), "a\r\nb");
        assert_eq!(doc.render(LineEnding::Lf), "a\nb");
        assert_eq!(Document::new().render(LineEnding::Lf), "");
    }
}
