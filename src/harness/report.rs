use crate::harness::result::TestResult;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

pub trait ResultWriter {
    /// Writes the report and returns where it went.
    fn write(&self, result: &TestResult) -> Result<PathBuf>;
}

/// HTML difference report, one section per test case.
pub struct HtmlWriter {
    path: PathBuf,
}

impl HtmlWriter {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl ResultWriter for HtmlWriter {
    fn write(&self, result: &TestResult) -> Result<PathBuf> {
        std::fs::write(&self.path, render_html(result))?;
        tracing::info!("Report written to {}", self.path.display());
        Ok(self.path.clone())
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn file_link(path: &Path, label: &str) -> String {
    format!(
        "<a href='{}' target='_blank'>{}</a>",
        escape_html(&path.to_string_lossy()),
        label
    )
}

/// One heading per test case, passing ones included. Diffs are numbered across
/// the whole report.
pub fn render_html(result: &TestResult) -> String {
    let mut lines = vec!["<h1>Difference List</h1>".to_string()];
    let mut diff_index = 0;

    for (testcase, diffs) in &result.items {
        lines.push(format!(
            "<h2>{} ({})</h2>",
            escape_html(testcase),
            diffs.len()
        ));
        for diff in diffs {
            diff_index += 1;
            lines.push(format!("<h3>Diff {}</h3>", diff_index));
            lines.push("<ul>".to_string());
            lines.push(format!(
                "<li>Files: {} and {}</li>",
                file_link(&diff.answer, "CMakeLists.answer"),
                file_link(&diff.candidate, "CMakeLists.txt")
            ));
            lines.push(format!("<li>Message: {}</li>", escape_html(&diff.message)));
            lines.push("</ul>".to_string());
        }
    }

    lines.join("\n")
}
