use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct TestResultItem {
    pub answer: PathBuf,
    pub candidate: PathBuf,
    pub message: String,
}

/// Differences found per test case. Cases without differences map to an empty list.
#[derive(Debug, Clone, Default)]
pub struct TestResult {
    pub items: BTreeMap<String, Vec<TestResultItem>>,
}

impl TestResult {
    pub fn difference_count(&self) -> usize {
        self.items.values().map(Vec::len).sum()
    }

    pub fn is_success(&self) -> bool {
        self.difference_count() == 0
    }

    pub fn failed_cases(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|(_, diffs)| !diffs.is_empty())
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
