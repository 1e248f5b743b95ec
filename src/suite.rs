use chrono::{DateTime, Utc};
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub name: String,
    pub status: TestStatus,
}

/// State shared by every test case of one suite run.
#[derive(Debug)]
pub struct TestSuiteData {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    tests: Mutex<Vec<TestCase>>,
}

impl Default for TestSuiteData {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSuiteData {
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            tests: Mutex::new(Vec::new()),
        }
    }

    #[tracing::instrument(name = "Recording test outcome", skip(self), fields(run_id = %self.run_id))]
    pub fn record(&self, name: impl Into<String> + std::fmt::Debug, status: TestStatus) {
        let case = TestCase {
            name: name.into(),
            status,
        };
        // A test that panicked while holding the lock must not hide the others
        let mut tests = self.tests.lock().unwrap_or_else(|e| e.into_inner());
        tests.push(case);
    }

    pub fn tests(&self) -> Vec<TestCase> {
        self.tests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn failed(&self) -> usize {
        self.tests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|case| case.status == TestStatus::Failed)
            .count()
    }
}
