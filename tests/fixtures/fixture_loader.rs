/// Fixture loader
///
/// Each entry of `decompose.json` is either a comment string or an object
/// holding an `input` and the expected value of any component worth checking.
/// Absent fields are not checked; an absent password is written as `""`.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
#[allow(dead_code)]
pub enum FixtureCase {
    /// A decomposition case
    Decompose {
        input: String,
        #[serde(default)]
        scheme: Option<String>,
        #[serde(default)]
        double_slash: Option<String>,
        #[serde(default)]
        opaque: Option<String>,
        #[serde(default)]
        authority: Option<String>,
        #[serde(default)]
        path: Option<String>,
        #[serde(default)]
        username: Option<String>,
        #[serde(default)]
        password: Option<String>,
        #[serde(default)]
        host: Option<String>,
        #[serde(default)]
        port: Option<String>,
        #[serde(default)]
        query: Option<String>,
        #[serde(default)]
        fragment: Option<String>,
        #[serde(default)]
        relative: Option<bool>,
        #[serde(default)]
        normalized: Option<String>,
    },
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Clone)]
pub struct FixtureFailure {
    pub case_num: usize,
    pub input: String,
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default)]
pub struct FixtureResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<FixtureFailure>,
}

impl FixtureResult {
    pub fn pass_rate(&self) -> f64 {
        let total = self.passed + self.failed;
        if total == 0 {
            0.0
        } else {
            (self.passed as f64 / total as f64) * 100.0
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Passed: {}, Failed: {}, Pass Rate: {:.2}%",
            self.passed,
            self.failed,
            self.pass_rate()
        )
    }
}

pub fn load_fixtures() -> Vec<FixtureCase> {
    serde_json::from_str(include_str!("decompose.json")).expect("Failed to parse fixture data")
}
