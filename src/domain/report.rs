use std::fmt;

/// Fingerprint for one `(project, seed)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerprintResult {
    pub project: String,
    pub seed: i64,
    pub digest: String,
    pub metric: u8,
}

impl fmt::Display for FingerprintResult {
    /// Fixed `key=value` lines in the order `project`, `seed`, `hash`, `metric`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "project={}", self.project)?;
        writeln!(f, "seed={}", self.seed)?;
        writeln!(f, "hash={}", self.digest)?;
        writeln!(f, "metric={}", self.metric)
    }
}

/// Render the four-line text report for `result`.
pub fn render(result: &FingerprintResult) -> String {
    result.to_string()
}
