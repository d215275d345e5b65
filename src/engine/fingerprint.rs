use crate::domain::report::FingerprintResult;
use crate::util::hash::checksum;

/// Project name used when the caller passes none or an empty one.
pub const DEFAULT_PROJECT: &str = "sample";

const METRIC_MODULUS: i64 = 100;

/// Build a fingerprint for `project` and `seed`.
///
/// The result depends only on its arguments. An empty `project` is treated
/// exactly like [`DEFAULT_PROJECT`].
pub fn generate(project: &str, seed: i64) -> FingerprintResult {
    let project = if project.is_empty() {
        DEFAULT_PROJECT
    } else {
        project
    };

    FingerprintResult {
        project: project.to_string(),
        seed,
        digest: digest(project, seed),
        metric: metric(seed),
    }
}

/// Checksum of the UTF-8 bytes `{project}:{seed}`, seed in plain decimal.
pub fn digest(project: &str, seed: i64) -> String {
    let seed = seed.to_string();
    checksum([project, ":", seed.as_str()])
}

/// Reduce `seed` into `[1, 100]`; negative seeds wrap like non-negative modulo.
pub fn metric(seed: i64) -> u8 {
    let reduced = seed.rem_euclid(METRIC_MODULUS) + 1;
    // rem_euclid keeps `reduced` within 1..=100.
    reduced as u8
}
