//! Report rendering: plain text for people, canonical JSON for tools.

use std::fmt::Write;

use dustpan_kernel::proof::canon::{canonical_json_bytes, CanonError};
use dustpan_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::runner::PlanReport;

/// One action letter per line, then `"<N> nodes generated"` and
/// `"<N> nodes expanded"`.
#[must_use]
pub fn render_text(report: &PlanReport) -> String {
    let mut out = String::new();
    for action in &report.path {
        let _ = writeln!(out, "{action}");
    }
    let _ = writeln!(out, "{} nodes generated", report.stats.nodes_generated);
    let _ = writeln!(out, "{} nodes expanded", report.stats.nodes_expanded);
    out
}

/// JSON projection of a report (key order is not significant here).
///
/// Policy and counter fields come from their own projections so the report
/// cannot drift from them.
#[must_use]
pub fn report_json(report: &PlanReport) -> serde_json::Value {
    let path: Vec<String> = report.path.iter().map(ToString::to_string).collect();
    let mut json = serde_json::json!({
        "world_digest": report.world_digest.as_str(),
        "root_fingerprint": report.root_fingerprint.as_str(),
        "path": path,
        "path_length": report.path.len(),
        "termination": report.termination.to_json(),
    });
    if let Some(fields) = json.as_object_mut() {
        for part in [report.policy.to_json(), report.stats.to_json()] {
            if let serde_json::Value::Object(map) = part {
                fields.extend(map);
            }
        }
    }
    json
}

/// Canonical JSON bytes of [`report_json`].
///
/// # Errors
///
/// Returns [`CanonError`] if the projection contains a non-integer number.
pub fn report_bytes(report: &PlanReport) -> Result<Vec<u8>, CanonError> {
    canonical_json_bytes(&report_json(report))
}

/// Canonical JSON report followed by a newline.
///
/// # Errors
///
/// Returns [`CanonError`] if the projection contains a non-integer number.
pub fn render_json(report: &PlanReport) -> Result<String, CanonError> {
    let bytes = report_bytes(report)?;
    let mut out = String::from_utf8_lossy(&bytes).into_owned();
    out.push('\n');
    Ok(out)
}

/// Content digest of the canonical report bytes.
///
/// # Errors
///
/// Returns [`CanonError`] if the projection contains a non-integer number.
pub fn report_digest(report: &PlanReport) -> Result<ContentHash, CanonError> {
    Ok(canonical_hash(HashDomain::PlanReport, &report_bytes(report)?))
}
