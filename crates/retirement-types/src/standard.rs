//! Carbon standard canonicalization.

/// Long-form standard names replaced by their short code. Only one
/// substitution is recognized today; further registries are added here.
const STANDARD_SHORT_CODES: &[(&str, &str)] = &[("Verified Carbon Standard", "VCS")];

/// Map a recognized long-form standard name to its short code, passing every
/// other value through unchanged. Matching is exact.
pub fn canonicalize_standard(raw: &str) -> String {
    STANDARD_SHORT_CODES
        .iter()
        .find(|(long, _)| *long == raw)
        .map(|(_, short)| (*short).to_string())
        .unwrap_or_else(|| raw.to_string())
}
