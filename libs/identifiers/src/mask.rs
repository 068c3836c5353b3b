/// Prefix marking the hidden portion of a masked identifier.
pub const REDACTION_MARKER: &str = "***";

/// Redaction marker followed by the last `visible` characters of `cleaned`.
pub(crate) fn mask_suffix(cleaned: &str, visible: usize) -> String {
    let total = cleaned.chars().count();
    let suffix: String = cleaned.chars().skip(total.saturating_sub(visible)).collect();
    format!("{REDACTION_MARKER}{suffix}")
}
