use crate::VerificationType;

/// Renders a verification policy and count as English.
///
/// `"exactly "` or `"at least "`, then `"one appearance"` for a count of 1
/// and `"<count> appearances"` otherwise.
pub fn format_expected_count(
    verification_type: VerificationType,
    expected_count: usize,
) -> String {
    let quantifier = match verification_type {
        VerificationType::Exact => "exactly ",
        VerificationType::AtLeast => "at least ",
    };

    if expected_count == 1 {
        format!("{quantifier}one appearance")
    } else {
        format!("{quantifier}{expected_count} appearances")
    }
}
