use crate::{Result, Sequence, sequence::Node};

/// Renders a sequence in compact notation.
///
/// - concatenation: `left + right`
/// - repetition: `inner * times`
/// - single matcher: the matcher's own description
///
/// The notation carries no grouping, so `(a + b) * 2` and `a + b * 2`
/// render the same. It is meant for reading, not for parsing back.
///
/// # Errors
///
/// Propagates the first matcher that fails to describe itself.
pub fn format_sequence(sequence: &Sequence) -> Result<String> {
    match sequence.node() {
        Node::Concatenated { left, right } => Ok(format!(
            "{} + {}",
            format_sequence(left)?,
            format_sequence(right)?
        )),
        Node::Repeated { inner, times } => Ok(format!("{} * {}", format_sequence(inner)?, times)),
        Node::Atomic(matcher) => matcher.format(),
    }
}

impl crate::Formattable for Sequence {
    fn format(&self) -> Result<String> {
        format_sequence(self)
    }
}
