use std::sync::Arc;

use crate::{Invocation, Result};

/// Renders at most `limit` invocations, one per line.
///
/// There is no line break after the last listed invocation. When the list is
/// longer than `limit`, a final `...` line is appended and the remaining
/// invocations are dropped. An empty list renders as an empty string.
///
/// # Errors
///
/// Propagates the first listed invocation that fails to describe itself.
/// Invocations past `limit` are never asked to format.
pub fn format_invocation_list(
    invocations: &[Arc<dyn Invocation>],
    limit: usize,
) -> Result<String> {
    let listed = invocations
        .iter()
        .take(limit)
        .map(|invocation| invocation.format())
        .collect::<Result<Vec<_>>>()?;

    let mut out = listed.join("\n");
    if invocations.len() > listed.len() {
        if !listed.is_empty() {
            out.push('\n');
        }
        out.push_str("...");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, ReportConfig};

    const LIMIT: usize = ReportConfig::DEFAULT_MAX_LISTED_INVOCATIONS;

    fn calls(n: usize) -> Vec<Arc<dyn Invocation>> {
        (1..=n)
            .map(|i| Arc::new(format!("call{i}()")) as Arc<dyn Invocation>)
            .collect()
    }

    struct Broken;

    impl Invocation for Broken {
        fn format(&self) -> Result<String> {
            Err(Error::unformattable("no description"))
        }
    }

    #[test]
    fn empty_list_renders_nothing() {
        assert_eq!(format_invocation_list(&[], LIMIT).unwrap(), "");
    }

    #[test]
    fn short_list_renders_every_call() {
        assert_eq!(
            format_invocation_list(&calls(3), LIMIT).unwrap(),
            "call1()\ncall2()\ncall3()"
        );
    }

    #[test]
    fn exactly_limit_has_no_ellipsis() {
        let out = format_invocation_list(&calls(5), LIMIT).unwrap();
        assert_eq!(out.lines().count(), 5);
        assert!(!out.contains("..."));
    }

    #[test]
    fn long_list_is_truncated_after_limit() {
        assert_eq!(
            format_invocation_list(&calls(7), LIMIT).unwrap(),
            "call1()\ncall2()\ncall3()\ncall4()\ncall5()\n..."
        );
    }

    #[test]
    fn zero_limit_renders_only_ellipsis() {
        assert_eq!(format_invocation_list(&calls(2), 0).unwrap(), "...");
        assert_eq!(format_invocation_list(&[], 0).unwrap(), "");
    }

    #[test]
    fn failing_listed_invocation_propagates() {
        let mut list = calls(2);
        list.push(Arc::new(Broken));
        assert!(matches!(
            format_invocation_list(&list, LIMIT),
            Err(Error::Unformattable(_))
        ));
    }

    #[test]
    fn calls_past_limit_are_not_formatted() {
        let mut list = calls(5);
        list.push(Arc::new(Broken));
        assert!(format_invocation_list(&list, LIMIT).unwrap().ends_with("\n..."));
    }
}
