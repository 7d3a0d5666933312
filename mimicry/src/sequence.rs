//! Composable expected-call patterns.
//!
//! A [`Sequence`] is built from single matchers and combined with
//! concatenation and repetition. Flattening a sequence yields the matchers in
//! the temporal order the pattern implies.

use std::{
    fmt,
    num::NonZeroUsize,
    ops::{Add, Mul},
    sync::Arc,
};

use crate::{Error, Matcher, Result};

/// An ordered, possibly repeated, possibly concatenated pattern of expected calls.
///
/// Sequences are immutable. Combining two sequences produces a new one and
/// leaves the operands untouched, so a base pattern can be reused across
/// several expectations. Cloning is cheap (the tree is shared).
///
/// # Example
///
/// ```rust
/// use std::num::NonZeroUsize;
/// use mimicry::Sequence;
///
/// let open = Sequence::atomic("open()");
/// let read = Sequence::atomic("read()");
/// let close = Sequence::atomic("close()");
///
/// // open(), then read() three times, then close()
/// let session = &(&open + &read.repeat(3)?) + &close;
/// assert_eq!(session.matcher_count(), 5);
///
/// // Operator form of repetition takes a `NonZeroUsize`
/// let twice = &session * NonZeroUsize::new(2).unwrap();
/// assert_eq!(twice.matcher_count(), 10);
/// # Ok::<(), mimicry::Error>(())
/// ```
#[derive(Clone)]
pub struct Sequence {
    node: Arc<Node>,
}

/// The closed set of sequence shapes.
pub(crate) enum Node {
    Atomic(Arc<dyn Matcher>),
    Repeated { inner: Sequence, times: NonZeroUsize },
    Concatenated { left: Sequence, right: Sequence },
}

impl Sequence {
    fn from_node(node: Node) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    /// A sequence consisting of exactly one expected call.
    pub fn atomic<M: Matcher + 'static>(matcher: M) -> Self {
        Self::from_node(Node::Atomic(Arc::new(matcher)))
    }

    /// The `inner` sequence repeated `times` times back to back.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRepeatCount`] if `times` is zero.
    pub fn repeated(inner: Sequence, times: usize) -> Result<Self> {
        let times = NonZeroUsize::new(times).ok_or(Error::InvalidRepeatCount(times))?;
        Ok(Self::from_node(Node::Repeated { inner, times }))
    }

    /// `left` followed by `right`.
    pub fn concatenated(left: Sequence, right: Sequence) -> Self {
        Self::from_node(Node::Concatenated { left, right })
    }

    /// Returns this sequence repeated `times` times.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRepeatCount`] if `times` is zero.
    pub fn repeat(&self, times: usize) -> Result<Self> {
        Self::repeated(self.clone(), times)
    }

    /// Returns this sequence followed by `next`.
    pub fn then(&self, next: &Sequence) -> Self {
        Self::concatenated(self.clone(), next.clone())
    }

    /// Appends, in order, the atomic matchers this sequence expands to.
    ///
    /// Existing contents of `out` are left in place.
    pub fn expected_sequence(&self, out: &mut Vec<Arc<dyn Matcher>>) {
        match self.node.as_ref() {
            Node::Atomic(matcher) => out.push(Arc::clone(matcher)),
            Node::Repeated { inner, times } => {
                for _ in 0..times.get() {
                    inner.expected_sequence(out);
                }
            }
            Node::Concatenated { left, right } => {
                left.expected_sequence(out);
                right.expected_sequence(out);
            }
        }
    }

    /// Returns the flattened list of matchers.
    pub fn matchers(&self) -> Vec<Arc<dyn Matcher>> {
        let mut out = Vec::new();
        self.expected_sequence(&mut out);
        out
    }

    /// Number of matchers the sequence flattens to, computed without flattening.
    ///
    /// Always at least 1. Saturates at `usize::MAX` for absurd repeat counts.
    pub fn matcher_count(&self) -> usize {
        match self.node.as_ref() {
            Node::Atomic(_) => 1,
            Node::Repeated { inner, times } => inner.matcher_count().saturating_mul(times.get()),
            Node::Concatenated { left, right } => {
                left.matcher_count().saturating_add(right.matcher_count())
            }
        }
    }

    pub(crate) fn node(&self) -> &Node {
        &self.node
    }
}

impl From<Arc<dyn Matcher>> for Sequence {
    fn from(matcher: Arc<dyn Matcher>) -> Self {
        Self::from_node(Node::Atomic(matcher))
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node.as_ref() {
            Node::Atomic(_) => f.debug_struct("Atomic").finish_non_exhaustive(),
            Node::Repeated { inner, times } => f
                .debug_struct("Repeated")
                .field("inner", inner)
                .field("times", times)
                .finish(),
            Node::Concatenated { left, right } => f
                .debug_struct("Concatenated")
                .field("left", left)
                .field("right", right)
                .finish(),
        }
    }
}

impl Add for Sequence {
    type Output = Sequence;

    fn add(self, rhs: Sequence) -> Sequence {
        Sequence::concatenated(self, rhs)
    }
}

impl Add<&Sequence> for &Sequence {
    type Output = Sequence;

    fn add(self, rhs: &Sequence) -> Sequence {
        self.then(rhs)
    }
}

impl Mul<NonZeroUsize> for Sequence {
    type Output = Sequence;

    fn mul(self, times: NonZeroUsize) -> Sequence {
        Sequence::from_node(Node::Repeated { inner: self, times })
    }
}

impl Mul<NonZeroUsize> for &Sequence {
    type Output = Sequence;

    fn mul(self, times: NonZeroUsize) -> Sequence {
        self.clone() * times
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(sequence: &Sequence) -> Vec<String> {
        sequence
            .matchers()
            .iter()
            .map(|m| m.format().unwrap())
            .collect()
    }

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn atomic_flattens_to_single_matcher() {
        let seq = Sequence::atomic("foo()");
        assert_eq!(names(&seq), vec!["foo()"]);
        assert_eq!(seq.matcher_count(), 1);
    }

    #[test]
    fn concatenation_flattens_left_then_right() {
        let seq = Sequence::atomic("a()") + Sequence::atomic("b()");
        assert_eq!(names(&seq), vec!["a()", "b()"]);
        assert_eq!(seq.matcher_count(), 2);
    }

    #[test]
    fn repetition_flattens_inner_times_over() {
        let inner = Sequence::atomic("a()") + Sequence::atomic("b()");
        let seq = inner.repeat(3).unwrap();
        assert_eq!(
            names(&seq),
            vec!["a()", "b()", "a()", "b()", "a()", "b()"]
        );
        assert_eq!(seq.matcher_count(), 6);
    }

    #[test]
    fn repeat_of_one_is_the_inner_sequence() {
        let inner = Sequence::atomic("x()");
        let seq = Sequence::repeated(inner.clone(), 1).unwrap();
        assert_eq!(names(&seq), names(&inner));
    }

    #[test]
    fn zero_repetitions_are_rejected() {
        let result = Sequence::atomic("a()").repeat(0);
        assert!(matches!(result, Err(Error::InvalidRepeatCount(0))));
    }

    #[test]
    fn nested_counts_are_sums_and_products() {
        // (a + b*2) * 3 + c  =>  (1 + 2) * 3 + 1
        let a = Sequence::atomic("a()");
        let b = Sequence::atomic("b()");
        let c = Sequence::atomic("c()");
        let seq = &((&a + &(&b * nz(2))) * nz(3)) + &c;

        assert_eq!(seq.matcher_count(), 10);
        assert_eq!(seq.matchers().len(), 10);
        assert_eq!(names(&seq).last().map(String::as_str), Some("c()"));
    }

    #[test]
    fn operands_survive_composition() {
        let base = Sequence::atomic("ping()");
        let twice = &base * nz(2);
        let with_tail = &twice + &base;

        assert_eq!(names(&base), vec!["ping()"]);
        assert_eq!(names(&twice), vec!["ping()", "ping()"]);
        assert_eq!(names(&with_tail), vec!["ping()", "ping()", "ping()"]);
    }

    #[test]
    fn expected_sequence_appends_to_existing_output() {
        let mut out: Vec<Arc<dyn Matcher>> = vec![Arc::new("existing()")];
        Sequence::atomic("new()").expected_sequence(&mut out);

        let formatted: Vec<String> = out.iter().map(|m| m.format().unwrap()).collect();
        assert_eq!(formatted, vec!["existing()", "new()"]);
    }

    #[test]
    fn flattening_is_deterministic() {
        let seq = (Sequence::atomic("a()") + Sequence::atomic("b()"))
            .repeat(2)
            .unwrap();
        assert_eq!(names(&seq), names(&seq));
    }

    #[test]
    fn from_shared_matcher() {
        let matcher: Arc<dyn Matcher> = Arc::new("shared()");
        let seq = Sequence::from(Arc::clone(&matcher));
        assert!(Arc::ptr_eq(&seq.matchers()[0], &matcher));
    }

    #[test]
    fn absurd_repeat_counts_saturate_without_flattening() {
        let seq = (Sequence::atomic("a()") + Sequence::atomic("b()"))
            .repeat(usize::MAX)
            .unwrap();

        assert_eq!(seq.matcher_count(), usize::MAX);
        let notation = crate::reporting::format_sequence(&seq).unwrap();
        assert!(notation.ends_with(&format!(" * {}", usize::MAX)));
    }

    #[test]
    fn debug_shows_structure() {
        let seq = Sequence::atomic("a()").repeat(2).unwrap();
        let debug = format!("{seq:?}");
        assert!(debug.starts_with("Repeated"));
        assert!(debug.contains("times: 2"));
    }
}
