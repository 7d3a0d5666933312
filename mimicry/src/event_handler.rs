use crate::{NoMoreInvocations, Result, SequenceVerification, UnexpectedCall, VerificationEvent};

/// Receives the failures of a mocking session.
///
/// One hook per failure kind. All hooks have default no-op implementations,
/// so an observer only overrides the ones it cares about. Use
/// [`handle`](Self::handle) to route a [`VerificationEvent`] to the matching
/// hook.
///
/// Handlers make failures visible; they never change the outcome of the
/// test. An error returned from a hook means the failure could not be
/// reported (a collaborator failed to format, or the destination failed).
///
/// # Example
///
/// ```rust
/// use mimicry::{EventHandler, Formattable, Result, UnexpectedCall};
///
/// #[derive(Default)]
/// struct Collect(Vec<String>);
///
/// impl EventHandler for Collect {
///     fn handle_unexpected_call(&mut self, failure: &UnexpectedCall) -> Result {
///         self.0.push(failure.format()?);
///         Ok(())
///     }
/// }
/// ```
pub trait EventHandler: Send {
    /// Called when a mock receives a call no expectation allowed.
    fn handle_unexpected_call(&mut self, failure: &UnexpectedCall) -> Result {
        let _f = failure;
        Ok(())
    }

    /// Called when a sequence verification fails.
    fn handle_sequence_verification(&mut self, failure: &SequenceVerification) -> Result {
        let _f = failure;
        Ok(())
    }

    /// Called when a "no more invocations" verification fails.
    fn handle_no_more_invocations(&mut self, failure: &NoMoreInvocations) -> Result {
        let _f = failure;
        Ok(())
    }

    /// Routes the event to the hook for its kind.
    fn handle(&mut self, event: &VerificationEvent) -> Result {
        match event {
            VerificationEvent::UnexpectedCall(e) => self.handle_unexpected_call(e),
            VerificationEvent::SequenceVerification(e) => self.handle_sequence_verification(e),
            VerificationEvent::NoMoreInvocations(e) => self.handle_no_more_invocations(e),
        }
    }
}
