use std::{collections::BTreeMap, fmt};

use crate::{
    EventHandler, NoMoreInvocations, Result, SequenceVerification, UnexpectedCall,
    VerificationEvent, handlers::DefaultEventHandler,
};

/// Unique identifier for a handler registered with a [`Session`].
pub type HandlerId = u64;

struct HandlerEntry {
    handler: Box<dyn EventHandler>,
    paused: bool,
}

/// Registry of event handlers for one mocking session.
///
/// A session lives as long as the mocking session it serves. Every failure
/// it receives is delivered synchronously to each active handler, in
/// registration order. Paused handlers are skipped.
///
/// [`Session::default()`] starts with a single [`DefaultEventHandler`] bound
/// to standard output; [`Session::new()`] starts empty.
///
/// A session is itself an [`EventHandler`], so sessions can be nested.
///
/// Delivery stops at the first handler that returns an error, and that
/// error is returned to the caller. Handlers registered after it do not see
/// the failure, so a handler whose destination breaks silences the ones
/// behind it for that event. Register the handler whose output matters most
/// first, or remove a handler once its destination is known to be gone.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use mimicry::{EventHandler, Session, UnexpectedCall};
/// use mimicry::handlers::Tracer;
///
/// let mut session = Session::default();
/// let tracer = session.add(Tracer::default());
///
/// session.handle_unexpected_call(&UnexpectedCall::new(Arc::new("charge(100)")))?;
///
/// session.pause(tracer);
/// assert_eq!(session.len(), 2);
/// # Ok::<(), mimicry::Error>(())
/// ```
pub struct Session {
    handlers: BTreeMap<HandlerId, HandlerEntry>,
    last_id: HandlerId,
}

impl Session {
    /// A session with no handlers.
    pub fn new() -> Self {
        Self {
            handlers: BTreeMap::new(),
            last_id: 0,
        }
    }

    /// Builder form of [`add`](Self::add).
    pub fn with_handler<H: EventHandler + 'static>(mut self, handler: H) -> Self {
        self.add(handler);
        self
    }

    /// Register a handler and return its id.
    ///
    /// The handler starts in the active (non-paused) state.
    pub fn add<H: EventHandler + 'static>(&mut self, handler: H) -> HandlerId {
        self.last_id += 1;
        let id = self.last_id;
        self.handlers.insert(
            id,
            HandlerEntry {
                handler: Box::new(handler),
                paused: false,
            },
        );
        tracing::trace!(handler = id, "event handler added");
        id
    }

    /// Remove a handler. Returns `false` if no handler has this id.
    pub fn remove(&mut self, id: HandlerId) -> bool {
        let removed = self.handlers.remove(&id).is_some();
        if removed {
            tracing::trace!(handler = id, "event handler removed");
        }
        removed
    }

    /// Stop delivering failures to a handler. Returns `false` if no handler has this id.
    pub fn pause(&mut self, id: HandlerId) -> bool {
        self.set_paused(id, true)
    }

    /// Resume delivering failures to a handler. Returns `false` if no handler has this id.
    pub fn resume(&mut self, id: HandlerId) -> bool {
        self.set_paused(id, false)
    }

    /// Pause all registered handlers.
    pub fn pause_all(&mut self) {
        for entry in self.handlers.values_mut() {
            entry.paused = true;
        }
        tracing::trace!("all event handlers paused");
    }

    /// Resume all registered handlers.
    pub fn resume_all(&mut self) {
        for entry in self.handlers.values_mut() {
            entry.paused = false;
        }
        tracing::trace!("all event handlers resumed");
    }

    /// Number of registered handlers, paused ones included.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    fn set_paused(&mut self, id: HandlerId, paused: bool) -> bool {
        match self.handlers.get_mut(&id) {
            Some(entry) => {
                entry.paused = paused;
                tracing::trace!(handler = id, paused, "event handler state changed");
                true
            }
            None => false,
        }
    }

    /// Delivers to every active handler, stopping at the first failure.
    fn dispatch<F>(&mut self, kind: &'static str, mut deliver: F) -> Result
    where
        F: FnMut(&mut dyn EventHandler) -> Result,
    {
        for (id, entry) in self.handlers.iter_mut() {
            if entry.paused {
                continue;
            }
            if let Err(e) = deliver(entry.handler.as_mut()) {
                tracing::warn!(handler = *id, kind, error = %e, "event handler failed");
                return Err(e);
            }
        }
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new().with_handler(DefaultEventHandler::stdout())
    }
}

impl EventHandler for Session {
    fn handle_unexpected_call(&mut self, failure: &UnexpectedCall) -> Result {
        self.dispatch("unexpected_call", |h| h.handle_unexpected_call(failure))
    }

    fn handle_sequence_verification(&mut self, failure: &SequenceVerification) -> Result {
        self.dispatch("sequence_verification", |h| {
            h.handle_sequence_verification(failure)
        })
    }

    fn handle_no_more_invocations(&mut self, failure: &NoMoreInvocations) -> Result {
        self.dispatch("no_more_invocations", |h| {
            h.handle_no_more_invocations(failure)
        })
    }

    fn handle(&mut self, event: &VerificationEvent) -> Result {
        self.dispatch(event.kind(), |h| h.handle(event))
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let paused = self.handlers.values().filter(|e| e.paused).count();
        f.debug_struct("Session")
            .field("handlers", &self.handlers.len())
            .field("paused", &paused)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tracing::Level;

    use super::*;
    use crate::{Error, Formattable, Invocation, Location, log_capture::capture};

    /// Appends rendered reports to a shared log, tagged with its name.
    struct Collect {
        name: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl EventHandler for Collect {
        fn handle_unexpected_call(&mut self, failure: &UnexpectedCall) -> Result {
            let report = failure.format()?;
            self.log
                .lock()
                .unwrap()
                .push(format!("{}: {}", self.name, report));
            Ok(())
        }

        fn handle_no_more_invocations(&mut self, failure: &NoMoreInvocations) -> Result {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}: {}", self.name, failure.location()));
            Ok(())
        }
    }

    struct Failing;

    impl EventHandler for Failing {
        fn handle_unexpected_call(&mut self, _failure: &UnexpectedCall) -> Result {
            Err(Error::unformattable("handler refused"))
        }
    }

    fn collector(name: &'static str, log: &Arc<Mutex<Vec<String>>>) -> Collect {
        Collect {
            name,
            log: Arc::clone(log),
        }
    }

    fn unexpected(call: &'static str) -> UnexpectedCall {
        UnexpectedCall::new(Arc::new(call))
    }

    #[test]
    fn new_session_is_empty() {
        let session = Session::new();
        assert!(session.is_empty());
        assert_eq!(session.len(), 0);
    }

    #[test]
    fn default_session_has_stdout_handler() {
        assert_eq!(Session::default().len(), 1);
    }

    #[test]
    fn delivers_to_handlers_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut session = Session::new()
            .with_handler(collector("first", &log))
            .with_handler(collector("second", &log));

        session.handle_unexpected_call(&unexpected("x()")).unwrap();

        assert_eq!(
            *log.lock().unwrap(),
            vec![
                "first: Unexpected Method Call: x()",
                "second: Unexpected Method Call: x()"
            ]
        );
    }

    #[test]
    fn handle_routes_events_through_every_handler() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut session = Session::new().with_handler(collector("only", &log));
        let calls: Vec<Arc<dyn Invocation>> = vec![Arc::new("a()")];

        session
            .handle(&NoMoreInvocations::new(Location::new("t.rs", 4), calls).into())
            .unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["only: t.rs:4"]);
    }

    #[test]
    fn paused_handlers_are_skipped() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut session = Session::new();
        let first = session.add(collector("first", &log));
        session.add(collector("second", &log));

        assert!(session.pause(first));
        session.handle_unexpected_call(&unexpected("a()")).unwrap();
        assert!(session.resume(first));
        session.handle_unexpected_call(&unexpected("b()")).unwrap();

        assert_eq!(
            *log.lock().unwrap(),
            vec![
                "second: Unexpected Method Call: a()",
                "first: Unexpected Method Call: b()",
                "second: Unexpected Method Call: b()"
            ]
        );
    }

    #[test]
    fn pause_all_silences_session() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut session = Session::new().with_handler(collector("first", &log));

        session.pause_all();
        session.handle_unexpected_call(&unexpected("a()")).unwrap();
        assert!(log.lock().unwrap().is_empty());

        session.resume_all();
        session.handle_unexpected_call(&unexpected("b()")).unwrap();
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn remove_unregisters_handler() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut session = Session::new();
        let id = session.add(collector("gone", &log));

        assert!(session.remove(id));
        assert!(!session.remove(id));
        assert!(!session.pause(id));

        session.handle_unexpected_call(&unexpected("a()")).unwrap();
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn first_failure_stops_delivery() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut session = Session::new()
            .with_handler(Failing)
            .with_handler(collector("after", &log));

        let result = session.handle_unexpected_call(&unexpected("a()"));

        assert_eq!(result, Err(Error::Unformattable("handler refused".into())));
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn handler_failure_logged_at_warn() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut session = Session::new()
            .with_handler(collector("before", &log))
            .with_handler(Failing);

        let (result, logs) = capture(Level::TRACE, || {
            session.handle_unexpected_call(&unexpected("a()"))
        });

        assert!(result.is_err());
        assert_eq!(log.lock().unwrap().len(), 1);
        assert!(logs.contains("WARN"));
        assert!(logs.contains("event handler failed"));
        assert!(logs.contains("handler=2"));
        assert!(logs.contains("kind=\"unexpected_call\""));
        assert!(logs.contains("handler refused"));
    }

    #[test]
    fn successful_delivery_logs_no_warning() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut session = Session::new().with_handler(collector("only", &log));

        let (result, logs) = capture(Level::TRACE, || {
            session.handle_unexpected_call(&unexpected("a()"))
        });

        assert!(result.is_ok());
        assert!(!logs.contains("WARN"));
    }

    #[test]
    fn sessions_nest() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let inner = Session::new().with_handler(collector("inner", &log));
        let mut outer = Session::new().with_handler(inner);

        outer.handle_unexpected_call(&unexpected("a()")).unwrap();
        assert_eq!(log.lock().unwrap().len(), 1);
    }
}
