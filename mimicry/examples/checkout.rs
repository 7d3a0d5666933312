//! Renders the three failure kinds of a small checkout test.
//!
//! Reports go to stdout through the default handler and are also logged
//! through `tracing`.

use std::sync::Arc;

use mimicry::{
    EventHandler, Invocation, Location, NoMoreInvocations, Result, Sequence, SequenceVerification,
    Session, UnexpectedCall, VerificationType, handlers::Tracer,
};

/// A recorded call on the mocked payment gateway.
struct GatewayCall {
    method: &'static str,
    amount: u32,
}

impl Invocation for GatewayCall {
    fn format(&self) -> Result<String> {
        Ok(format!("Gateway::{}({})", self.method, self.amount))
    }
}

fn call(method: &'static str, amount: u32) -> Arc<dyn Invocation> {
    Arc::new(GatewayCall { method, amount })
}

fn main() -> Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    let mut session = Session::default().with_handler(Tracer::default());

    let authorize = Sequence::atomic("Gateway::authorize(_)");
    let capture = Sequence::atomic("Gateway::capture(_)");

    let recorded = vec![
        call("authorize", 100),
        call("authorize", 100),
        call("refund", 100),
    ];

    session.handle_sequence_verification(&SequenceVerification::new(
        Location::caller(),
        VerificationType::Exact,
        1,
        vec![authorize.then(&capture)],
        recorded.clone(),
    )?)?;

    session.handle_no_more_invocations(&NoMoreInvocations::new(
        Location::caller(),
        recorded,
    ))?;

    session.handle_unexpected_call(&UnexpectedCall::new(call("void", 100)))?;

    Ok(())
}
