use crate::{
    Formattable, Location, NoMoreInvocations, Result, SequenceVerification, UnexpectedCall,
    reporting::Reporter,
};

/// Any failure a mocking session reports.
///
/// Lets callers route every kind of failure through a single
/// [`EventHandler::handle`](crate::EventHandler::handle) entry point.
#[derive(Debug, Clone)]
pub enum VerificationEvent {
    UnexpectedCall(UnexpectedCall),
    SequenceVerification(SequenceVerification),
    NoMoreInvocations(NoMoreInvocations),
}

impl VerificationEvent {
    /// Stable snake_case name of the failure kind, used in logs and exports.
    pub fn kind(&self) -> &'static str {
        match self {
            VerificationEvent::UnexpectedCall(_) => "unexpected_call",
            VerificationEvent::SequenceVerification(_) => "sequence_verification",
            VerificationEvent::NoMoreInvocations(_) => "no_more_invocations",
        }
    }

    /// Source location of the verification, if the failure has one.
    pub fn location(&self) -> Option<&Location> {
        match self {
            VerificationEvent::UnexpectedCall(_) => None,
            VerificationEvent::SequenceVerification(e) => Some(e.location()),
            VerificationEvent::NoMoreInvocations(e) => Some(e.location()),
        }
    }

    #[cfg(feature = "serde")]
    pub(crate) fn export(&self, reporter: &Reporter) -> Result<crate::reporting::ReportExport<'_>> {
        match self {
            VerificationEvent::UnexpectedCall(e) => e.export(reporter),
            VerificationEvent::SequenceVerification(e) => e.export(reporter),
            VerificationEvent::NoMoreInvocations(e) => e.export(reporter),
        }
    }

    /// Export the failure as a single-line JSON object.
    ///
    /// The object has the fields `kind`, `location` (`null` for unexpected
    /// calls), `report` (the rendered text) and `invocations` (every
    /// involved call, untruncated).
    ///
    /// # Errors
    ///
    /// Propagates collaborator formatting errors and serialization errors.
    #[cfg(feature = "serde")]
    #[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.export(&Reporter::default())?)?)
    }
}

impl Formattable for VerificationEvent {
    fn format(&self) -> Result<String> {
        Reporter::default().render(self)
    }
}

impl From<UnexpectedCall> for VerificationEvent {
    fn from(e: UnexpectedCall) -> Self {
        VerificationEvent::UnexpectedCall(e)
    }
}

impl From<SequenceVerification> for VerificationEvent {
    fn from(e: SequenceVerification) -> Self {
        VerificationEvent::SequenceVerification(e)
    }
}

impl From<NoMoreInvocations> for VerificationEvent {
    fn from(e: NoMoreInvocations) -> Self {
        VerificationEvent::NoMoreInvocations(e)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{Invocation, Sequence, VerificationType};

    fn unexpected() -> VerificationEvent {
        UnexpectedCall::new(Arc::new("charge(100)")).into()
    }

    fn no_more() -> VerificationEvent {
        let calls: Vec<Arc<dyn Invocation>> = vec![Arc::new("ping()")];
        NoMoreInvocations::new(Location::new("a.rs", 3), calls).into()
    }

    fn sequence() -> VerificationEvent {
        SequenceVerification::new(
            Location::new("b.rs", 9),
            VerificationType::Exact,
            1,
            vec![Sequence::atomic("pong()")],
            vec![],
        )
        .unwrap()
        .into()
    }

    #[test]
    fn kind_names_each_variant() {
        assert_eq!(unexpected().kind(), "unexpected_call");
        assert_eq!(no_more().kind(), "no_more_invocations");
        assert_eq!(sequence().kind(), "sequence_verification");
    }

    #[test]
    fn location_only_for_verifications() {
        assert!(unexpected().location().is_none());
        assert_eq!(no_more().location().map(|l| l.line()), Some(3));
        assert_eq!(sequence().location().map(|l| l.file()), Some("b.rs"));
    }

    #[test]
    fn formats_like_the_wrapped_failure() {
        assert_eq!(
            unexpected().format().unwrap(),
            "Unexpected Method Call: charge(100)"
        );
        assert!(sequence().format().unwrap().starts_with("b.rs:9: "));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn to_json_exports_kind_location_and_invocations() {
        let json: serde_json::Value = serde_json::from_str(&no_more().to_json().unwrap()).unwrap();
        assert_eq!(json["kind"], "no_more_invocations");
        assert_eq!(json["location"]["file"], "a.rs");
        assert_eq!(json["location"]["line"], 3);
        assert_eq!(json["invocations"][0], "ping()");
        assert!(json["report"].as_str().unwrap().ends_with("\nping()"));

        let json: serde_json::Value =
            serde_json::from_str(&unexpected().to_json().unwrap()).unwrap();
        assert!(json["location"].is_null());
    }
}
