#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    Contact,
    FantasyLeague,
    ListingRequest,
    EventRegistration,
}

impl SubmissionKind {
    /// Resolves the `type` discriminator of a submission.
    ///
    /// Only the exact names of the first three kinds are recognised. Every
    /// other value, including a missing one, is an event registration.
    pub fn from_type(submission_type: Option<&str>) -> SubmissionKind {
        match submission_type {
            Some("contact") => SubmissionKind::Contact,
            Some("fantasy-league") => SubmissionKind::FantasyLeague,
            Some("listing-request") => SubmissionKind::ListingRequest,
            _ => SubmissionKind::EventRegistration,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionKind::Contact => "contact",
            SubmissionKind::FantasyLeague => "fantasy-league",
            SubmissionKind::ListingRequest => "listing-request",
            SubmissionKind::EventRegistration => "event-registration",
        }
    }
}

impl std::fmt::Display for SubmissionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
