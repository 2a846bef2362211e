mod contact;
mod event_registration;
mod fantasy_league;
mod field;
mod listing_request;
mod rendered_email;
mod submission;
mod submission_kind;

pub use contact::ContactMessage;
pub use event_registration::EventRegistration;
pub use fantasy_league::FantasyLeagueSignup;
pub use field::{Field, RawHtml};
pub use listing_request::ListingRequest;
pub use rendered_email::RenderedEmail;
pub use submission::{Submission, SubmissionRequest};
pub use submission_kind::SubmissionKind;
