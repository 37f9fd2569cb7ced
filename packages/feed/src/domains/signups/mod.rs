// Signups domain - the site's form submissions (contact, join, app notify)
//
// There is no form backend: submissions are logged and acknowledged with a
// transient "thanks" notice. The desk owns that acknowledgment lifecycle.

pub mod desk;
pub mod models;

pub use desk::{SubmissionDesk, SubmitError};
pub use models::{AppNotifyRequest, ContactInquiry, JoinRequest};
