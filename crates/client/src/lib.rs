//! Enrollment form controller.
//!
//! Holds the draft the user is filling in, validates it with the shared
//! rules from `verity_core`, and submits it once to `POST /api/enroll`.
//! State changes go through [`state::reduce`]; [`controller::FormController`]
//! drives it against an [`transport::EnrollmentTransport`].

pub mod controller;
pub mod state;
pub mod transport;

pub use controller::FormController;
pub use state::{FormEvent, FormState, Phase};
pub use transport::{EnrollmentTransport, HttpTransport, TransportError, TransportResponse};
