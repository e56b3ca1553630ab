//! Resume download and resume-by-email.

pub mod document;
pub mod email;
pub mod error;

pub use document::{ResumeConfig, load_resume};
pub use email::{
    OutboxDelivery, ResumeDelivery, ResumeDeliveryRequest, ResumeEmailRequest, request_resume,
    validate_email,
};
pub use error::{ResumeError, ResumeResult};
