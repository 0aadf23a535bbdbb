pub mod application;
pub mod form;
pub mod payload;

pub use application::{Application, ApplicationId, Gender, LoanCategory};
pub use form::{ApplicationForm, FieldErrors, Referral, ValidatedApplication};
pub use payload::{AddressParts, ApplicationPayload};
