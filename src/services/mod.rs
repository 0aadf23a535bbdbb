pub mod admin;
pub mod intake;

pub use admin::{AdminClient, PdfDocument};
pub use intake::IntakeClient;
