//! Transient notifications shown at the top of a page.

use serde::Serialize;

use crate::error::BackendError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notice {
    pub fn info(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: Variant::Default,
        }
    }

    pub fn error(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: Variant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == Variant::Destructive
    }

    pub fn submitted() -> Self {
        Self::info("Application Submitted", "Your loan application was submitted successfully!")
    }

    pub fn submission_failed(err: &BackendError) -> Self {
        match err {
            BackendError::Rejected { message: Some(message), .. } if !message.is_empty() => {
                Self::error("Submission Failed", message)
            }
            BackendError::Rejected { .. } | BackendError::Unauthorized => {
                Self::error("Submission Failed", "Unable to submit application")
            }
            BackendError::Transport(_) | BackendError::Decode(_) => {
                Self::error("Server Error", "Something went wrong. Please try again later.")
            }
        }
    }

    pub fn load_failed() -> Self {
        Self::error("Error", "Failed to load applications")
    }

    pub fn delete_failed(err: &BackendError) -> Self {
        match err {
            BackendError::Transport(_) => Self::error("Error", "Server not responding"),
            _ => Self::error("Error", "Failed to delete"),
        }
    }

    pub fn deleted() -> Self {
        Self::info("Deleted", "Application removed.")
    }

    pub fn download_failed() -> Self {
        Self::error("Error", "Failed to download PDF")
    }

    pub fn logged_out() -> Self {
        Self::info("Logged Out", "You have been logged out.")
    }
}
