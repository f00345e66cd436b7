//! Contact card fields, loaded alongside the content tree. The resume path
//! feeds the resume template and the download affordance; the rest backs the
//! contact panel.

use serde::{Deserialize, Serialize};

pub const DEFAULT_RESUME_PATH: &str = "/assets/my-resume.pdf";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
    pub resume: String,
    pub website: String,
}

impl ContactInfo {
    /// The path offered by the resume template and the download affordance.
    pub fn resume_path(&self) -> &str {
        if self.resume.is_empty() {
            DEFAULT_RESUME_PATH
        } else {
            &self.resume
        }
    }
}
