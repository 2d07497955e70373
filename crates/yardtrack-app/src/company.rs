//! # Company Profile
//!
//! The trading identity printed on every invoice document.
//!
//! Read-only after initialization, so no lock is needed. The default is
//! the deployment this tool was built for; embedders can construct their
//! own.

use serde::{Deserialize, Serialize};

/// Company block rendered at the top of invoice documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub name: String,
    pub tagline: String,
    pub address: String,
    pub contact: String,
    pub email: String,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        CompanyProfile {
            name: "Vishnu Traders".to_string(),
            tagline: "Quality cement & bricks for every build".to_string(),
            address: "Plot 12, Highway Road, Madurai, Tamil Nadu".to_string(),
            contact: "+91 98765 43210".to_string(),
            email: "sales@vishnutraders.in".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let company = CompanyProfile::default();
        assert_eq!(company.name, "Vishnu Traders");
        assert!(!company.email.is_empty());
    }
}
