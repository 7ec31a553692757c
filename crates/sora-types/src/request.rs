use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An access request collected by the "Request Access" form.
///
/// The core only checks that the required fields are present; everything
/// else (rendering, submission transport) belongs to the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRequest {
    pub name: String,
    pub email: String,
    pub job_title: String,
    pub organization: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub hear_about_us: Option<String>,
    #[serde(default)]
    pub how_can_we_help: Option<String>,
    #[serde(default)]
    pub consent_to_marketing: bool,
    #[serde(default)]
    pub interested_in_serverless: bool,
    #[serde(default)]
    pub interested_in_multimodal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required fields: {}", .fields.join(", "))]
pub struct IncompleteRequest {
    pub fields: Vec<&'static str>,
}

impl AccessRequest {
    /// Names of required fields that are empty or whitespace-only.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("jobTitle", &self.job_title),
            ("organization", &self.organization),
        ];
        required
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect()
    }

    /// Check that every required field is filled in.
    pub fn validate(&self) -> Result<(), IncompleteRequest> {
        let fields = self.missing_fields();
        if fields.is_empty() {
            Ok(())
        } else {
            Err(IncompleteRequest { fields })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> AccessRequest {
        AccessRequest {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            job_title: "ML Engineer".into(),
            organization: "Analytical Engines Ltd".into(),
            ..Default::default()
        }
    }

    #[test]
    fn complete_request_validates() {
        assert!(complete().validate().is_ok());
    }

    #[test]
    fn empty_request_reports_all_required_fields() {
        let err = AccessRequest::default().validate().unwrap_err();
        assert_eq!(err.fields, vec!["name", "email", "jobTitle", "organization"]);
    }

    #[test]
    fn whitespace_counts_as_missing() {
        let mut req = complete();
        req.organization = "   ".into();
        assert_eq!(req.missing_fields(), vec!["organization"]);
    }

    #[test]
    fn optional_fields_do_not_affect_validation() {
        let mut req = complete();
        req.linkedin = None;
        req.consent_to_marketing = false;
        assert!(req.validate().is_ok());
    }
}
