//! Domain types and DTOs
//!
//! Flat business records as the backend returns them, plus the typed form
//! fields each entity is edited through.

pub mod categories;
pub mod clients;
pub mod expenses;
pub mod internal_audit;
pub mod land_bank;
pub mod locations;
pub mod projects;
pub mod sfa;
pub mod work_orders;

// Re-export commonly used types
pub use categories::*;
pub use clients::*;
pub use expenses::*;
pub use internal_audit::*;
pub use land_bank::*;
pub use locations::*;
pub use projects::*;
pub use sfa::*;
pub use work_orders::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-assigned primary key.
pub type RecordId = i64;

/// Anything persisted server-side with an id.
pub trait Record {
    fn id(&self) -> RecordId;
}

/// Records whose available actions depend on a workflow status.
pub trait HasStatus {
    fn status(&self) -> &Status;
}

/// A persisted file reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: RecordId,
    pub url: String,
}

impl Attachment {
    /// File name shown next to the "View File" action.
    pub fn display_name(&self) -> &str {
        let path = self.url.split(['?', '#']).next().unwrap_or(&self.url);
        path.rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or(path)
    }
}

/// Workflow status. Transitions are decided by the server; the client only
/// reflects the current value and requests changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    #[default]
    Pending,
    Approved,
    Rejected,
    /// Any value this client does not know about, kept verbatim
    Other(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Other(s) => s,
        }
    }

    /// Edit forms are open for pending and rejected (re-submittable) records.
    pub fn can_edit(&self) -> bool {
        matches!(self, Self::Pending | Self::Rejected)
    }

    pub fn can_delete(&self) -> bool {
        matches!(self, Self::Pending | Self::Rejected)
    }

    /// Approve / reject actions are only offered while pending.
    pub fn can_review(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().as_str() {
            "" | "pending" => Self::Pending,
            "approved" => Self::Approved,
            "rejected" => Self::Rejected,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<Status> for String {
    fn from(s: Status) -> Self {
        s.as_str().to_string()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a status-transition request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusChangeRequest {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl StatusChangeRequest {
    pub fn approve() -> Self {
        Self {
            status: Status::Approved,
            remarks: None,
        }
    }

    pub fn reject(remarks: impl Into<String>) -> Self {
        Self {
            status: Status::Rejected,
            remarks: Some(remarks.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_case_insensitively_and_keeps_unknowns() {
        let statuses: Vec<Status> =
            serde_json::from_str(r#"["approved", "REJECTED", "Pending", "On Hold"]"#).unwrap();
        assert_eq!(
            statuses,
            vec![
                Status::Approved,
                Status::Rejected,
                Status::Pending,
                Status::Other("On Hold".to_string())
            ]
        );
        assert_eq!(serde_json::to_string(&Status::Approved).unwrap(), r#""Approved""#);
    }

    #[test]
    fn status_gates_actions() {
        assert!(Status::Pending.can_edit() && Status::Pending.can_review());
        assert!(Status::Rejected.can_edit() && !Status::Rejected.can_review());
        assert!(!Status::Approved.can_edit() && !Status::Approved.can_delete());
        assert!(!Status::Other("Closed".into()).can_edit());
    }

    #[test]
    fn attachment_display_name_is_last_path_segment() {
        let a = Attachment {
            id: 1,
            url: "/media/land/survey_12.pdf?token=x".to_string(),
        };
        assert_eq!(a.display_name(), "survey_12.pdf");
    }

    #[test]
    fn reject_request_carries_remarks() {
        let body = serde_json::to_value(StatusChangeRequest::reject("Boundary mismatch")).unwrap();
        assert_eq!(body["status"], "Rejected");
        assert_eq!(body["remarks"], "Boundary mismatch");
        let body = serde_json::to_value(StatusChangeRequest::approve()).unwrap();
        assert!(body.get("remarks").is_none());
    }
}
