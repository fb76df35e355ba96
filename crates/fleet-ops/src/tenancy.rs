use serde::{Deserialize, Serialize};

/// Identifier wrapper for the owning organization of every record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrgId(pub String);

/// Identifier wrapper for a dashboard user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Identifier wrapper for a fleet vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VehicleId(pub String);

/// Identifier wrapper for a driver.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DriverId(pub String);

/// Identifier wrapper for an uploaded document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub String);

/// Identifier wrapper for a notification message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(pub String);

/// Dashboard role carried by a user session (e.g. "driver", "dispatcher").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleName(pub String);

/// Caller identity threaded explicitly through every repository operation.
///
/// Tenant isolation is a parameter, never ambient state: repositories filter
/// reads by `org_id` and stamp it on writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgContext {
    pub org_id: OrgId,
    pub user_id: UserId,
    pub user_name: String,
    pub role: RoleName,
}

impl OrgContext {
    pub fn new(org_id: &str, user_id: &str, user_name: &str, role: &str) -> Self {
        Self {
            org_id: OrgId(org_id.to_string()),
            user_id: UserId(user_id.to_string()),
            user_name: user_name.to_string(),
            role: RoleName(role.to_string()),
        }
    }
}

/// Flat query-string form of [`OrgContext`] used by GET and DELETE endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct OrgContextQuery {
    pub org_id: String,
    pub user_id: String,
    pub user_name: String,
    pub role: String,
}

impl From<OrgContextQuery> for OrgContext {
    fn from(query: OrgContextQuery) -> Self {
        Self::new(&query.org_id, &query.user_id, &query.user_name, &query.role)
    }
}
