use serde::Deserialize;

/// Headers the upstream gateway uses to pass caller identity
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdentityConfig {
    /// Header carrying the tenant UUID
    #[serde(default = "default_tenant_header")]
    pub tenant_header: String,
    /// Header carrying the authenticated user UUID
    #[serde(default = "default_user_header")]
    pub user_header: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            tenant_header: default_tenant_header(),
            user_header: default_user_header(),
        }
    }
}

fn default_tenant_header() -> String {
    "x-tenant-id".to_string()
}

fn default_user_header() -> String {
    "x-user-id".to_string()
}
