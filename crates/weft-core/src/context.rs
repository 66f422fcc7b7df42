use uuid::Uuid;

/// Identity of the caller, attached to each request by the server middleware
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Tenant the request acts on behalf of
    pub tenant_id: Option<Uuid>,
    /// Authenticated user, if any
    pub user_id: Option<Uuid>,
}

impl RequestContext {
    /// Create a context with no identity
    pub const fn anonymous() -> Self {
        Self {
            tenant_id: None,
            user_id: None,
        }
    }

    /// Whether a user identity was supplied
    pub const fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_context_is_not_authenticated() {
        let ctx = RequestContext::anonymous();
        assert!(!ctx.is_authenticated());
        assert_eq!(ctx, RequestContext::default());
    }

    #[test]
    fn user_identity_authenticates() {
        let ctx = RequestContext {
            tenant_id: None,
            user_id: Some(Uuid::nil()),
        };
        assert!(ctx.is_authenticated());
    }
}
