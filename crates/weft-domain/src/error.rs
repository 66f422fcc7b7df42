use std::error::Error as StdError;

use strum::EnumIter;
use thiserror::Error;

/// Errors produced by workflow, scheduling, and credential services
///
/// Messages are fixed, human-safe strings. They never embed identifiers or
/// storage detail, so the HTTP layer may surface them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, EnumIter)]
pub enum DomainError {
    #[error("workflow not found")]
    WorkflowNotFound,
    #[error("workflow version not found")]
    VersionNotFound,
    #[error("step not found")]
    StepNotFound,
    #[error("edge not found")]
    EdgeNotFound,
    #[error("run not found")]
    RunNotFound,
    #[error("schedule not found")]
    ScheduleNotFound,
    #[error("webhook not found")]
    WebhookNotFound,
    #[error("tenant not found")]
    TenantNotFound,
    #[error("block group not found")]
    BlockGroupNotFound,
    #[error("credential not found")]
    CredentialNotFound,
    #[error("system credential not found")]
    SystemCredentialNotFound,
    #[error("block definition not found")]
    BlockDefinitionNotFound,
    #[error("step run not found")]
    StepRunNotFound,
    /// No route serves the requested path and method
    #[error("route not found")]
    RouteNotFound,

    #[error("run cannot be cancelled in its current state")]
    RunNotCancellable,
    #[error("run cannot be resumed in its current state")]
    RunNotResumable,
    #[error("schedule is disabled")]
    ScheduleDisabled,

    #[error("credential has expired")]
    CredentialExpired,
    #[error("credential has been revoked")]
    CredentialRevoked,
    #[error("system credential has expired")]
    SystemCredentialExpired,
    #[error("system credential has been revoked")]
    SystemCredentialRevoked,

    #[error("slug already exists")]
    SlugAlreadyExists,

    #[error("code is hidden by the workflow's visibility settings")]
    CodeHidden,

    #[error("workflow is already published")]
    WorkflowAlreadyPublished,
    #[error("workflow is not editable")]
    WorkflowNotEditable,
    #[error("edge already exists")]
    DuplicateEdge,

    #[error("workflow graph contains a cycle")]
    GraphHasCycle,
    #[error("workflow contains an unconnected step")]
    UnconnectedNode,
    #[error("workflow contains a step unreachable from the start step")]
    UnreachableNode,
    #[error("edge cannot connect a step to itself")]
    SelfLoopEdge,
    #[error("edge would create a cycle")]
    EdgeCreatesCycle,
    #[error("invalid step type")]
    InvalidStepType,
    #[error("invalid cron expression")]
    InvalidCronExpression,
    #[error("invalid block group type")]
    InvalidBlockGroupType,
    #[error("invalid block group role")]
    InvalidGroupRole,
    #[error("step cannot be added to this block group")]
    StepCannotJoinGroup,

    #[error("authentication required")]
    Unauthenticated,
    #[error("access to this resource is not allowed")]
    Forbidden,
}

/// Response class a [`DomainError`] belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    NotFound,
    /// Illegal state transition of a run or schedule
    InvalidState,
    /// Credential exists but can no longer be used
    CredentialUnavailable,
    SlugExists,
    CodeHidden,
    /// Edit rejected because of what the workflow already contains
    Conflict,
    /// Structural or semantic invalidity of a workflow definition
    Validation,
    Unauthenticated,
    Forbidden,
}

impl DomainError {
    /// Class this error belongs to; every variant has exactly one
    pub const fn class(self) -> ErrorClass {
        match self {
            Self::WorkflowNotFound
            | Self::VersionNotFound
            | Self::StepNotFound
            | Self::EdgeNotFound
            | Self::RunNotFound
            | Self::ScheduleNotFound
            | Self::WebhookNotFound
            | Self::TenantNotFound
            | Self::BlockGroupNotFound
            | Self::CredentialNotFound
            | Self::SystemCredentialNotFound
            | Self::BlockDefinitionNotFound
            | Self::StepRunNotFound
            | Self::RouteNotFound => ErrorClass::NotFound,

            Self::RunNotCancellable | Self::RunNotResumable | Self::ScheduleDisabled => ErrorClass::InvalidState,

            Self::CredentialExpired
            | Self::CredentialRevoked
            | Self::SystemCredentialExpired
            | Self::SystemCredentialRevoked => ErrorClass::CredentialUnavailable,

            Self::SlugAlreadyExists => ErrorClass::SlugExists,

            Self::CodeHidden => ErrorClass::CodeHidden,

            Self::WorkflowAlreadyPublished | Self::WorkflowNotEditable | Self::DuplicateEdge => ErrorClass::Conflict,

            Self::GraphHasCycle
            | Self::UnconnectedNode
            | Self::UnreachableNode
            | Self::SelfLoopEdge
            | Self::EdgeCreatesCycle
            | Self::InvalidStepType
            | Self::InvalidCronExpression
            | Self::InvalidBlockGroupType
            | Self::InvalidGroupRole
            | Self::StepCannotJoinGroup => ErrorClass::Validation,

            Self::Unauthenticated => ErrorClass::Unauthenticated,
            Self::Forbidden => ErrorClass::Forbidden,
        }
    }

    /// Whether this error belongs to `class`
    pub fn is(self, class: ErrorClass) -> bool {
        self.class() == class
    }

    /// Pair this error with the lower-level failure that produced it
    #[must_use]
    pub fn caused_by(self, source: impl Into<Box<dyn StdError + Send + Sync + 'static>>) -> DomainFailure {
        DomainFailure {
            kind: self,
            source: source.into(),
        }
    }
}

/// A [`DomainError`] carrying the failure that led to it
///
/// Displays exactly like its kind; the source stays available to logs
/// through the `source()` chain.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct DomainFailure {
    kind: DomainError,
    #[source]
    source: Box<dyn StdError + Send + Sync + 'static>,
}

impl DomainFailure {
    #[must_use]
    pub const fn kind(&self) -> DomainError {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn not_found_members() {
        let members: Vec<_> = DomainError::iter().filter(|e| e.is(ErrorClass::NotFound)).collect();
        assert_eq!(members.len(), 14);
        assert!(members.contains(&DomainError::WorkflowNotFound));
        assert!(members.contains(&DomainError::StepRunNotFound));
        assert!(members.contains(&DomainError::RouteNotFound));
    }

    #[test]
    fn state_and_conflict_classes_are_disjoint() {
        assert_eq!(DomainError::RunNotCancellable.class(), ErrorClass::InvalidState);
        assert_eq!(DomainError::WorkflowAlreadyPublished.class(), ErrorClass::Conflict);
        assert_eq!(DomainError::DuplicateEdge.class(), ErrorClass::Conflict);
    }

    #[test]
    fn authentication_and_authorization_are_distinct() {
        assert_eq!(DomainError::Unauthenticated.class(), ErrorClass::Unauthenticated);
        assert_eq!(DomainError::Forbidden.class(), ErrorClass::Forbidden);
    }

    #[test]
    fn messages_are_short_and_non_empty() {
        for error in DomainError::iter() {
            let message = error.to_string();
            assert!(!message.is_empty());
            assert!(message.len() < 80, "{error:?}: {message}");
        }
    }

    #[test]
    fn recoverable_through_anyhow_context() {
        let wrapped = anyhow::Error::new(DomainError::ScheduleDisabled).context("toggling schedule");
        let found = wrapped.chain().find_map(|e| e.downcast_ref::<DomainError>());
        assert_eq!(found, Some(&DomainError::ScheduleDisabled));
    }

    #[test]
    fn failure_keeps_kind_message_and_cause() {
        let failure = DomainError::RunNotFound.caused_by(std::io::Error::other("row 42 missing in runs"));

        assert_eq!(failure.kind(), DomainError::RunNotFound);
        assert_eq!(failure.to_string(), "run not found");
        let cause = StdError::source(&failure).unwrap();
        assert_eq!(cause.to_string(), "row 42 missing in runs");
    }
}
