//! Error types.
//!
//! Business denials are not errors: they travel as
//! [`AuthorizationStatus::AccessDenied`](crate::AuthorizationStatus) values.
//! The types here cover structured denial reasons, malformed contexts,
//! invalid chains and collaborator failures.

use thiserror::Error;

use crate::decider::Decider;
use crate::ids::{EntityId, PrincipalId};

/// Structured reason behind a denial.
///
/// `Display` renders exactly the message, so a status built from one of
/// these compares equal to a status built from the bare message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The target does not exist or must be reported as missing.
    #[error("{0}")]
    NotFound(String),
    /// The target has been moved to the trash can.
    #[error("{0}")]
    EntityInTrash(String),
    /// The caller lacks the required access.
    #[error("{0}")]
    Forbidden(String),
}

impl AccessError {
    /// The human-readable message.
    pub fn message(&self) -> &str {
        match self {
            AccessError::NotFound(m) | AccessError::EntityInTrash(m) | AccessError::Forbidden(m) => m,
        }
    }
}

/// One of the facts an [`AccessContext`](crate::AccessContext) is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    User,
    PermissionState,
    RestrictionStatus,
    AccessType,
}

impl std::fmt::Display for Facet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Facet::User => "user",
            Facet::PermissionState => "permission state",
            Facet::RestrictionStatus => "restriction status",
            Facet::AccessType => "access type",
        };
        f.write_str(name)
    }
}

/// A context could not be assembled. This is a programming error in the
/// caller, never a denial.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("access context is missing its {facet}")]
    MissingFacet { facet: Facet },

    #[error("restriction status is for {restriction} but permission state is for {permission}")]
    MismatchedEntity {
        permission: EntityId,
        restriction: EntityId,
    },

    #[error("restriction status is for user {restriction} but the context user is {user}")]
    MismatchedUser {
        user: PrincipalId,
        restriction: PrincipalId,
    },
}

/// A decider chain failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("decider chain is empty")]
    Empty,

    #[error("decider chain must end with an unconditional decider, found {last:?}")]
    NotTerminated { last: Decider },

    #[error("decider {decider:?} at index {index} follows an unconditional decider and can never run")]
    UnreachableDecider { index: usize, decider: Decider },

    #[error("decider chain has {count} deciders (max {max})")]
    TooManyDeciders { count: usize, max: usize },

    #[error("invalid chain configuration: {0}")]
    Config(String),
}

impl From<toml::de::Error> for ChainError {
    fn from(err: toml::de::Error) -> Self {
        ChainError::Config(err.to_string())
    }
}

/// A collaborator could not supply a fact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("user {0} not found")]
    UserNotFound(PrincipalId),

    #[error("{source_name} unavailable: {reason}")]
    Unavailable {
        source_name: &'static str,
        reason: String,
    },
}

/// Failure to produce a verdict through an
/// [`EntityAuthorizer`](crate::EntityAuthorizer).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthorizeError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Context(#[from] ContextError),
}

/// A string could not be parsed as an id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid id: {0:?}")]
pub struct ParseIdError(pub String);
