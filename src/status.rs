//! Verdict types.

use crate::context::AccessContext;
use crate::error::AccessError;
use crate::ids::EntityId;

/// Denial messages produced by the deciders.
pub mod messages {
    use crate::ids::EntityId;

    pub const ACCESS_DENIED: &str = "Access denied.";
    pub const RESOURCE_NOT_FOUND: &str = "The resource you are attempting to access cannot be found";
    pub const UNMET_ACCESS_REQUIREMENTS: &str =
        "There are unmet access requirements that must be met to read content in the requested container.";
    pub const ANONYMOUS_READ_ONLY: &str = "Anonymous users have only READ access permission.";
    pub const CERTIFIED_USER_CONTENT: &str = "Only certified users may create or update content in Synapse.";
    pub const TERMS_OF_USE_NOT_ACCEPTED: &str = "You have not yet agreed to the Synapse Terms of Use.";

    /// `Entity syn123 is in trash can.`
    pub fn entity_in_trash(entity_id: EntityId) -> String {
        format!("Entity {entity_id} is in trash can.")
    }
}

/// Classification of a denial, for callers that map verdicts to external
/// status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DenialKind {
    NotFound,
    EntityInTrash,
    Forbidden,
}

/// Payload of [`AuthorizationStatus::AccessDenied`].
///
/// Equality looks at the message only, so a denial built from a bare
/// message equals one built from an [`AccessError`] with the same text.
#[derive(Debug, Clone, Eq)]
pub struct AccessDenied {
    message: String,
    kind: Option<DenialKind>,
}

impl AccessDenied {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> Option<DenialKind> {
        self.kind
    }

    /// The structured error a caller should surface for this denial.
    /// Unclassified denials map to [`AccessError::Forbidden`].
    pub fn to_error(&self) -> AccessError {
        let message = self.message.clone();
        match self.kind {
            Some(DenialKind::NotFound) => AccessError::NotFound(message),
            Some(DenialKind::EntityInTrash) => AccessError::EntityInTrash(message),
            Some(DenialKind::Forbidden) | None => AccessError::Forbidden(message),
        }
    }
}

impl PartialEq for AccessDenied {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

/// Outcome of an authorization check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationStatus {
    Authorized,
    AccessDenied(AccessDenied),
}

impl AuthorizationStatus {
    #[inline]
    pub fn authorized() -> Self {
        AuthorizationStatus::Authorized
    }

    /// A denial carrying only a message.
    pub fn access_denied(message: impl Into<String>) -> Self {
        AuthorizationStatus::AccessDenied(AccessDenied {
            message: message.into(),
            kind: None,
        })
    }

    /// A denial derived from a structured error; the error's message is kept
    /// together with its classification.
    pub fn denied_by(error: AccessError) -> Self {
        let kind = match &error {
            AccessError::NotFound(_) => DenialKind::NotFound,
            AccessError::EntityInTrash(_) => DenialKind::EntityInTrash,
            AccessError::Forbidden(_) => DenialKind::Forbidden,
        };
        AuthorizationStatus::AccessDenied(AccessDenied {
            message: error.to_string(),
            kind: Some(kind),
        })
    }

    #[inline]
    pub fn is_authorized(&self) -> bool {
        matches!(self, AuthorizationStatus::Authorized)
    }

    #[inline]
    pub fn is_denied(&self) -> bool {
        !self.is_authorized()
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            AuthorizationStatus::Authorized => None,
            AuthorizationStatus::AccessDenied(denied) => Some(denied.message()),
        }
    }

    pub fn denial_kind(&self) -> Option<DenialKind> {
        match self {
            AuthorizationStatus::Authorized => None,
            AuthorizationStatus::AccessDenied(denied) => denied.kind(),
        }
    }

    /// `Ok(())` when authorized, otherwise the error to surface.
    pub fn check_authorized(&self) -> Result<(), AccessError> {
        match self {
            AuthorizationStatus::Authorized => Ok(()),
            AuthorizationStatus::AccessDenied(denied) => Err(denied.to_error()),
        }
    }
}

impl From<AccessError> for AuthorizationStatus {
    fn from(error: AccessError) -> Self {
        AuthorizationStatus::denied_by(error)
    }
}

/// A verdict together with the context it was reached for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersEntityAccessInfo {
    context: AccessContext,
    status: AuthorizationStatus,
}

impl UsersEntityAccessInfo {
    pub fn new(context: AccessContext, status: AuthorizationStatus) -> Self {
        UsersEntityAccessInfo { context, status }
    }

    pub fn context(&self) -> &AccessContext {
        &self.context
    }

    pub fn status(&self) -> &AuthorizationStatus {
        &self.status
    }

    pub fn entity_id(&self) -> EntityId {
        self.context.entity_id()
    }

    pub fn is_authorized(&self) -> bool {
        self.status.is_authorized()
    }

    pub fn into_parts(self) -> (AccessContext, AuthorizationStatus) {
        (self.context, self.status)
    }
}
