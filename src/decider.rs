//! The individual access rules.
//!
//! A [`Decider`] inspects an [`AccessContext`] and either settles the check
//! (`Some`) or defers to the next rule (`None`). Deciders are pure: no I/O,
//! no mutation, same answer for the same context.

use serde::Deserialize;

use crate::context::AccessContext;
use crate::error::AccessError;
use crate::status::{messages, AuthorizationStatus, UsersEntityAccessInfo};

/// A single named access rule.
///
/// Names in configuration use the `SCREAMING_SNAKE_CASE` form, e.g.
/// `GRANT_IF_ADMIN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decider {
    GrantIfAdmin,
    DenyIfInTrash,
    DenyIfDoesNotExist,
    DenyIfHasUnmetAccessRestrictions,
    GrantIfOpenDataWithRead,
    GrantIfHasDownload,
    GrantIfHasModerate,
    GrantIfHasChangeSettings,
    GrantIfHasChangePermission,
    GrantIfHasDelete,
    GrantIfHasCreate,
    GrantIfHasUpdate,
    DenyIfAnonymous,
    DenyIfNotCertified,
    DenyIfHasNotAcceptedTermsOfUse,
    Deny,
}

/// A decider that always settles the check. Every chain ends with one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terminal {
    Deny,
}

impl Terminal {
    pub fn status(&self) -> AuthorizationStatus {
        match self {
            Terminal::Deny => AuthorizationStatus::access_denied(messages::ACCESS_DENIED),
        }
    }
}

impl From<Terminal> for Decider {
    fn from(terminal: Terminal) -> Self {
        match terminal {
            Terminal::Deny => Decider::Deny,
        }
    }
}

impl Decider {
    /// Every decider, in declaration order.
    pub const ALL: [Decider; 16] = [
        Decider::GrantIfAdmin,
        Decider::DenyIfInTrash,
        Decider::DenyIfDoesNotExist,
        Decider::DenyIfHasUnmetAccessRestrictions,
        Decider::GrantIfOpenDataWithRead,
        Decider::GrantIfHasDownload,
        Decider::GrantIfHasModerate,
        Decider::GrantIfHasChangeSettings,
        Decider::GrantIfHasChangePermission,
        Decider::GrantIfHasDelete,
        Decider::GrantIfHasCreate,
        Decider::GrantIfHasUpdate,
        Decider::DenyIfAnonymous,
        Decider::DenyIfNotCertified,
        Decider::DenyIfHasNotAcceptedTermsOfUse,
        Decider::Deny,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Decider::GrantIfAdmin => "GRANT_IF_ADMIN",
            Decider::DenyIfInTrash => "DENY_IF_IN_TRASH",
            Decider::DenyIfDoesNotExist => "DENY_IF_DOES_NOT_EXIST",
            Decider::DenyIfHasUnmetAccessRestrictions => "DENY_IF_HAS_UNMET_ACCESS_RESTRICTIONS",
            Decider::GrantIfOpenDataWithRead => "GRANT_IF_OPEN_DATA_WITH_READ",
            Decider::GrantIfHasDownload => "GRANT_IF_HAS_DOWNLOAD",
            Decider::GrantIfHasModerate => "GRANT_IF_HAS_MODERATE",
            Decider::GrantIfHasChangeSettings => "GRANT_IF_HAS_CHANGE_SETTINGS",
            Decider::GrantIfHasChangePermission => "GRANT_IF_HAS_CHANGE_PERMISSION",
            Decider::GrantIfHasDelete => "GRANT_IF_HAS_DELETE",
            Decider::GrantIfHasCreate => "GRANT_IF_HAS_CREATE",
            Decider::GrantIfHasUpdate => "GRANT_IF_HAS_UPDATE",
            Decider::DenyIfAnonymous => "DENY_IF_ANONYMOUS",
            Decider::DenyIfNotCertified => "DENY_IF_NOT_CERTIFIED",
            Decider::DenyIfHasNotAcceptedTermsOfUse => "DENY_IF_HAS_NOT_ACCEPTED_TERMS_OF_USE",
            Decider::Deny => "DENY",
        }
    }

    /// The terminal form of this decider, if it always settles the check.
    pub const fn terminal(&self) -> Option<Terminal> {
        match self {
            Decider::Deny => Some(Terminal::Deny),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_unconditional(&self) -> bool {
        self.terminal().is_some()
    }

    /// True for rules that can only grant; they defer instead of denying.
    pub const fn is_grant_only(&self) -> bool {
        matches!(
            self,
            Decider::GrantIfAdmin
                | Decider::GrantIfOpenDataWithRead
                | Decider::GrantIfHasDownload
                | Decider::GrantIfHasModerate
                | Decider::GrantIfHasChangeSettings
                | Decider::GrantIfHasChangePermission
                | Decider::GrantIfHasDelete
                | Decider::GrantIfHasCreate
                | Decider::GrantIfHasUpdate
        )
    }

    /// Apply the rule. `None` means the rule does not apply.
    pub fn determine_access(&self, ctx: &AccessContext) -> Option<UsersEntityAccessInfo> {
        self.decide(ctx)
            .map(|status| UsersEntityAccessInfo::new(ctx.clone(), status))
    }

    /// Like [`determine_access`](Self::determine_access) without attaching
    /// the context.
    pub fn decide(&self, ctx: &AccessContext) -> Option<AuthorizationStatus> {
        let user = ctx.user();
        let state = ctx.permission_state();

        match self {
            Decider::GrantIfAdmin => grant_if(user.is_admin()),
            Decider::DenyIfInTrash => deny_if(state.is_in_trash(), || {
                AuthorizationStatus::denied_by(AccessError::EntityInTrash(messages::entity_in_trash(
                    state.entity_id(),
                )))
            }),
            Decider::DenyIfDoesNotExist => deny_if(!state.does_entity_exist(), || {
                AuthorizationStatus::denied_by(AccessError::NotFound(messages::RESOURCE_NOT_FOUND.to_string()))
            }),
            Decider::DenyIfHasUnmetAccessRestrictions => deny_if(ctx.restriction_status().has_unmet(), || {
                AuthorizationStatus::access_denied(messages::UNMET_ACCESS_REQUIREMENTS)
            }),
            Decider::GrantIfOpenDataWithRead => grant_if(state.data_type().is_open() && state.has_read()),
            Decider::GrantIfHasDownload => grant_if(state.has_download()),
            Decider::GrantIfHasModerate => grant_if(state.has_moderate()),
            Decider::GrantIfHasChangeSettings => grant_if(state.has_change_settings()),
            Decider::GrantIfHasChangePermission => grant_if(state.has_change_permissions()),
            Decider::GrantIfHasDelete => grant_if(state.has_delete()),
            Decider::GrantIfHasCreate => grant_if(state.has_create()),
            Decider::GrantIfHasUpdate => grant_if(state.has_update()),
            Decider::DenyIfAnonymous => deny_if(user.is_anonymous(), || {
                AuthorizationStatus::access_denied(messages::ANONYMOUS_READ_ONLY)
            }),
            Decider::DenyIfNotCertified => deny_if(!user.is_certified(), || {
                AuthorizationStatus::access_denied(messages::CERTIFIED_USER_CONTENT)
            }),
            Decider::DenyIfHasNotAcceptedTermsOfUse => deny_if(!user.accepts_terms_of_use(), || {
                AuthorizationStatus::access_denied(messages::TERMS_OF_USE_NOT_ACCEPTED)
            }),
            Decider::Deny => Some(Terminal::Deny.status()),
        }
    }
}

#[inline]
fn grant_if(condition: bool) -> Option<AuthorizationStatus> {
    condition.then(AuthorizationStatus::authorized)
}

#[inline]
fn deny_if(condition: bool, status: impl FnOnce() -> AuthorizationStatus) -> Option<AuthorizationStatus> {
    condition.then(status)
}
