//! The frozen fact snapshot handed to the deciders.

use crate::error::{ContextError, Facet};
use crate::ids::{EntityId, PrincipalId};
use crate::permissions::{UserEntityPermissionsState, UsersRestrictionStatus};
use crate::types::AccessType;
use crate::user::UserInfoState;

/// Everything the deciders are allowed to look at for one check.
///
/// Built with [`AccessContext::builder`]; a context that exists is always
/// complete and consistent, so deciders never re-validate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessContext {
    user: UserInfoState,
    permission_state: UserEntityPermissionsState,
    restriction_status: UsersRestrictionStatus,
    access_type: AccessType,
}

impl AccessContext {
    pub fn builder() -> AccessContextBuilder {
        AccessContextBuilder::default()
    }

    pub fn user(&self) -> &UserInfoState {
        &self.user
    }

    pub fn permission_state(&self) -> &UserEntityPermissionsState {
        &self.permission_state
    }

    pub fn restriction_status(&self) -> &UsersRestrictionStatus {
        &self.restriction_status
    }

    pub fn access_type(&self) -> AccessType {
        self.access_type
    }

    pub fn entity_id(&self) -> EntityId {
        self.permission_state.entity_id()
    }

    pub fn user_id(&self) -> PrincipalId {
        self.user.user_id()
    }
}

/// Accumulates the facets of an [`AccessContext`].
///
/// Facets can be attached in any order; setting one twice keeps the last.
#[derive(Debug, Clone, Default)]
pub struct AccessContextBuilder {
    user: Option<UserInfoState>,
    permission_state: Option<UserEntityPermissionsState>,
    restriction_status: Option<UsersRestrictionStatus>,
    access_type: Option<AccessType>,
}

impl AccessContextBuilder {
    pub fn with_user(mut self, user: UserInfoState) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_permission_state(mut self, state: UserEntityPermissionsState) -> Self {
        self.permission_state = Some(state);
        self
    }

    pub fn with_restriction_status(mut self, status: UsersRestrictionStatus) -> Self {
        self.restriction_status = Some(status);
        self
    }

    pub fn with_access_type(mut self, access_type: AccessType) -> Self {
        self.access_type = Some(access_type);
        self
    }

    /// Freeze the context.
    ///
    /// Fails if a facet is missing or if the restriction status was resolved
    /// for a different entity or user than the rest of the context.
    pub fn build(self) -> Result<AccessContext, ContextError> {
        let user = self.user.ok_or(ContextError::MissingFacet { facet: Facet::User })?;
        let permission_state = self.permission_state.ok_or(ContextError::MissingFacet {
            facet: Facet::PermissionState,
        })?;
        let restriction_status = self.restriction_status.ok_or(ContextError::MissingFacet {
            facet: Facet::RestrictionStatus,
        })?;
        let access_type = self.access_type.ok_or(ContextError::MissingFacet {
            facet: Facet::AccessType,
        })?;

        if restriction_status.subject_id() != permission_state.entity_id() {
            return Err(ContextError::MismatchedEntity {
                permission: permission_state.entity_id(),
                restriction: restriction_status.subject_id(),
            });
        }
        if restriction_status.user_id() != user.user_id() {
            return Err(ContextError::MismatchedUser {
                user: user.user_id(),
                restriction: restriction_status.user_id(),
            });
        }

        Ok(AccessContext {
            user,
            permission_state,
            restriction_status,
            access_type,
        })
    }
}
