//! Wiring between fact providers and a [`DeciderChain`].
//!
//! Providers do the I/O (ACL resolution, restriction lookups, user
//! records); the chain only ever sees the finished snapshot. A provider
//! failure aborts the check before anything is evaluated.

use tracing::warn;

use crate::chain::DeciderChain;
use crate::context::AccessContext;
use crate::error::{AuthorizeError, ProviderError};
use crate::ids::{EntityId, PrincipalId};
use crate::permissions::{UserEntityPermissionsState, UsersRestrictionStatus};
use crate::status::UsersEntityAccessInfo;
use crate::types::AccessType;
use crate::user::UserInfoState;

/// Supplies eligibility facts about a user.
pub trait UserInfoProvider {
    fn user_info_state(&self, user_id: PrincipalId) -> Result<UserInfoState, ProviderError>;
}

/// Supplies a user's resolved capabilities on an entity.
pub trait PermissionStateProvider {
    fn permission_state(
        &self,
        entity_id: EntityId,
        user_id: PrincipalId,
    ) -> Result<UserEntityPermissionsState, ProviderError>;
}

/// Supplies a user's restriction status on an entity.
pub trait RestrictionStatusProvider {
    fn restriction_status(
        &self,
        entity_id: EntityId,
        user_id: PrincipalId,
    ) -> Result<UsersRestrictionStatus, ProviderError>;
}

/// Loads the facts for a check and evaluates them against a chain.
#[derive(Debug, Clone)]
pub struct EntityAuthorizer<U, P, R> {
    users: U,
    permissions: P,
    restrictions: R,
    chain: DeciderChain,
}

impl<U, P, R> EntityAuthorizer<U, P, R>
where
    U: UserInfoProvider,
    P: PermissionStateProvider,
    R: RestrictionStatusProvider,
{
    /// An authorizer using the standard entity access chain.
    pub fn new(users: U, permissions: P, restrictions: R) -> Self {
        Self::with_chain(users, permissions, restrictions, DeciderChain::entity_access())
    }

    pub fn with_chain(users: U, permissions: P, restrictions: R, chain: DeciderChain) -> Self {
        EntityAuthorizer {
            users,
            permissions,
            restrictions,
            chain,
        }
    }

    pub fn chain(&self) -> &DeciderChain {
        &self.chain
    }

    /// Decide whether `user_id` has `access_type` on `entity_id`.
    pub fn authorize(
        &self,
        user_id: PrincipalId,
        entity_id: EntityId,
        access_type: AccessType,
    ) -> Result<UsersEntityAccessInfo, AuthorizeError> {
        let user = self.load_user(user_id)?;
        self.authorize_loaded(&user, entity_id, access_type)
    }

    /// Decide access for several entities at once. Verdicts come back in
    /// the order of `entity_ids`; the first provider failure aborts the batch.
    pub fn authorize_many(
        &self,
        user_id: PrincipalId,
        entity_ids: &[EntityId],
        access_type: AccessType,
    ) -> Result<Vec<UsersEntityAccessInfo>, AuthorizeError> {
        let user = self.load_user(user_id)?;
        entity_ids
            .iter()
            .map(|&entity_id| self.authorize_loaded(&user, entity_id, access_type))
            .collect()
    }

    fn load_user(&self, user_id: PrincipalId) -> Result<UserInfoState, ProviderError> {
        self.users.user_info_state(user_id).inspect_err(|err| {
            warn!(user = %user_id, error = %err, "failed to load user");
        })
    }

    fn authorize_loaded(
        &self,
        user: &UserInfoState,
        entity_id: EntityId,
        access_type: AccessType,
    ) -> Result<UsersEntityAccessInfo, AuthorizeError> {
        let user_id = user.user_id();
        let permission_state = self
            .permissions
            .permission_state(entity_id, user_id)
            .inspect_err(|err| {
                warn!(entity = %entity_id, user = %user_id, error = %err, "failed to load permission state");
            })?;
        let restriction_status = self
            .restrictions
            .restriction_status(entity_id, user_id)
            .inspect_err(|err| {
                warn!(entity = %entity_id, user = %user_id, error = %err, "failed to load restriction status");
            })?;

        let ctx = AccessContext::builder()
            .with_user(user.clone())
            .with_permission_state(permission_state)
            .with_restriction_status(restriction_status)
            .with_access_type(access_type)
            .build()?;

        Ok(self.chain.evaluate(&ctx))
    }
}
