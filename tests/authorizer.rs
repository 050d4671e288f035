//! End-to-end checks through `EntityAuthorizer` with in-memory providers.

use std::collections::HashMap;

use entity_access::{
    bootstrap_nodes, messages, AccessType, AuthorizeError, ContextError, Decider, DeciderChain, EntityAuthorizer,
    EntityId, PermissionStateProvider, PrincipalId, ProviderError, RestrictionStatusProvider,
    UserEntityPermissionsState, UserInfo, UserInfoProvider, UserInfoState, UsersRestrictionStatus,
};

#[derive(Default)]
struct Users(HashMap<PrincipalId, UserInfoState>);

impl UserInfoProvider for Users {
    fn user_info_state(&self, user_id: PrincipalId) -> Result<UserInfoState, ProviderError> {
        self.0.get(&user_id).cloned().ok_or(ProviderError::UserNotFound(user_id))
    }
}

#[derive(Default)]
struct Permissions(HashMap<EntityId, UserEntityPermissionsState>);

impl PermissionStateProvider for Permissions {
    fn permission_state(
        &self,
        entity_id: EntityId,
        _user_id: PrincipalId,
    ) -> Result<UserEntityPermissionsState, ProviderError> {
        // Unknown entities resolve to a state that does not exist.
        Ok(self
            .0
            .get(&entity_id)
            .cloned()
            .unwrap_or_else(|| UserEntityPermissionsState::new(entity_id)))
    }
}

struct Restrictions {
    unmet: Vec<EntityId>,
    available: bool,
}

impl RestrictionStatusProvider for Restrictions {
    fn restriction_status(
        &self,
        entity_id: EntityId,
        user_id: PrincipalId,
    ) -> Result<UsersRestrictionStatus, ProviderError> {
        if !self.available {
            return Err(ProviderError::Unavailable {
                source_name: "restriction store",
                reason: "connection refused".to_string(),
            });
        }
        Ok(UsersRestrictionStatus::new(entity_id, user_id).with_has_unmet(self.unmet.contains(&entity_id)))
    }
}

/// Hands out restriction status for the wrong user.
struct SkewedRestrictions;

impl RestrictionStatusProvider for SkewedRestrictions {
    fn restriction_status(
        &self,
        entity_id: EntityId,
        _user_id: PrincipalId,
    ) -> Result<UsersRestrictionStatus, ProviderError> {
        Ok(UsersRestrictionStatus::new(entity_id, PrincipalId(0)))
    }
}

const ALICE: PrincipalId = PrincipalId(333);
const READABLE: EntityId = EntityId(10);
const TRASHED: EntityId = EntityId(11);
const RESTRICTED: EntityId = EntityId(12);
const MISSING: EntityId = EntityId(13);

fn users() -> Users {
    let alice = UserInfoState::new(UserInfo::new(false, ALICE))
        .override_is_certified(true)
        .override_accepts_terms_of_use(true);
    Users(HashMap::from([(ALICE, alice)]))
}

fn permissions() -> Permissions {
    let existing = |id: EntityId| {
        UserEntityPermissionsState::new(id)
            .with_does_entity_exist(true)
            .with_has_download(true)
    };
    Permissions(HashMap::from([
        (READABLE, existing(READABLE)),
        (TRASHED, existing(TRASHED).with_benefactor_id(bootstrap_nodes::TRASH)),
        (RESTRICTED, existing(RESTRICTED)),
    ]))
}

fn authorizer(available: bool) -> EntityAuthorizer<Users, Permissions, Restrictions> {
    EntityAuthorizer::new(
        users(),
        permissions(),
        Restrictions {
            unmet: vec![RESTRICTED],
            available,
        },
    )
}

#[test]
fn test_authorize_single() {
    let info = authorizer(true).authorize(ALICE, READABLE, AccessType::Download).unwrap();
    assert!(info.is_authorized());
    assert_eq!(info.context().access_type(), AccessType::Download);
    assert_eq!(info.context().user_id(), ALICE);
}

#[test]
fn test_authorize_many_preserves_order() {
    let infos = authorizer(true)
        .authorize_many(ALICE, &[MISSING, READABLE, RESTRICTED, TRASHED], AccessType::Download)
        .unwrap();

    let ids: Vec<EntityId> = infos.iter().map(|i| i.entity_id()).collect();
    assert_eq!(ids, vec![MISSING, READABLE, RESTRICTED, TRASHED]);

    let reasons: Vec<Option<&str>> = infos.iter().map(|i| i.status().message()).collect();
    assert_eq!(
        reasons,
        vec![
            Some(messages::RESOURCE_NOT_FOUND),
            None,
            Some(messages::UNMET_ACCESS_REQUIREMENTS),
            Some("Entity syn11 is in trash can."),
        ]
    );
}

#[test]
fn test_unknown_user() {
    let err = authorizer(true)
        .authorize(PrincipalId(999), READABLE, AccessType::Read)
        .unwrap_err();
    assert_eq!(err, AuthorizeError::Provider(ProviderError::UserNotFound(PrincipalId(999))));
}

#[test]
fn test_provider_failure_aborts_before_evaluation() {
    let err = authorizer(false)
        .authorize_many(ALICE, &[READABLE, TRASHED], AccessType::Read)
        .unwrap_err();
    assert!(matches!(
        err,
        AuthorizeError::Provider(ProviderError::Unavailable { source_name: "restriction store", .. })
    ));
}

#[test]
fn test_inconsistent_facts_rejected() {
    let authorizer = EntityAuthorizer::new(users(), permissions(), SkewedRestrictions);
    let err = authorizer.authorize(ALICE, READABLE, AccessType::Read).unwrap_err();
    assert_eq!(
        err,
        AuthorizeError::Context(ContextError::MismatchedUser {
            user: ALICE,
            restriction: PrincipalId(0),
        })
    );
}

#[test]
fn test_custom_chain() {
    let chain = DeciderChain::builder()
        .deciders([Decider::DenyIfInTrash, Decider::Deny])
        .build()
        .unwrap();
    let authorizer = EntityAuthorizer::with_chain(
        users(),
        permissions(),
        Restrictions {
            unmet: vec![],
            available: true,
        },
        chain.clone(),
    );
    assert_eq!(authorizer.chain(), &chain);

    let info = authorizer.authorize(ALICE, READABLE, AccessType::Download).unwrap();
    assert_eq!(info.status().message(), Some(messages::ACCESS_DENIED));
}
