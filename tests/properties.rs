//! Property-based checks of the standard decider chain.

use entity_access::{
    bootstrap_nodes, bootstrap_principals, AccessContext, AccessType, DataType, Decider, DeciderChain, EntityId,
    PrincipalId, UserEntityPermissionsState, UserInfo, UserInfoState, UsersRestrictionStatus,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct Facts {
    is_admin: bool,
    is_anonymous: bool,
    is_certified: bool,
    accepts_terms: bool,
    in_trash: bool,
    exists: bool,
    open_data: bool,
    has_unmet: bool,
    flags: [bool; 6],
    access_type: AccessType,
}

fn facts() -> impl Strategy<Value = Facts> {
    (
        any::<[bool; 8]>(),
        any::<[bool; 6]>(),
        prop::sample::select(AccessType::ALL.to_vec()),
    )
        .prop_map(|(b, flags, access_type)| Facts {
            is_admin: b[0],
            is_anonymous: b[1],
            is_certified: b[2],
            accepts_terms: b[3],
            in_trash: b[4],
            exists: b[5],
            open_data: b[6],
            has_unmet: b[7],
            flags,
            access_type,
        })
}

fn build(f: &Facts) -> AccessContext {
    let entity = EntityId(111);
    let user_id = if f.is_anonymous {
        bootstrap_principals::ANONYMOUS_USER
    } else {
        PrincipalId(333)
    };
    let user = UserInfoState::new(UserInfo::new(f.is_admin, user_id))
        .override_is_certified(f.is_certified)
        .override_accepts_terms_of_use(f.accepts_terms);
    let benefactor = if f.in_trash { bootstrap_nodes::TRASH } else { entity };
    let data_type = if f.open_data {
        DataType::OpenData
    } else {
        DataType::SensitiveData
    };
    let state = UserEntityPermissionsState::new(entity)
        .with_benefactor_id(benefactor)
        .with_does_entity_exist(f.exists)
        .with_data_type(data_type)
        .with_has_read(f.flags[0])
        .with_has_download(f.flags[1])
        .with_has_moderate(f.flags[2])
        .with_has_change_settings(f.flags[3])
        .with_has_change_permissions(f.flags[4])
        .with_has_delete(f.flags[5]);
    let restriction = UsersRestrictionStatus::new(entity, user_id).with_has_unmet(f.has_unmet);

    AccessContext::builder()
        .with_user(user)
        .with_permission_state(state)
        .with_restriction_status(restriction)
        .with_access_type(f.access_type)
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn prop_always_decides(f in facts()) {
        let ctx = build(&f);
        let chain = DeciderChain::entity_access();
        let (info, stats) = chain.evaluate_with_stats(&ctx);

        prop_assert_eq!(info.context(), &ctx);
        prop_assert!(stats.deciders_checked >= 1 && stats.deciders_checked <= chain.len());
        prop_assert_eq!(chain.deciders().nth(stats.deciders_checked - 1), Some(stats.decided_by));
        if info.is_authorized() {
            prop_assert!(stats.decided_by.is_grant_only());
        } else {
            prop_assert!(!stats.decided_by.is_grant_only());
        }
    }

    #[test]
    fn prop_admin_always_authorized(f in facts()) {
        let f = Facts { is_admin: true, ..f };
        let info = DeciderChain::entity_access().evaluate(&build(&f));
        prop_assert!(info.is_authorized());
    }

    #[test]
    fn prop_idempotent(f in facts()) {
        let ctx = build(&f);
        let chain = DeciderChain::entity_access();
        prop_assert_eq!(chain.evaluate(&ctx), chain.evaluate(&ctx));
    }

    #[test]
    fn prop_trash_denial_not_overridden(f in facts()) {
        let f = Facts { is_admin: false, in_trash: true, flags: [true; 6], open_data: true, ..f };
        let (info, stats) = DeciderChain::entity_access().evaluate_with_stats(&build(&f));
        prop_assert!(!info.is_authorized());
        prop_assert_eq!(stats.decided_by, Decider::DenyIfInTrash);
    }

    #[test]
    fn prop_grant_rules_only_defer(f in facts()) {
        let ctx = build(&f);
        for decider in Decider::ALL.into_iter().filter(Decider::is_grant_only) {
            if let Some(info) = decider.determine_access(&ctx) {
                prop_assert!(info.is_authorized());
            }
        }
    }

    #[test]
    fn prop_verdict_ignores_later_rules(f in facts()) {
        // Flipping the eligibility facts consulted after a capability grant
        // cannot change a verdict reached before them.
        let ctx = build(&f);
        let chain = DeciderChain::entity_access();
        let (info, stats) = chain.evaluate_with_stats(&ctx);
        if stats.deciders_checked <= 10 {
            let flipped = Facts {
                is_certified: !f.is_certified,
                accepts_terms: !f.accepts_terms,
                ..f.clone()
            };
            let other = chain.evaluate(&build(&flipped));
            prop_assert_eq!(info.status(), other.status());
        }
    }
}
