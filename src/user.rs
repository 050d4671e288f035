//! Facts about the requesting principal.

use std::collections::BTreeSet;

use crate::ids::{bootstrap_principals, PrincipalId};

/// A user as loaded by the user collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    id: PrincipalId,
    is_admin: bool,
    groups: BTreeSet<PrincipalId>,
    accepts_terms_of_use: bool,
}

impl UserInfo {
    /// A user that belongs to no groups and has not accepted the terms of use.
    pub fn new(is_admin: bool, id: PrincipalId) -> Self {
        UserInfo {
            id,
            is_admin,
            groups: BTreeSet::new(),
            accepts_terms_of_use: false,
        }
    }

    pub fn with_groups<I>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = PrincipalId>,
    {
        self.groups.extend(groups);
        self
    }

    pub fn with_accepts_terms_of_use(mut self, accepts: bool) -> Self {
        self.accepts_terms_of_use = accepts;
        self
    }

    pub fn id(&self) -> PrincipalId {
        self.id
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn groups(&self) -> &BTreeSet<PrincipalId> {
        &self.groups
    }

    pub fn is_member_of(&self, group: PrincipalId) -> bool {
        self.groups.contains(&group)
    }

    pub fn accepts_terms_of_use(&self) -> bool {
        self.accepts_terms_of_use
    }
}

/// Eligibility facts derived from a [`UserInfo`].
///
/// Certification comes from membership of
/// [`CERTIFIED_USERS`](bootstrap_principals::CERTIFIED_USERS) and terms-of-use
/// acceptance from the user record. Both can be overridden while the state is
/// being built; once placed in a context the value is never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfoState {
    user_info: UserInfo,
    is_certified: bool,
    accepts_terms_of_use: bool,
}

impl UserInfoState {
    pub fn new(user_info: UserInfo) -> Self {
        let is_certified = user_info.is_member_of(bootstrap_principals::CERTIFIED_USERS);
        let accepts_terms_of_use = user_info.accepts_terms_of_use();
        UserInfoState {
            user_info,
            is_certified,
            accepts_terms_of_use,
        }
    }

    /// Replace the derived certification status.
    pub fn override_is_certified(mut self, is_certified: bool) -> Self {
        self.is_certified = is_certified;
        self
    }

    /// Replace the derived terms-of-use acceptance.
    pub fn override_accepts_terms_of_use(mut self, accepts: bool) -> Self {
        self.accepts_terms_of_use = accepts;
        self
    }

    pub fn user_info(&self) -> &UserInfo {
        &self.user_info
    }

    pub fn user_id(&self) -> PrincipalId {
        self.user_info.id()
    }

    pub fn is_admin(&self) -> bool {
        self.user_info.is_admin()
    }

    /// True for the reserved anonymous principal.
    pub fn is_anonymous(&self) -> bool {
        self.user_info.id() == bootstrap_principals::ANONYMOUS_USER
    }

    pub fn is_certified(&self) -> bool {
        self.is_certified
    }

    pub fn accepts_terms_of_use(&self) -> bool {
        self.accepts_terms_of_use
    }
}

impl From<UserInfo> for UserInfoState {
    fn from(user_info: UserInfo) -> Self {
        UserInfoState::new(user_info)
    }
}
