//! Identifier newtypes and the well-known bootstrap ids.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseIdError;

/// Prefix used when rendering entity ids for humans.
pub const ENTITY_ID_PREFIX: &str = "syn";

/// Id of a repository entity (file, folder, project, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub u64);

impl EntityId {
    #[inline]
    pub const fn new(id: u64) -> Self {
        EntityId(id)
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ENTITY_ID_PREFIX}{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = ParseIdError;

    /// Accepts both `syn123` and `123`. The prefix is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = match trimmed.get(..ENTITY_ID_PREFIX.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(ENTITY_ID_PREFIX) => {
                &trimmed[ENTITY_ID_PREFIX.len()..]
            }
            _ => trimmed,
        };
        digits
            .parse::<u64>()
            .map(EntityId)
            .map_err(|_| ParseIdError(s.to_string()))
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        EntityId(id)
    }
}

/// Id of a principal: a user or a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrincipalId(pub u64);

impl PrincipalId {
    #[inline]
    pub const fn new(id: u64) -> Self {
        PrincipalId(id)
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PrincipalId {
    fn from(id: u64) -> Self {
        PrincipalId(id)
    }
}

/// Reserved entities created when the repository is bootstrapped.
pub mod bootstrap_nodes {
    use super::EntityId;

    /// Root of the entity hierarchy.
    pub const ROOT: EntityId = EntityId(4489);
    /// Container that becomes the benefactor of every trashed entity.
    pub const TRASH: EntityId = EntityId(1681355);
}

/// Reserved principals created when the repository is bootstrapped.
pub mod bootstrap_principals {
    use super::PrincipalId;

    pub const ANONYMOUS_USER: PrincipalId = PrincipalId(273950);
    pub const PUBLIC_GROUP: PrincipalId = PrincipalId(273949);
    pub const AUTHENTICATED_USERS_GROUP: PrincipalId = PrincipalId(273948);
    /// Members of this group have passed the certification quiz.
    pub const CERTIFIED_USERS: PrincipalId = PrincipalId(3);
}
