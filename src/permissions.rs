//! Facts about the target entity: the caller's resolved capabilities and
//! the state of any access restrictions.
//!
//! Both types are produced by collaborators (ACL resolution, restriction
//! resolution) and are treated as frozen once they enter a context. All
//! flags start out `false` so a partially filled state fails closed.

use crate::ids::{bootstrap_nodes, EntityId, PrincipalId};
use crate::types::DataType;

/// The caller's capabilities on one entity, plus the entity facts the
/// deciders need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEntityPermissionsState {
    entity_id: EntityId,
    benefactor_id: Option<EntityId>,
    does_entity_exist: bool,
    data_type: DataType,
    has_read: bool,
    has_download: bool,
    has_create: bool,
    has_update: bool,
    has_delete: bool,
    has_change_permissions: bool,
    has_change_settings: bool,
    has_moderate: bool,
}

impl UserEntityPermissionsState {
    pub fn new(entity_id: impl Into<EntityId>) -> Self {
        UserEntityPermissionsState {
            entity_id: entity_id.into(),
            benefactor_id: None,
            does_entity_exist: false,
            data_type: DataType::default(),
            has_read: false,
            has_download: false,
            has_create: false,
            has_update: false,
            has_delete: false,
            has_change_permissions: false,
            has_change_settings: false,
            has_moderate: false,
        }
    }

    pub fn with_benefactor_id(mut self, benefactor_id: EntityId) -> Self {
        self.benefactor_id = Some(benefactor_id);
        self
    }

    pub fn with_does_entity_exist(mut self, exists: bool) -> Self {
        self.does_entity_exist = exists;
        self
    }

    pub fn with_data_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }

    pub fn with_has_read(mut self, value: bool) -> Self {
        self.has_read = value;
        self
    }

    pub fn with_has_download(mut self, value: bool) -> Self {
        self.has_download = value;
        self
    }

    pub fn with_has_create(mut self, value: bool) -> Self {
        self.has_create = value;
        self
    }

    pub fn with_has_update(mut self, value: bool) -> Self {
        self.has_update = value;
        self
    }

    pub fn with_has_delete(mut self, value: bool) -> Self {
        self.has_delete = value;
        self
    }

    pub fn with_has_change_permissions(mut self, value: bool) -> Self {
        self.has_change_permissions = value;
        self
    }

    pub fn with_has_change_settings(mut self, value: bool) -> Self {
        self.has_change_settings = value;
        self
    }

    pub fn with_has_moderate(mut self, value: bool) -> Self {
        self.has_moderate = value;
        self
    }

    pub fn entity_id(&self) -> EntityId {
        self.entity_id
    }

    pub fn benefactor_id(&self) -> Option<EntityId> {
        self.benefactor_id
    }

    /// An entity is in the trash when the trash container governs its ACL.
    pub fn is_in_trash(&self) -> bool {
        self.benefactor_id == Some(bootstrap_nodes::TRASH)
    }

    pub fn does_entity_exist(&self) -> bool {
        self.does_entity_exist
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn has_read(&self) -> bool {
        self.has_read
    }

    pub fn has_download(&self) -> bool {
        self.has_download
    }

    pub fn has_create(&self) -> bool {
        self.has_create
    }

    pub fn has_update(&self) -> bool {
        self.has_update
    }

    pub fn has_delete(&self) -> bool {
        self.has_delete
    }

    pub fn has_change_permissions(&self) -> bool {
        self.has_change_permissions
    }

    pub fn has_change_settings(&self) -> bool {
        self.has_change_settings
    }

    pub fn has_moderate(&self) -> bool {
        self.has_moderate
    }
}

/// Whether a user still has unmet access requirements on an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersRestrictionStatus {
    subject_id: EntityId,
    user_id: PrincipalId,
    has_unmet: bool,
}

impl UsersRestrictionStatus {
    pub fn new(subject_id: impl Into<EntityId>, user_id: PrincipalId) -> Self {
        UsersRestrictionStatus {
            subject_id: subject_id.into(),
            user_id,
            has_unmet: false,
        }
    }

    pub fn with_has_unmet(mut self, has_unmet: bool) -> Self {
        self.has_unmet = has_unmet;
        self
    }

    pub fn subject_id(&self) -> EntityId {
        self.subject_id
    }

    pub fn user_id(&self) -> PrincipalId {
        self.user_id
    }

    pub fn has_unmet(&self) -> bool {
        self.has_unmet
    }
}
