//! Small vocabulary types shared by the facts and the deciders.

use std::fmt;

/// The kind of access being requested on an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessType {
    Create,
    Read,
    Update,
    Delete,
    ChangePermissions,
    Download,
    Upload,
    ChangeSettings,
    Moderate,
    ReadPrivateSubmission,
    UpdateSubmission,
    DeleteSubmission,
    Participate,
    Submit,
    SendMessage,
}

impl AccessType {
    /// Every access type, in declaration order.
    pub const ALL: [AccessType; 15] = [
        AccessType::Create,
        AccessType::Read,
        AccessType::Update,
        AccessType::Delete,
        AccessType::ChangePermissions,
        AccessType::Download,
        AccessType::Upload,
        AccessType::ChangeSettings,
        AccessType::Moderate,
        AccessType::ReadPrivateSubmission,
        AccessType::UpdateSubmission,
        AccessType::DeleteSubmission,
        AccessType::Participate,
        AccessType::Submit,
        AccessType::SendMessage,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            AccessType::Create => "CREATE",
            AccessType::Read => "READ",
            AccessType::Update => "UPDATE",
            AccessType::Delete => "DELETE",
            AccessType::ChangePermissions => "CHANGE_PERMISSIONS",
            AccessType::Download => "DOWNLOAD",
            AccessType::Upload => "UPLOAD",
            AccessType::ChangeSettings => "CHANGE_SETTINGS",
            AccessType::Moderate => "MODERATE",
            AccessType::ReadPrivateSubmission => "READ_PRIVATE_SUBMISSION",
            AccessType::UpdateSubmission => "UPDATE_SUBMISSION",
            AccessType::DeleteSubmission => "DELETE_SUBMISSION",
            AccessType::Participate => "PARTICIPATE",
            AccessType::Submit => "SUBMIT",
            AccessType::SendMessage => "SEND_MESSAGE",
        }
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sensitivity classification of an entity's data.
///
/// Anything not explicitly marked open is treated as sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataType {
    OpenData,
    #[default]
    SensitiveData,
}

impl DataType {
    #[inline]
    pub fn is_open(&self) -> bool {
        matches!(self, DataType::OpenData)
    }
}
