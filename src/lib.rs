//! # entity-access
//!
//! A small, auditable, total, deterministic entity access decision engine.
//!
//! ## Overview
//!
//! Given a user, a repository entity and a requested access type, this
//! library returns a single verdict: authorized, or denied with a message
//! and, where it matters to the caller, a structured denial kind.
//!
//! The verdict is reached by running an ordered chain of [`Decider`]s over a
//! frozen [`AccessContext`]. Each decider either settles the check or defers
//! to the next one; the first decider that settles wins.
//!
//! ## Guarantees
//!
//! - **Totality**: every chain ends with an unconditional decider, checked at
//!   compile time for the standard chain and at construction for custom ones
//! - **Purity**: evaluation does no I/O and mutates nothing
//! - **Determinism**: the same context always yields an equal verdict
//! - **No panics**: fallible operations return `Result`
//!
//! ## Example
//!
//! ```
//! use entity_access::{
//!     AccessContext, AccessType, DeciderChain, EntityId, PrincipalId, UserEntityPermissionsState,
//!     UserInfo, UserInfoState, UsersRestrictionStatus,
//! };
//!
//! let user = UserInfoState::new(UserInfo::new(false, PrincipalId(333)));
//! let state = UserEntityPermissionsState::new(EntityId(111))
//!     .with_does_entity_exist(true)
//!     .with_has_download(true);
//! let restriction = UsersRestrictionStatus::new(EntityId(111), PrincipalId(333));
//!
//! let ctx = AccessContext::builder()
//!     .with_user(user)
//!     .with_permission_state(state)
//!     .with_restriction_status(restriction)
//!     .with_access_type(AccessType::Download)
//!     .build()
//!     .expect("complete context");
//!
//! let info = DeciderChain::entity_access().evaluate(&ctx);
//! assert!(info.is_authorized());
//! ```
//!
//! ## Standard chain
//!
//! 1. `GRANT_IF_ADMIN`
//! 2. `DENY_IF_IN_TRASH`
//! 3. `DENY_IF_DOES_NOT_EXIST`
//! 4. `DENY_IF_HAS_UNMET_ACCESS_RESTRICTIONS`
//! 5. `GRANT_IF_OPEN_DATA_WITH_READ`
//! 6. `GRANT_IF_HAS_DOWNLOAD`, `GRANT_IF_HAS_MODERATE`,
//!    `GRANT_IF_HAS_CHANGE_SETTINGS`, `GRANT_IF_HAS_CHANGE_PERMISSION`,
//!    `GRANT_IF_HAS_DELETE`
//! 7. `DENY_IF_ANONYMOUS`
//! 8. `DENY_IF_NOT_CERTIFIED`
//! 9. `DENY_IF_HAS_NOT_ACCEPTED_TERMS_OF_USE`
//! 10. `DENY`

mod chain;
mod config;
mod context;
mod decider;
mod error;
mod ids;
mod macros;
mod permissions;
mod provider;
mod status;
mod types;
mod user;

// Public API exports
pub use chain::{DeciderChain, DeciderChainBuilder, EvaluationStats, ENTITY_ACCESS_RULES};
pub use config::{ChainConfig, DEFAULT_MAX_DECIDERS};
pub use context::{AccessContext, AccessContextBuilder};
pub use decider::{Decider, Terminal};
pub use error::{AccessError, AuthorizeError, ChainError, ContextError, Facet, ParseIdError, ProviderError};
pub use ids::{bootstrap_nodes, bootstrap_principals, EntityId, PrincipalId, ENTITY_ID_PREFIX};
pub use permissions::{UserEntityPermissionsState, UsersRestrictionStatus};
pub use provider::{EntityAuthorizer, PermissionStateProvider, RestrictionStatusProvider, UserInfoProvider};
pub use status::{messages, AccessDenied, AuthorizationStatus, DenialKind, UsersEntityAccessInfo};
pub use types::{AccessType, DataType};
pub use user::{UserInfo, UserInfoState};
