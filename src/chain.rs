//! Ordered, short-circuiting evaluation of deciders.

use std::borrow::Cow;

use tracing::{debug, instrument, trace};

use crate::config::ChainConfig;
use crate::context::AccessContext;
use crate::decider::{Decider, Terminal};
use crate::error::ChainError;
use crate::status::{AuthorizationStatus, UsersEntityAccessInfo};

/// The standard entity access rules, in priority order, before the
/// terminal [`Decider::Deny`].
///
/// The order is part of the security contract: reordering changes verdicts.
pub const ENTITY_ACCESS_RULES: [Decider; 13] = [
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
    Decider::DenyIfAnonymous,
    Decider::DenyIfNotCertified,
    Decider::DenyIfHasNotAcceptedTermsOfUse,
];

const ENTITY_ACCESS_TERMINAL: Terminal = Terminal::Deny;

const fn all_conditional(deciders: &[Decider]) -> bool {
    let mut i = 0;
    while i < deciders.len() {
        if deciders[i].is_unconditional() {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(all_conditional(&ENTITY_ACCESS_RULES));

/// Statistics from a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationStats {
    /// Deciders invoked, the deciding one included.
    pub deciders_checked: usize,
    /// The decider whose verdict was returned.
    pub decided_by: Decider,
}

/// An ordered list of deciders that always ends in a [`Terminal`].
///
/// Because the terminal cannot defer, [`evaluate`](Self::evaluate) always
/// produces a verdict. The chain holds no mutable state and can be shared
/// freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeciderChain {
    rules: Cow<'static, [Decider]>,
    terminal: Terminal,
}

impl Default for DeciderChain {
    fn default() -> Self {
        DeciderChain::entity_access()
    }
}

impl DeciderChain {
    /// The standard entity access chain.
    pub const fn entity_access() -> Self {
        DeciderChain {
            rules: Cow::Borrowed(&ENTITY_ACCESS_RULES),
            terminal: ENTITY_ACCESS_TERMINAL,
        }
    }

    pub fn builder() -> DeciderChainBuilder {
        DeciderChainBuilder::new()
    }

    /// Build a chain from configuration, validating it.
    pub fn from_config(config: &ChainConfig) -> Result<Self, ChainError> {
        let deciders = match &config.deciders {
            Some(deciders) => deciders.clone(),
            None => DeciderChain::entity_access().deciders().collect(),
        };
        DeciderChain::builder()
            .deciders(deciders)
            .max_deciders(config.max_deciders)
            .build()
    }

    pub fn from_toml(text: &str) -> Result<Self, ChainError> {
        DeciderChain::from_config(&ChainConfig::from_toml(text)?)
    }

    /// All deciders in evaluation order, terminal last.
    pub fn deciders(&self) -> impl Iterator<Item = Decider> + '_ {
        self.rules
            .iter()
            .copied()
            .chain(std::iter::once(Decider::from(self.terminal)))
    }

    /// Number of deciders, terminal included.
    pub fn len(&self) -> usize {
        self.rules.len() + 1
    }

    /// A chain always holds at least its terminal.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Evaluate the context. The first decider that applies wins; later
    /// deciders are not invoked.
    pub fn evaluate(&self, ctx: &AccessContext) -> UsersEntityAccessInfo {
        self.evaluate_with_stats(ctx).0
    }

    /// Evaluate and report which decider settled the check.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            entity = %ctx.entity_id(),
            user = %ctx.user_id(),
            access_type = %ctx.access_type()
        )
    )]
    pub fn evaluate_with_stats(&self, ctx: &AccessContext) -> (UsersEntityAccessInfo, EvaluationStats) {
        let mut checked = 0;
        for decider in self.rules.iter() {
            checked += 1;
            if let Some(status) = decider.decide(ctx) {
                let stats = EvaluationStats {
                    deciders_checked: checked,
                    decided_by: *decider,
                };
                return finish(ctx, status, stats);
            }
            trace!(decider = decider.name(), "deferred");
        }

        let stats = EvaluationStats {
            deciders_checked: checked + 1,
            decided_by: Decider::from(self.terminal),
        };
        finish(ctx, self.terminal.status(), stats)
    }
}

fn finish(
    ctx: &AccessContext,
    status: AuthorizationStatus,
    stats: EvaluationStats,
) -> (UsersEntityAccessInfo, EvaluationStats) {
    debug!(
        decider = stats.decided_by.name(),
        checked = stats.deciders_checked,
        authorized = status.is_authorized(),
        reason = status.message().unwrap_or(""),
        "entity access decided"
    );
    (UsersEntityAccessInfo::new(ctx.clone(), status), stats)
}

/// Assembles and validates a [`DeciderChain`].
#[derive(Debug, Clone)]
pub struct DeciderChainBuilder {
    deciders: Vec<Decider>,
    max_deciders: usize,
}

impl Default for DeciderChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DeciderChainBuilder {
    pub fn new() -> Self {
        DeciderChainBuilder {
            deciders: Vec::new(),
            max_deciders: crate::config::DEFAULT_MAX_DECIDERS,
        }
    }

    pub fn decider(mut self, decider: Decider) -> Self {
        self.deciders.push(decider);
        self
    }

    pub fn deciders<I>(mut self, deciders: I) -> Self
    where
        I: IntoIterator<Item = Decider>,
    {
        self.deciders.extend(deciders);
        self
    }

    pub fn max_deciders(mut self, max: usize) -> Self {
        self.max_deciders = max;
        self
    }

    /// Validate and freeze the chain.
    ///
    /// The chain must be non-empty, within the size bound, end with an
    /// unconditional decider and contain no other unconditional decider.
    pub fn build(mut self) -> Result<DeciderChain, ChainError> {
        let count = self.deciders.len();
        if count > self.max_deciders {
            return Err(ChainError::TooManyDeciders {
                count,
                max: self.max_deciders,
            });
        }

        let last = self.deciders.pop().ok_or(ChainError::Empty)?;
        let terminal = last.terminal().ok_or(ChainError::NotTerminated { last })?;

        if let Some(index) = self.deciders.iter().position(Decider::is_unconditional) {
            let decider = self.deciders.get(index + 1).copied().unwrap_or(last);
            return Err(ChainError::UnreachableDecider {
                index: index + 1,
                decider,
            });
        }

        Ok(DeciderChain {
            rules: Cow::Owned(self.deciders),
            terminal,
        })
    }
}
