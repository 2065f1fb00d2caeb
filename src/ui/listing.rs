// SPDX-License-Identifier: MPL-2.0
//! Load/submit state shared by the listing screens.
//!
//! ```text
//! Idle ──load──▶ Loading ──ok──▶ Loaded ──submit──▶ Submitting
//!                   │                ▲                  │
//!                   └──err──▶ Failed │◀──── failure ────┤
//!                                    └── refetch ◀─ success
//! ```
//!
//! While a reload is in flight the previous snapshot stays visible. Only
//! [`Listing::is_busy`] gates submit controls; it does not serialize
//! anything.

use crate::error::Result;

/// Which mutation a listing is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Create,
    Join,
    Comment,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase<T> {
    Idle,
    Loading { previous: Vec<T> },
    Loaded(Vec<T>),
    Failed,
    Submitting { action: Submission, snapshot: Vec<T> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    phase: Phase<T>,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self { phase: Phase::Idle }
    }
}

impl<T> Listing<T> {
    #[must_use]
    pub fn phase(&self) -> &Phase<T> {
        &self.phase
    }

    /// Starts a (re)load, keeping whatever rows are on screen.
    pub fn begin_load(&mut self) {
        let previous = match std::mem::replace(&mut self.phase, Phase::Failed) {
            Phase::Loaded(items)
            | Phase::Loading { previous: items }
            | Phase::Submitting {
                snapshot: items, ..
            } => items,
            Phase::Idle | Phase::Failed => Vec::new(),
        };
        self.phase = Phase::Loading { previous };
    }

    /// Applies a read result. Ignored unless a load is in flight.
    pub fn finish_load(&mut self, result: Result<Vec<T>>) -> bool {
        if !matches!(self.phase, Phase::Loading { .. }) {
            tracing::debug!("ignoring read result outside of loading phase");
            return false;
        }
        self.phase = match result {
            Ok(items) => Phase::Loaded(items),
            Err(err) => {
                tracing::warn!(%err, "listing read failed");
                Phase::Failed
            }
        };
        true
    }

    /// Enters `Submitting`. Only allowed from `Loaded`.
    pub fn begin_submit(&mut self, action: Submission) -> bool {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Loaded(snapshot) => {
                self.phase = Phase::Submitting { action, snapshot };
                true
            }
            other => {
                self.phase = other;
                false
            }
        }
    }

    /// Leaves `Submitting`. Success starts the refetch, failure restores
    /// the snapshot unchanged. Returns `false` if nothing was submitting.
    pub fn finish_submit(&mut self, succeeded: bool) -> bool {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Submitting { snapshot, .. } => {
                self.phase = if succeeded {
                    Phase::Loading { previous: snapshot }
                } else {
                    Phase::Loaded(snapshot)
                };
                true
            }
            other => {
                self.phase = other;
                false
            }
        }
    }

    /// Whether a mutation may start now (the listing is `Loaded`).
    #[must_use]
    pub fn can_submit(&self) -> bool {
        matches!(self.phase, Phase::Loaded(_))
    }

    /// The pending mutation, if any.
    #[must_use]
    pub fn submitting(&self) -> Option<Submission> {
        match self.phase {
            Phase::Submitting { action, .. } => Some(action),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(
            self.phase,
            Phase::Loading { .. } | Phase::Submitting { .. }
        )
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self.phase, Phase::Failed)
    }

    /// Rows to render in the current phase.
    #[must_use]
    pub fn items(&self) -> &[T] {
        match &self.phase {
            Phase::Loaded(items)
            | Phase::Loading { previous: items }
            | Phase::Submitting {
                snapshot: items, ..
            } => items,
            Phase::Idle | Phase::Failed => &[],
        }
    }
}
