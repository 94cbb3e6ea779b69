//! Fixed-answer confirmation gate.

use async_trait::async_trait;

use crate::task::ports::{ConfirmationGate, ConfirmationRequest, Decision};

/// Confirmation gate that always gives the same answer.
///
/// Useful for headless callers that have already obtained consent, and for
/// tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticConfirmation {
    decision: Decision,
}

impl StaticConfirmation {
    /// Creates a gate answering `decision` to every request.
    #[must_use]
    pub const fn new(decision: Decision) -> Self {
        Self { decision }
    }

    /// Creates a gate that approves everything.
    #[must_use]
    pub const fn approve_all() -> Self {
        Self::new(Decision::Confirmed)
    }

    /// Creates a gate that declines everything.
    #[must_use]
    pub const fn decline_all() -> Self {
        Self::new(Decision::Declined)
    }
}

#[async_trait]
impl ConfirmationGate for StaticConfirmation {
    async fn confirm(&self, request: ConfirmationRequest) -> Decision {
        tracing::debug!(
            task_id = %request.task_id(),
            prompt = request.prompt(),
            decision = ?self.decision,
            "confirmation answered"
        );
        self.decision
    }
}
