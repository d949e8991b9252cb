//! Retry policy for the candidate × attempt matrix.
//!
//! The orchestrator classifies each round-trip into an [`Outcome`] and asks
//! [`decide`] what to do next. `decide` is pure, so every transition can be
//! tested without a model.

use std::time::Duration;

/// Bounds of the retry matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts per candidate spent on content failures.
    pub attempts_per_candidate: usize,
    /// Extra calls per candidate allowed while the model is unavailable.
    pub unavailable_retries: usize,
    /// Pause before repeating a call to an unavailable candidate.
    pub unavailable_backoff: Duration,
    /// Accepted records required, capped by the requested count.
    pub min_accept: usize,
}

impl RetryPolicy {
    /// Smallest result set accepted for a request of `requested` names.
    #[must_use]
    pub fn acceptance_threshold(&self, requested: usize) -> usize {
        requested.min(self.min_accept)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts_per_candidate: 2,
            unavailable_retries: 2,
            unavailable_backoff: Duration::from_secs(2),
            min_accept: 3,
        }
    }
}

/// Position in the retry matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Index into the candidate list.
    pub candidate: usize,
    /// Content attempt within the current candidate.
    pub attempt: usize,
    /// Unavailable retries spent on the current candidate.
    pub unavailable: usize,
}

impl Cursor {
    /// Move the cursor according to a non-terminal action.
    #[must_use]
    pub fn advance(self, action: Action) -> Self {
        match action {
            Action::RetrySameCandidate => Self {
                unavailable: self.unavailable + 1,
                ..self
            },
            Action::NextAttempt => Self {
                attempt: self.attempt + 1,
                ..self
            },
            Action::NextCandidate => Self {
                candidate: self.candidate + 1,
                attempt: 0,
                unavailable: 0,
            },
            Action::Accept | Action::Fail(_) => self,
        }
    }
}

/// Classified result of one round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Model loading or overloaded.
    Unavailable,
    /// Credential rejected.
    Unauthorized { status: u16 },
    /// Any other non-success status.
    Rejected { status: u16 },
    /// Success status with a blank completion.
    Empty,
    /// Completion parsed; `accepted` records survived normalization.
    Parsed { accepted: usize, requested: usize },
}

/// Why the matrix stopped without a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalFailure {
    /// Credential rejected; never retried.
    Unauthorized { status: u16 },
    /// Every candidate and attempt was spent.
    Exhausted,
}

/// What the orchestrator does next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Call the same candidate again without spending a content attempt.
    RetrySameCandidate,
    /// Call the same candidate with the strict prompt.
    NextAttempt,
    /// Move to the next candidate, starting over with the base prompt.
    NextCandidate,
    /// Return the parsed records.
    Accept,
    Fail(TerminalFailure),
}

/// Map an outcome at `cursor` to the next action.
#[must_use]
pub fn decide(
    policy: &RetryPolicy,
    cursor: Cursor,
    candidates: usize,
    outcome: Outcome,
) -> Action {
    let has_next_candidate = cursor.candidate + 1 < candidates;
    let advance_candidate = || {
        if has_next_candidate {
            Action::NextCandidate
        } else {
            Action::Fail(TerminalFailure::Exhausted)
        }
    };
    let content_failure = || {
        if cursor.attempt + 1 < policy.attempts_per_candidate {
            Action::NextAttempt
        } else {
            advance_candidate()
        }
    };

    match outcome {
        Outcome::Unauthorized { status } => Action::Fail(TerminalFailure::Unauthorized { status }),
        Outcome::Unavailable if cursor.unavailable < policy.unavailable_retries => {
            Action::RetrySameCandidate
        }
        Outcome::Unavailable => advance_candidate(),
        Outcome::Rejected { .. } | Outcome::Empty => content_failure(),
        Outcome::Parsed {
            accepted,
            requested,
        } if accepted >= policy.acceptance_threshold(requested) && accepted > 0 => Action::Accept,
        Outcome::Parsed { .. } => content_failure(),
    }
}
