//! End-to-end generation: prompt, call, extract, normalize, retry.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::extract::extract_json_array;
use super::fallback::parse_fallback_text;
use super::normalize::{Normalizer, RawItem};
use super::policy::{decide, Action, Cursor, Outcome, RetryPolicy, TerminalFailure};
use super::prompt::{build_messages, PromptVariant};
use crate::domain::record::{NameRecord, ResultSet};
use crate::domain::request::NameRequest;
use crate::domain::vocabulary::Vocabulary;
use crate::error::{ConfigError, Error, Result};
use crate::port::outbound::llm::{ChatModel, ModelReply};

/// Turn one completion into validated records.
///
/// The JSON path is preferred; the line-based fallback only runs when the
/// JSON path yields no usable record.
#[must_use]
pub fn records_from_completion(text: &str, normalizer: &Normalizer<'_>) -> Vec<NameRecord> {
    let from_json = extract_json_array(text)
        .map(|values| {
            let items: Vec<RawItem> = values.iter().map(RawItem::from).collect();
            normalizer.normalize_and_validate(&items)
        })
        .unwrap_or_default();
    if !from_json.is_empty() {
        return from_json;
    }

    let fallback = parse_fallback_text(text, normalizer.count());
    normalizer.normalize_and_validate(&fallback)
}

/// Drives generation across an ordered list of model candidates.
///
/// Candidates are tried strictly one at a time; each call owns its own
/// cursor and record buffers, so a `Generator` can be shared freely.
pub struct Generator {
    model: Arc<dyn ChatModel>,
    candidates: Vec<String>,
    policy: RetryPolicy,
    vocabulary: Arc<Vocabulary>,
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("candidates", &self.candidates)
            .field("policy", &self.policy)
            .field("vocabulary", &self.vocabulary)
            .finish_non_exhaustive()
    }
}

impl Generator {
    #[must_use]
    pub fn new(
        model: Arc<dyn ChatModel>,
        candidates: Vec<String>,
        policy: RetryPolicy,
        vocabulary: Arc<Vocabulary>,
    ) -> Self {
        Self {
            model,
            candidates,
            policy,
            vocabulary,
        }
    }

    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Generate names for `request`.
    ///
    /// # Errors
    ///
    /// - [`Error::UpstreamAuth`] as soon as the endpoint rejects the credential.
    /// - [`Error::Transport`] (or another adapter error) as soon as a call
    ///   gets no response.
    /// - [`Error::UpstreamUnavailable`] if every candidate was abandoned
    ///   after exhausting its unavailable budget.
    /// - [`Error::UpstreamFormat`] if the matrix is exhausted otherwise.
    pub async fn generate(&self, request: &NameRequest) -> Result<ResultSet> {
        if self.candidates.is_empty() {
            return Err(ConfigError::MissingField {
                field: "candidates",
            }
            .into());
        }

        let normalizer = Normalizer::for_request(&self.vocabulary, request);
        let mut cursor = Cursor::default();
        let mut previous: Option<String> = None;
        // Cleared by the first content failure on any candidate.
        let mut every_candidate_unavailable = true;

        loop {
            let candidate = &self.candidates[cursor.candidate];
            let variant = PromptVariant::for_attempt(cursor.attempt);
            let messages = build_messages(request, &self.vocabulary, variant, previous.as_deref());

            debug!(
                provider = self.model.name(),
                candidate = %candidate,
                attempt = cursor.attempt,
                ?variant,
                "Requesting names"
            );

            let reply = self.model.call(candidate, &messages).await.map_err(|e| {
                warn!(candidate = %candidate, error = %e, "Model call failed");
                e
            })?;

            let mut records = Vec::new();
            let outcome = self.classify(&reply, &normalizer, request, &mut records);
            if reply.is_success() {
                previous = Some(reply.body);
            }

            let action = decide(&self.policy, cursor, self.candidates.len(), outcome);
            every_candidate_unavailable &= outcome == Outcome::Unavailable;

            match action {
                Action::Accept => {
                    info!(
                        candidate = %candidate,
                        attempt = cursor.attempt,
                        accepted = records.len(),
                        requested = request.count(),
                        "Accepted name suggestions"
                    );
                    return Ok(ResultSet::new(records));
                }
                Action::Fail(TerminalFailure::Unauthorized { status }) => {
                    warn!(candidate = %candidate, status, "Credential rejected");
                    return Err(Error::UpstreamAuth { status });
                }
                Action::Fail(TerminalFailure::Exhausted) => {
                    warn!(candidates = self.candidates.len(), "All model candidates exhausted");
                    return Err(if every_candidate_unavailable {
                        Error::UpstreamUnavailable {
                            model: candidate.clone(),
                        }
                    } else {
                        Error::UpstreamFormat
                    });
                }
                action => {
                    warn!(candidate = %candidate, attempt = cursor.attempt, ?outcome, ?action, "Attempt failed");
                    if action == Action::RetrySameCandidate && !self.policy.unavailable_backoff.is_zero() {
                        tokio::time::sleep(self.policy.unavailable_backoff).await;
                    }
                    if action == Action::NextCandidate {
                        previous = None;
                    }
                    cursor = cursor.advance(action);
                }
            }
        }
    }

    fn classify(
        &self,
        reply: &ModelReply,
        normalizer: &Normalizer<'_>,
        request: &NameRequest,
        records: &mut Vec<NameRecord>,
    ) -> Outcome {
        if reply.is_unauthorized() {
            return Outcome::Unauthorized {
                status: reply.status,
            };
        }
        if reply.is_unavailable() {
            return Outcome::Unavailable;
        }
        if !reply.is_success() {
            return Outcome::Rejected {
                status: reply.status,
            };
        }
        if reply.body.trim().is_empty() {
            return Outcome::Empty;
        }

        *records = records_from_completion(&reply.body, normalizer);
        Outcome::Parsed {
            accepted: records.len(),
            requested: request.count(),
        }
    }
}
