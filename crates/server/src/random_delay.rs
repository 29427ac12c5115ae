//! Random-Delay Responder
//!
//! Emulates a slow backend: every request waits a whole number of delay steps
//! (by default 0 to 4 seconds) and then answers with one canned response picked
//! uniformly from the answer fixture. The wait is a timer suspension, so other
//! requests keep being accepted and answered while one is pending.

use axum::extract::{Request, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::errors::ResponderError;
use crate::logging::log_request;
use crate::random::RandomSource;
use mockd_fixture::AnswerSet;

/// Route served by [`RandomDelayResponder`]
pub const ROUTE: &str = "/mock/backend/getResponse";

/// How long a response may be held back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayPolicy {
    /// Length of one delay step
    pub step: Duration,
    /// Largest number of steps, inclusive
    pub max_steps: u32,
}

impl Default for DelayPolicy {
    fn default() -> Self {
        Self {
            step: Duration::from_secs(1),
            max_steps: 4,
        }
    }
}

impl DelayPolicy {
    /// Delay for a given number of steps, saturating at [`Duration::MAX`]
    pub fn delay_for(&self, steps: u32) -> Duration {
        self.step.saturating_mul(steps)
    }

    /// Longest delay this policy can produce
    pub fn max_delay(&self) -> Duration {
        self.delay_for(self.max_steps)
    }
}

/// Serves one random answer per request after a random delay
#[derive(Debug)]
pub struct RandomDelayResponder {
    answers: AnswerSet,
    policy: DelayPolicy,
    rng: RandomSource,
}

impl RandomDelayResponder {
    pub fn new(answers: AnswerSet, policy: DelayPolicy, rng: RandomSource) -> Self {
        Self {
            answers,
            policy,
            rng,
        }
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn policy(&self) -> DelayPolicy {
        self.policy
    }

    /// Router with `GET /mock/backend/getResponse` mounted
    pub fn router(self) -> Router {
        Router::new()
            .route(ROUTE, get(get_response))
            .with_state(Arc::new(self))
    }

    /// Wait out a random delay, then pick an answer.
    ///
    /// The delay is drawn before the answer and is applied even when the answer
    /// set is empty, so clients see the same latency either way.
    pub async fn respond(&self) -> Result<Value, ResponderError> {
        let delay = self.policy.delay_for(self.rng.steps_up_to(self.policy.max_steps));
        info!(delay_ms = delay.as_millis() as u64, "Delaying response");

        sleep(delay).await;

        let Some(index) = self.rng.index_below(self.answers.len()) else {
            warn!("Answer fixture is empty, nothing to send");
            return Err(ResponderError::EmptyAnswers);
        };
        info!(index, "Answer selected");

        self.answers
            .get(index)
            .cloned()
            .ok_or(ResponderError::EmptyAnswers)
    }
}

async fn get_response(
    State(responder): State<Arc<RandomDelayResponder>>,
    request: Request,
) -> Result<Json<Value>, ResponderError> {
    log_request(&request);

    // Detached so the delay and selection still run if the client hangs up.
    let pending = tokio::spawn(async move { responder.respond().await });
    let answer = pending.await??;
    Ok(Json(answer))
}
