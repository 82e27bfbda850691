//! Query controller use case.
//!
//! Runs one submit-and-render cycle: read the question field, send one
//! request to the answer service, render the answer or the error, and
//! hand the trigger control back.
//!
//! Every failure after validation is handled here and ends up on screen;
//! nothing is returned as an `Err`. The [`SubmitOutcome`] exists so the
//! caller can log or pick an exit status.

use crate::config::QueryParams;
use crate::ports::answer_service::AnswerService;
use crate::ports::query_view::QueryView;
use crate::use_cases::trigger_guard::TriggerGuard;
use ragask_domain::{
    AnswerResult, EMPTY_QUESTION_NOTICE, Question, QueryError, RenderedAnswer,
};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// How a call to [`QueryController::submit`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The question field was empty; nothing was sent.
    Rejected,
    /// Another submission from this controller is still in flight.
    Busy,
    /// The service answered; this is what was rendered.
    Answered(RenderedAnswer),
    /// The request failed; this is what was rendered.
    Failed(RenderedAnswer),
}

impl SubmitOutcome {
    pub fn is_answered(&self) -> bool {
        matches!(self, SubmitOutcome::Answered(_))
    }

    /// The rendered panel content, if the panel was shown.
    pub fn rendered(&self) -> Option<&RenderedAnswer> {
        match self {
            SubmitOutcome::Answered(r) | SubmitOutcome::Failed(r) => Some(r),
            SubmitOutcome::Rejected | SubmitOutcome::Busy => None,
        }
    }
}

/// Binds the trigger action to the answer service and the result panel.
///
/// Holds at most one request in flight; a second `submit` while one is
/// outstanding returns [`SubmitOutcome::Busy`] without touching the view.
pub struct QueryController {
    service: Arc<dyn AnswerService>,
    view: Arc<dyn QueryView>,
    params: QueryParams,
    in_flight: AtomicBool,
}

impl QueryController {
    pub fn new(service: Arc<dyn AnswerService>, view: Arc<dyn QueryView>) -> Self {
        Self {
            service,
            view,
            params: QueryParams::default(),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn with_params(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }

    /// Run one submit cycle.
    pub async fn submit(&self) -> SubmitOutcome {
        self.run(None).await
    }

    /// Run one submit cycle that ends early when `token` is cancelled.
    pub async fn submit_with_cancellation(&self, token: CancellationToken) -> SubmitOutcome {
        self.run(Some(token)).await
    }

    async fn run(&self, cancellation: Option<CancellationToken>) -> SubmitOutcome {
        let view = self.view.as_ref();

        let Some(mut guard) = TriggerGuard::try_acquire(view, &self.in_flight) else {
            debug!("Submit ignored: a request is already in flight");
            return SubmitOutcome::Busy;
        };

        let question = match Question::parse(&view.question_value()) {
            Ok(q) => q,
            Err(e) => {
                debug!("Submit rejected: {}", e);
                view.notify(EMPTY_QUESTION_NOTICE);
                return SubmitOutcome::Rejected;
            }
        };

        guard.engage();
        info!("Asking: {}", question.preview(100));

        let outcome = match self.request(&question, cancellation.as_ref()).await {
            Ok(result) => {
                let rendered = RenderedAnswer::from_result(result);
                info!("Answer received ({} bytes)", rendered.answer.len());
                self.render(&rendered);
                SubmitOutcome::Answered(rendered)
            }
            Err(e) => {
                warn!(kind = e.kind(), "Query failed: {}", e);
                let rendered = RenderedAnswer::from_error(&e);
                self.render(&rendered);
                SubmitOutcome::Failed(rendered)
            }
        };

        drop(guard);
        outcome
    }

    /// The single suspension point, bounded by timeout and cancellation.
    async fn request(
        &self,
        question: &Question,
        cancellation: Option<&CancellationToken>,
    ) -> Result<AnswerResult, QueryError> {
        let call = self.service.ask(question);

        let bounded = async {
            match self.params.timeout {
                Some(limit) => match tokio::time::timeout(limit, call).await {
                    Ok(result) => result,
                    Err(_) => Err(QueryError::Timeout(limit)),
                },
                None => call.await,
            }
        };

        match cancellation {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => Err(QueryError::Cancelled),
                result = bounded => result,
            },
            None => bounded.await,
        }
    }

    fn render(&self, rendered: &RenderedAnswer) {
        self.view.set_answer_text(&rendered.answer);
        self.view.set_info_text(&rendered.info);
        self.view.set_result_visible(true);
    }
}
