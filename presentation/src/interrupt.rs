//! Ctrl-C handling for in-flight requests

use ragask_application::{AnswerService, QueryController, ServiceHealth, SubmitOutcome};
use ragask_domain::QueryError;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Cancels its token on Ctrl-C. Stops listening when dropped.
pub struct CtrlCWatcher {
    token: CancellationToken,
    listener: JoinHandle<()>,
}

impl CtrlCWatcher {
    pub fn spawn() -> Self {
        let token = CancellationToken::new();
        let listener = {
            let token = token.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    debug!("Ctrl-C received, cancelling request");
                    token.cancel();
                }
            })
        };
        Self { token, listener }
    }

    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }
}

impl Drop for CtrlCWatcher {
    fn drop(&mut self) {
        self.listener.abort();
    }
}

/// Submit, cancelling the request if the user presses Ctrl-C meanwhile.
///
/// The signal listener only lives for the duration of this one submit.
pub async fn submit_interruptible(controller: &QueryController) -> SubmitOutcome {
    let watcher = CtrlCWatcher::spawn();
    controller.submit_with_cancellation(watcher.token()).await
}

/// Health check that Ctrl-C can abandon.
pub async fn health_interruptible(
    service: &dyn AnswerService,
) -> Result<ServiceHealth, QueryError> {
    let watcher = CtrlCWatcher::spawn();
    health_with_cancellation(service, watcher.token()).await
}

pub async fn health_with_cancellation(
    service: &dyn AnswerService,
    token: CancellationToken,
) -> Result<ServiceHealth, QueryError> {
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(QueryError::Cancelled),
        result = service.health() => result,
    }
}
