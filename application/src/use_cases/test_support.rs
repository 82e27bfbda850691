//! Test doubles shared by the use case tests.

use crate::ports::answer_service::{AnswerService, ServiceHealth};
use crate::ports::query_view::QueryView;
use async_trait::async_trait;
use ragask_domain::{AnswerResult, Question, QueryError};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ViewState {
    pub question: String,
    pub trigger_enabled: bool,
    pub trigger_label: String,
    pub answer_text: String,
    pub info_text: String,
    pub result_visible: bool,
    pub notices: Vec<String>,
    pub label_history: Vec<String>,
}

/// In-memory view that records every mutation.
pub struct RecordingView {
    state: Mutex<ViewState>,
}

impl RecordingView {
    pub fn new(question: &str) -> Self {
        Self {
            state: Mutex::new(ViewState {
                question: question.to_string(),
                trigger_enabled: true,
                trigger_label: "Ask".to_string(),
                answer_text: String::new(),
                info_text: String::new(),
                result_visible: false,
                notices: Vec::new(),
                label_history: Vec::new(),
            }),
        }
    }

    pub fn snapshot(&self) -> ViewState {
        self.state.lock().unwrap().clone()
    }
}

impl QueryView for RecordingView {
    fn question_value(&self) -> String {
        self.state.lock().unwrap().question.clone()
    }

    fn set_trigger_enabled(&self, enabled: bool) {
        self.state.lock().unwrap().trigger_enabled = enabled;
    }

    fn set_trigger_label(&self, label: &str) {
        let mut state = self.state.lock().unwrap();
        state.trigger_label = label.to_string();
        state.label_history.push(label.to_string());
    }

    fn set_answer_text(&self, text: &str) {
        self.state.lock().unwrap().answer_text = text.to_string();
    }

    fn set_info_text(&self, text: &str) {
        self.state.lock().unwrap().info_text = text.to_string();
    }

    fn set_result_visible(&self, visible: bool) {
        self.state.lock().unwrap().result_visible = visible;
    }

    fn notify(&self, message: &str) {
        self.state.lock().unwrap().notices.push(message.to_string());
    }
}

/// Answer service that replays canned results and records questions.
pub struct MockAnswerService {
    responses: Mutex<VecDeque<Result<AnswerResult, QueryError>>>,
    requests: Mutex<Vec<String>>,
    delay: Option<Duration>,
}

impl MockAnswerService {
    pub fn new(responses: Vec<Result<AnswerResult, QueryError>>) -> Self {
        Self {
            responses: Mutex::new(VecDeque::from(responses)),
            requests: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnswerService for MockAnswerService {
    async fn ask(&self, question: &Question) -> Result<AnswerResult, QueryError> {
        self.requests
            .lock()
            .unwrap()
            .push(question.content().to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(QueryError::Transport("No more responses".to_string())))
    }

    async fn health(&self) -> Result<ServiceHealth, QueryError> {
        Ok(ServiceHealth {
            status: "ok".to_string(),
        })
    }
}
