//! Console implementation of [`QueryView`]
//!
//! The terminal has no buttons or panels, so the view keeps their state
//! itself and maps changes onto the console:
//!
//! | UI element      | console                                  |
//! |-----------------|------------------------------------------|
//! | question field  | text set by the caller before submit     |
//! | trigger control | spinner on stderr while disabled        |
//! | result panel    | printed to stdout when made visible      |
//! | notice          | yellow line on stderr                    |

use crate::output::console::ConsoleFormatter;
use crate::progress::indicator::ThinkingIndicator;
use colored::Colorize;
use ragask_application::QueryView;
use ragask_domain::{ASK_LABEL, OutputFormat, RenderedAnswer};
use std::io::Write;
use std::sync::{Mutex, MutexGuard};
use tracing::warn;

#[derive(Debug, Clone)]
struct PanelState {
    question: String,
    trigger_enabled: bool,
    trigger_label: String,
    answer: String,
    info: String,
    result_visible: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            question: String::new(),
            trigger_enabled: true,
            trigger_label: ASK_LABEL.to_string(),
            answer: String::new(),
            info: String::new(),
            result_visible: false,
        }
    }
}

type Sink = Mutex<Box<dyn Write + Send>>;

/// Query view drawn on the terminal.
pub struct ConsoleView {
    state: Mutex<PanelState>,
    indicator: ThinkingIndicator,
    format: OutputFormat,
    out: Sink,
    err: Sink,
}

impl ConsoleView {
    /// View writing answers to stdout and notices to stderr.
    pub fn new(format: OutputFormat) -> Self {
        Self::with_writers(
            format,
            Box::new(std::io::stdout()),
            Box::new(std::io::stderr()),
        )
    }

    /// View writing to the given sinks. The spinner is off by default here.
    pub fn with_writers(
        format: OutputFormat,
        out: Box<dyn Write + Send>,
        err: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            state: Mutex::new(PanelState::default()),
            indicator: ThinkingIndicator::disabled(),
            format,
            out: Mutex::new(out),
            err: Mutex::new(err),
        }
    }

    pub fn with_indicator(mut self, indicator: ThinkingIndicator) -> Self {
        self.indicator = indicator;
        self
    }

    /// Fill the question field.
    pub fn set_question(&self, text: &str) {
        self.state().question = text.to_string();
    }

    pub fn trigger_label(&self) -> String {
        self.state().trigger_label.clone()
    }

    pub fn is_trigger_enabled(&self) -> bool {
        self.state().trigger_enabled
    }

    pub fn is_result_visible(&self) -> bool {
        self.state().result_visible
    }

    /// Current panel content, if the panel is showing.
    pub fn rendered(&self) -> Option<RenderedAnswer> {
        let state = self.state();
        state.result_visible.then(|| RenderedAnswer {
            answer: state.answer.clone(),
            info: state.info.clone(),
        })
    }

    fn state(&self) -> MutexGuard<'_, PanelState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn write_to(sink: &Sink, text: &str) {
        let mut writer = sink.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = writer.write_all(text.as_bytes()).and_then(|_| writer.flush()) {
            warn!("Could not write to console: {}", e);
        }
    }
}

impl QueryView for ConsoleView {
    fn question_value(&self) -> String {
        self.state().question.clone()
    }

    fn set_trigger_enabled(&self, enabled: bool) {
        self.state().trigger_enabled = enabled;
        if enabled {
            self.indicator.stop();
        }
    }

    fn set_trigger_label(&self, label: &str) {
        let disabled = {
            let mut state = self.state();
            state.trigger_label = label.to_string();
            !state.trigger_enabled
        };
        if disabled {
            self.indicator.start(label);
        }
    }

    fn set_answer_text(&self, text: &str) {
        self.state().answer = text.to_string();
    }

    fn set_info_text(&self, text: &str) {
        self.state().info = text.to_string();
    }

    fn set_result_visible(&self, visible: bool) {
        self.state().result_visible = visible;
        if !visible {
            return;
        }

        self.indicator.stop();
        if let Some(rendered) = self.rendered() {
            let mut text = ConsoleFormatter::format(&rendered, self.format);
            if !text.ends_with('\n') {
                text.push('\n');
            }
            Self::write_to(&self.out, &text);
        }
    }

    fn notify(&self, message: &str) {
        Self::write_to(&self.err, &format!("{}\n", message.yellow()));
    }
}
