//! Fixed user-facing strings.

/// Trigger control label while idle.
pub const ASK_LABEL: &str = "Ask";

/// Trigger control label while a request is in flight.
pub const THINKING_LABEL: &str = "Thinking...";

/// Notice shown when the question field is empty.
pub const EMPTY_QUESTION_NOTICE: &str = "Please enter a question";

/// Answer text shown when the service returned no answer.
pub const NO_ANSWER_PLACEHOLDER: &str = "(no answer)";

/// Answer text shown for any failed request.
pub const ERROR_HEADLINE: &str = "Error fetching response.";
