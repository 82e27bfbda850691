//! Query View port
//!
//! The UI surface the query use case drives: one text field, one trigger
//! control, two text regions inside a hideable result panel.

/// UI handles injected into the query use case.
///
/// Methods take `&self`; implementations keep their own interior state so a
/// single view can be shared between the use case and whatever renders it.
/// Implementations live in the presentation layer (console, test doubles).
pub trait QueryView: Send + Sync {
    /// Current raw content of the question field.
    fn question_value(&self) -> String;

    /// Enable or disable the trigger control.
    fn set_trigger_enabled(&self, enabled: bool);

    /// Replace the trigger control's label.
    fn set_trigger_label(&self, label: &str);

    /// Replace the answer region's text.
    fn set_answer_text(&self, text: &str);

    /// Replace the info region's text.
    fn set_info_text(&self, text: &str);

    /// Show or hide the result panel.
    fn set_result_visible(&self, visible: bool);

    /// Show a short notice to the user (e.g. a validation message).
    fn notify(&self, message: &str);
}
