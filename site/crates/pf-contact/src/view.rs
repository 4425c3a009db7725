use crate::{FormField, StatusMessage};

/// The UI the handler drives: three text controls, a submit button with a
/// label/loading swap, and one status message area.
///
/// Implementations use interior mutability; the handler and its auto-hide
/// timer share the view through an `Arc`.
pub trait ContactFormView: Send + Sync + 'static {
    /// Current raw value of a control (untrimmed)
    fn read_field(&self, field: FormField) -> String;

    /// `true`: disable submit and show the loading indicator.
    /// `false`: enable submit and restore the label.
    fn set_busy(&self, busy: bool);

    fn show_status(&self, message: &StatusMessage);

    fn hide_status(&self);

    /// Reset all three controls to empty
    fn clear_fields(&self);
}
