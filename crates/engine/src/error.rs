//! Error types for the carpe-engine crate.

use carpe_calendar::CalendarError;

/// Error type for [`Engine`](crate::Engine) computations.
///
/// Problems with a single generator never surface here; they are reported
/// as [`Skipped`](crate::Skipped) entries alongside the other results.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// Returned when the reference date cannot be parsed, is outside the
    /// accepted range, or leaves no milestone inside the representable
    /// calendar. No milestones are produced.
    #[error("invalid reference date {reference:?}")]
    InvalidReferenceDate {
        /// The reference as given: the raw input for parse failures,
        /// otherwise the date in ISO form.
        reference: String,
        /// The underlying calendar error.
        source: CalendarError,
    },
}
