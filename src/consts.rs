/// Label of the console entry written for every focus request.
pub const FOCUS_LOG_LABEL: &'static str = "focusElement";

/// Timeout handed to `setTimeout`. Zero still defers to the next macrotask.
pub const DEFAULT_DELAY_MS: i32 = 0;
