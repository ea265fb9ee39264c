//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Slide canvas constants.
pub mod canvas {
    /// Canvas width in slide-space units.
    pub const WIDTH: u32 = 1920;

    /// Canvas height in slide-space units.
    pub const HEIGHT: u32 = 1080;
}

/// Slide editor constants.
pub mod editor {
    /// Offset applied on both axes when duplicating an element.
    pub const DUPLICATE_NUDGE: f64 = 24.0;

    /// Distance an arrow key moves the selected element.
    pub const ARROW_NUDGE: f64 = 10.0;

    /// Number of hex characters in a duplicated element's id suffix.
    pub const ID_SUFFIX_LEN: usize = 8;
}

/// Slide generation constants.
pub mod generation {
    /// Maximum characters of the prompt used as the slide name.
    pub const NAME_MAX_CHARS: usize = 48;

    /// Slide name when the prompt is empty.
    pub const FALLBACK_NAME: &str = "Generated Slide";

    /// Title text when the prompt is empty.
    pub const FALLBACK_TITLE: &str = "Vision Slide";

    /// Text the elements are built from when the request has no prompt at all.
    pub const MISSING_PROMPT_TEXT: &str = "New Narrative";
}

/// Viewer constants.
pub mod viewer {
    /// Seconds without pointer movement before controls hide.
    pub const CONTROLS_IDLE_SECS: u64 = 5;

    /// Default directory for event images.
    pub const DEFAULT_ASSET_DIR: &str = "event-images";

    /// Cards per row in the grid overlay.
    pub const GRID_COLUMNS: usize = 5;
}

/// Network constants.
pub mod network {
    /// Default HTTP timeout for the generation client.
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Async task constants.
pub mod async_tasks {
    /// Channel buffer size for async task communication.
    pub const CHANNEL_BUFFER_SIZE: usize = 10;
}
