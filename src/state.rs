//! Viewer state types and constants.

// ============================================================================
// Constants
// ============================================================================

/// Maximum points to render per series line (LTTB downsampling above this)
pub const MAX_CHART_POINTS: usize = 2000;

/// Supported data file extensions (used in file dialogs)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["csv", "txt", "dat"];

/// Line color outside the analysed ranges
pub const OUTSIDE_COLOR: [u8; 3] = [150, 150, 150];

/// Line colors of the `[A, B)` and `[B, C)` ranges
pub const SEGMENT_COLORS: [[u8; 3]; 2] = [
    [191, 78, 48],  // Rust orange
    [113, 160, 78], // Green
];

/// Peak marker color
pub const PEAK_COLOR: [u8; 3] = [220, 50, 47];

/// Base marker color
pub const BASE_COLOR: [u8; 3] = [71, 108, 155];

/// Cut point marker color
pub const CUT_COLOR: [u8; 3] = [253, 193, 73];

/// Minimum height of one series plot in pixels
pub const MIN_PLOT_HEIGHT: f32 = 160.0;

// ============================================================================
// Core Types
// ============================================================================

/// Toast notification type for different message categories
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastType {
    /// Informational message (blue)
    #[default]
    Info,
    /// Success message (green)
    Success,
    /// Warning message (amber)
    Warning,
    /// Error message (red)
    Error,
}

impl ToastType {
    /// Get the background color for this toast type
    pub fn color(&self) -> [u8; 3] {
        match self {
            ToastType::Info => [71, 108, 155],
            ToastType::Success => [113, 120, 78],
            ToastType::Warning => [253, 193, 73],
            ToastType::Error => [135, 30, 28],
        }
    }

    /// Get the text color for this toast type
    pub fn text_color(&self) -> [u8; 3] {
        match self {
            ToastType::Warning => [30, 30, 30], // Dark text for amber background
            _ => [255, 255, 255],
        }
    }
}
