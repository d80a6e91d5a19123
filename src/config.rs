/// Largest preview edge, in pixels
pub const DEFAULT_MAX_PREVIEW: u32 = 400;

/// Upper limit accepted for the preview bound
pub const MAX_PREVIEW_LIMIT: u32 = 8192;

/// Horizontal gap between the two previews
pub const DEFAULT_PREVIEW_MARGIN: u32 = 20;

/// Extra canvas width beyond the two previews
pub const CANVAS_PADDING: u32 = 50;

pub const WINDOW_WIDTH: f32 = 900.0;
pub const WINDOW_HEIGHT: f32 = 500.0;

/// Extensions offered by the open dialog
pub const OPEN_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif"];

/// Extension appended to save paths that carry none
pub const DEFAULT_SAVE_EXTENSION: &str = "png";

/// Parameters baked into the filter bank at startup
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSettings {
    pub blur_sigma: f32,
    pub edge_low: f32,
    pub edge_high: f32,
    pub brightness: f32,
    pub contrast: f32,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            blur_sigma: 2.0,
            edge_low: 100.0,
            edge_high: 200.0,
            brightness: 1.2,
            contrast: 1.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub max_preview: u32,
    pub preview_margin: u32,
    pub filters: FilterSettings,
}

impl Settings {
    pub fn new() -> Self {
        Self {
            max_preview: DEFAULT_MAX_PREVIEW,
            preview_margin: DEFAULT_PREVIEW_MARGIN,
            filters: FilterSettings::default(),
        }
    }

    pub fn with_max_preview(mut self, max_preview: u32) -> Self {
        self.max_preview = max_preview.clamp(1, MAX_PREVIEW_LIMIT);
        self
    }

    pub fn with_brightness(mut self, factor: f32) -> Self {
        self.filters.brightness = factor;
        self
    }

    pub fn with_contrast(mut self, factor: f32) -> Self {
        self.filters.contrast = factor;
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}
