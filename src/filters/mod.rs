pub mod color;
pub mod convolve;
pub mod enhance;

use std::fmt;
use std::str::FromStr;

use image::DynamicImage;

use crate::config::FilterSettings;
use crate::error::Error;

/// One entry of the filter bank, with its parameters fixed at startup
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Filter {
    Grayscale,
    Blur { sigma: f32 },
    EdgeDetection { low_threshold: f32, high_threshold: f32 },
    Sepia,
    Brightness { factor: f32 },
    Contrast { factor: f32 },
}

impl Filter {
    /// Stable identifier used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Grayscale => "grayscale",
            Filter::Blur { .. } => "blur",
            Filter::EdgeDetection { .. } => "edges",
            Filter::Sepia => "sepia",
            Filter::Brightness { .. } => "brightness",
            Filter::Contrast { .. } => "contrast",
        }
    }

    /// Button caption
    pub fn label(&self) -> String {
        match self {
            Filter::Grayscale => "Grayscale".to_string(),
            Filter::Blur { .. } => "Blur".to_string(),
            Filter::EdgeDetection { .. } => "Edge Detection".to_string(),
            Filter::Sepia => "Sepia".to_string(),
            Filter::Brightness { factor } => format!("Brightness {}", percent_change(*factor)),
            Filter::Contrast { factor } => format!("Contrast {}", percent_change(*factor)),
        }
    }

    /// Produce a new image; the input is never touched
    pub fn apply(&self, img: &DynamicImage) -> DynamicImage {
        match *self {
            Filter::Grayscale => color::grayscale(img),
            Filter::Blur { sigma } => convolve::apply_blur(img, sigma),
            Filter::EdgeDetection {
                low_threshold,
                high_threshold,
            } => convolve::edges_rgb(img, low_threshold, high_threshold),
            Filter::Sepia => color::sepia(img),
            Filter::Brightness { factor } => enhance::brightness(img, factor),
            Filter::Contrast { factor } => enhance::contrast(img, factor),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses with default parameters; use [`FilterBank::get`] for configured ones
impl FromStr for Filter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterBank::default().get(s)
    }
}

fn percent_change(factor: f32) -> String {
    let pct = ((factor - 1.0) * 100.0).round() as i32;
    format!("{:+}%", pct)
}

/// The fixed, ordered table of filters offered to the user
#[derive(Debug, Clone, PartialEq)]
pub struct FilterBank {
    filters: Vec<Filter>,
}

impl FilterBank {
    pub fn new(settings: &FilterSettings) -> Self {
        Self {
            filters: vec![
                Filter::Grayscale,
                Filter::Blur {
                    sigma: settings.blur_sigma,
                },
                Filter::EdgeDetection {
                    low_threshold: settings.edge_low,
                    high_threshold: settings.edge_high,
                },
                Filter::Sepia,
                Filter::Brightness {
                    factor: settings.brightness,
                },
                Filter::Contrast {
                    factor: settings.contrast,
                },
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.filters.iter()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Look up a filter by identifier (case-insensitive, a few aliases accepted)
    pub fn get(&self, name: &str) -> Result<Filter, Error> {
        let key = name.trim().to_ascii_lowercase();
        let key = match key.as_str() {
            "edge" | "edge-detection" | "edge_detection" => "edges",
            "greyscale" | "gray" | "grey" => "grayscale",
            other => other,
        };
        self.filters
            .iter()
            .find(|f| f.name() == key)
            .copied()
            .ok_or_else(|| Error::UnknownFilter(name.to_string()))
    }
}

impl Default for FilterBank {
    fn default() -> Self {
        Self::new(&FilterSettings::default())
    }
}
