use std::path::{Path, PathBuf};
use std::time::Instant;

use image::{DynamicImage, ImageFormat, ImageReader};
use log::{debug, info, warn};

use crate::config::{DEFAULT_SAVE_EXTENSION, Settings};
use crate::error::{Error, Result};
use crate::filters::{Filter, FilterBank};
use crate::preview::PreviewLayout;
use crate::state::AppState;

/// Everything the user can ask for
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Open(PathBuf),
    Save(PathBuf),
    ApplyFilter(Filter),
    Refresh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A message to put in front of the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn nothing_to_save() -> Self {
        Self::info("Info", "No filtered image to save!")
    }
}

/// Result of handling one command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// At most one notification per command
    pub notice: Option<Notice>,
    /// The display must be redrawn from the state
    pub redraw: bool,
}

impl Outcome {
    fn redraw() -> Self {
        Self {
            notice: None,
            redraw: true,
        }
    }

    fn notify(notice: Notice) -> Self {
        Self {
            notice: Some(notice),
            redraw: false,
        }
    }
}

/// Sole owner and writer of the application state
#[derive(Debug)]
pub struct Dispatcher {
    state: AppState,
    bank: FilterBank,
    layout: PreviewLayout,
    /// Scale previews as soon as an image is opened
    eager_previews: bool,
}

impl Dispatcher {
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: AppState::Empty,
            bank: FilterBank::new(&settings.filters),
            layout: PreviewLayout::new(settings.max_preview, settings.preview_margin),
            eager_previews: true,
        }
    }

    /// No display attached: previews are only built by an explicit `Refresh`
    pub fn headless(settings: &Settings) -> Self {
        Self {
            eager_previews: false,
            ..Self::new(settings)
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn bank(&self) -> &FilterBank {
        &self.bank
    }

    pub fn layout(&self) -> PreviewLayout {
        self.layout
    }

    pub fn dispatch(&mut self, command: Command) -> Outcome {
        match command {
            Command::Open(path) => self.open(&path),
            Command::Save(path) => self.save(&path),
            Command::ApplyFilter(filter) => self.apply_filter(filter),
            Command::Refresh => self.refresh(),
        }
    }

    fn open(&mut self, path: &Path) -> Outcome {
        info!("Opening {}", path.display());
        match decode(path) {
            Ok(img) => {
                debug!("Decoded {}x{} ({:?})", img.width(), img.height(), img.color());
                self.state = if self.eager_previews {
                    AppState::loaded(img, self.layout.bound)
                } else {
                    AppState::loaded_without_previews(img)
                };
                Outcome::redraw()
            }
            Err(e) => {
                warn!("Open failed: {}", e);
                Outcome::notify(Notice::error("Error", format!("Failed to open image: {}", e)))
            }
        }
    }

    fn save(&mut self, path: &Path) -> Outcome {
        let Some(filtered) = self.state.filtered() else {
            info!("Save requested with nothing loaded");
            return Outcome::notify(Notice::nothing_to_save());
        };

        let path = resolve_save_path(path);
        match encode(filtered, &path) {
            Ok(()) => {
                info!("Saved {}", path.display());
                Outcome::notify(Notice::info(
                    "Saved",
                    format!("Image saved at {}", path.display()),
                ))
            }
            Err(e) => {
                warn!("Save failed: {}", e);
                Outcome::notify(Notice::error("Error", format!("Failed to save image: {}", e)))
            }
        }
    }

    fn apply_filter(&mut self, filter: Filter) -> Outcome {
        // Filters never stack: always start from the original
        let Some(original) = self.state.original().cloned() else {
            debug!("Ignoring {} with no image loaded", filter.name());
            return Outcome::default();
        };

        let started = Instant::now();
        let filtered = filter.apply(&original);
        debug!("{} took {:?}", filter.label(), started.elapsed());
        info!("Applied {}", filter.name());

        self.state.set_filtered(filtered, self.layout.bound);
        Outcome::redraw()
    }

    fn refresh(&mut self) -> Outcome {
        let rescaled = self.state.refresh_previews(self.layout.bound);
        debug!("Refresh rescaled {} preview(s)", rescaled);
        Outcome {
            notice: None,
            redraw: self.state.is_loaded(),
        }
    }
}

fn decode(path: &Path) -> Result<DynamicImage> {
    let decode_err = |source: image::ImageError| Error::Decode {
        path: path.to_path_buf(),
        source,
    };
    ImageReader::open(path)
        .map_err(|e| decode_err(image::ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| decode_err(image::ImageError::IoError(e)))?
        .decode()
        .map_err(decode_err)
}

/// Paths without an extension are saved as PNG
pub fn resolve_save_path(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(DEFAULT_SAVE_EXTENSION)
    }
}

fn encode(img: &DynamicImage, path: &Path) -> Result<()> {
    let encode_err = |source: image::ImageError| Error::Encode {
        path: path.to_path_buf(),
        source,
    };
    let format = ImageFormat::from_path(path).map_err(encode_err)?;

    // JPEG carries no alpha channel
    if format == ImageFormat::Jpeg && img.color().has_alpha() {
        return DynamicImage::ImageRgb8(img.to_rgb8())
            .save_with_format(path, format)
            .map_err(encode_err);
    }
    img.save_with_format(path, format).map_err(encode_err)
}
