use std::sync::Arc;

use image::DynamicImage;

use crate::preview;

/// Shared, immutable raster. Replaced wholesale, never edited in place.
pub type Image = Arc<DynamicImage>;

/// A preview remembers which image it was scaled from
#[derive(Debug, Clone)]
struct CachedPreview {
    source: Image,
    scaled: Image,
}

impl CachedPreview {
    fn build(source: &Image, bound: u32) -> Self {
        Self {
            source: source.clone(),
            scaled: Arc::new(preview::scale_to_fit(source, bound)),
        }
    }

    /// Rescale only if `source` differs from the image this preview came from
    fn refresh(&mut self, source: &Image, bound: u32) -> bool {
        if Arc::ptr_eq(&self.source, source) {
            return false;
        }
        *self = Self::build(source, bound);
        true
    }
}

/// Display copies of the original and filtered images
#[derive(Debug, Clone)]
pub struct PreviewPair {
    original: CachedPreview,
    filtered: CachedPreview,
}

impl PreviewPair {
    pub fn new(original: &Image, filtered: &Image, bound: u32) -> Self {
        let original_preview = CachedPreview::build(original, bound);
        // Right after a load both sides are the same image; scale it once
        let filtered_preview = if Arc::ptr_eq(original, filtered) {
            original_preview.clone()
        } else {
            CachedPreview::build(filtered, bound)
        };
        Self {
            original: original_preview,
            filtered: filtered_preview,
        }
    }

    pub fn original(&self) -> &Image {
        &self.original.scaled
    }

    pub fn filtered(&self) -> &Image {
        &self.filtered.scaled
    }

    /// Returns how many previews were recomputed
    pub fn refresh(&mut self, original: &Image, filtered: &Image, bound: u32) -> usize {
        usize::from(self.original.refresh(original, bound))
            + usize::from(self.filtered.refresh(filtered, bound))
    }
}

#[derive(Debug, Clone)]
pub struct Loaded {
    pub original: Image,
    pub filtered: Image,
    /// Absent until something needs to display the images
    pub previews: Option<PreviewPair>,
}

/// `filtered` exists exactly when `original` does
#[derive(Debug, Clone, Default)]
pub enum AppState {
    #[default]
    Empty,
    Loaded(Loaded),
}

impl AppState {
    /// Fresh load: the filtered image starts as the original
    pub fn loaded(original: DynamicImage, bound: u32) -> Self {
        let mut state = Self::loaded_without_previews(original);
        state.refresh_previews(bound);
        state
    }

    /// Fresh load with previews deferred to the first refresh
    pub fn loaded_without_previews(original: DynamicImage) -> Self {
        let original = Arc::new(original);
        let filtered = original.clone();
        AppState::Loaded(Loaded {
            original,
            filtered,
            previews: None,
        })
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, AppState::Loaded(_))
    }

    pub fn original(&self) -> Option<&Image> {
        match self {
            AppState::Loaded(loaded) => Some(&loaded.original),
            AppState::Empty => None,
        }
    }

    pub fn filtered(&self) -> Option<&Image> {
        match self {
            AppState::Loaded(loaded) => Some(&loaded.filtered),
            AppState::Empty => None,
        }
    }

    pub fn previews(&self) -> Option<&PreviewPair> {
        match self {
            AppState::Loaded(loaded) => loaded.previews.as_ref(),
            AppState::Empty => None,
        }
    }

    /// Replace the filtered image, rescaling its preview if previews exist
    pub fn set_filtered(&mut self, filtered: DynamicImage, bound: u32) -> bool {
        match self {
            AppState::Loaded(loaded) => {
                loaded.filtered = Arc::new(filtered);
                if let Some(previews) = &mut loaded.previews {
                    previews.refresh(&loaded.original, &loaded.filtered, bound);
                }
                true
            }
            AppState::Empty => false,
        }
    }

    /// Rescale whichever preview is stale, building the pair on first use.
    /// Returns how many images were scaled; zero when nothing changed.
    pub fn refresh_previews(&mut self, bound: u32) -> usize {
        match self {
            AppState::Loaded(loaded) => {
                if let Some(previews) = &mut loaded.previews {
                    return previews.refresh(&loaded.original, &loaded.filtered, bound);
                }
                let pair = PreviewPair::new(&loaded.original, &loaded.filtered, bound);
                loaded.previews = Some(pair);
                if Arc::ptr_eq(&loaded.original, &loaded.filtered) {
                    1
                } else {
                    2
                }
            }
            AppState::Empty => 0,
        }
    }
}
