//! Slide item sets
//!
//! The engine only ever needs to know how many cells the track holds, so
//! every item source is reduced to a single `count()`.

use serde::{Deserialize, Serialize};

/// Ordered collection of slides, read-only to the engine
pub trait ItemSet {
    fn count(&self) -> usize;
}

impl<T> ItemSet for [T] {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> ItemSet for Vec<T> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<I: ItemSet + ?Sized> ItemSet for &I {
    fn count(&self) -> usize {
        (**self).count()
    }
}

/// Items supplied by the host page.
///
/// Image carousels pass their image list; carousels of arbitrary projected
/// cells pass only how many there are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCollection {
    /// Image sources, in display order
    #[serde(default)]
    pub images: Vec<String>,
    /// Cell count used when there are no images
    #[serde(default)]
    pub cell_count: usize,
}

impl ItemCollection {
    pub fn from_images<I, S>(images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            images: images.into_iter().map(Into::into).collect(),
            cell_count: 0,
        }
    }

    pub fn from_cells(cell_count: usize) -> Self {
        Self {
            images: Vec::new(),
            cell_count,
        }
    }
}

impl ItemSet for ItemCollection {
    fn count(&self) -> usize {
        if self.images.is_empty() {
            self.cell_count
        } else {
            self.images.len()
        }
    }
}
