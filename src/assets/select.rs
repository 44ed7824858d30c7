use std::path::{Path, PathBuf};

use anyhow::Context as _;
use rand::{SeedableRng as _, rngs::StdRng, seq::SliceRandom as _};

use crate::{
    config::spec::ExtensionFilter,
    foundation::error::{FlashcutError, FlashcutResult},
};

/// List regular files in `dir` whose extension passes `filter`. Order is unspecified.
pub fn list_image_candidates(dir: &Path, filter: &ExtensionFilter) -> FlashcutResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(FlashcutError::validation(format!(
            "image directory '{}' does not exist or is not a directory",
            dir.display()
        )));
    }

    let mut out = Vec::new();
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("read directory '{}'", dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("read entry in '{}'", dir.display()))?;
        let path = entry.path();
        if path.is_file() && filter.matches(&path) {
            out.push(path);
        }
    }
    Ok(out)
}

/// Images chosen for one slideshow, in playback order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSelection {
    /// Selected images, at most `required` long.
    pub images: Vec<PathBuf>,
    /// How many candidates were offered.
    pub available: usize,
    /// How many the timing plan asked for.
    pub required: u64,
}

impl ImageSelection {
    /// Frames missing to fill the target duration. Zero when enough images were available.
    pub fn shortfall(&self) -> u64 {
        self.required.saturating_sub(self.images.len() as u64)
    }
}

/// Order and truncate candidates.
///
/// Candidates are sorted by file name first. With `randomize`, that order is replaced by a
/// uniform permutation (seeded when `seed` is given). The result keeps at most `required`
/// entries from the front without reordering.
pub fn select_images(
    mut candidates: Vec<PathBuf>,
    randomize: bool,
    seed: Option<u64>,
    required: u64,
) -> FlashcutResult<ImageSelection> {
    if candidates.is_empty() {
        return Err(FlashcutError::no_images(
            "no images with a recognized extension in the directory",
        ));
    }

    candidates.sort_by(|a, b| a.file_name().cmp(&b.file_name()).then_with(|| a.cmp(b)));

    if randomize {
        match seed {
            Some(seed) => candidates.shuffle(&mut StdRng::seed_from_u64(seed)),
            None => candidates.shuffle(&mut rand::thread_rng()),
        }
    }

    let available = candidates.len();
    let keep = usize::try_from(required).unwrap_or(usize::MAX);
    candidates.truncate(keep);

    Ok(ImageSelection {
        images: candidates,
        available,
        required,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/select.rs"]
mod tests;
