use std::{collections::VecDeque, path::PathBuf};

use rayon::prelude::*;

use crate::{
    assets::decode::FrameDecodeSkip,
    foundation::core::Resolution,
    render::canvas::{Canvas, compose_file},
};

/// Lazy, ordered sequence of composed frames for a list of image paths.
///
/// Frames are composed in parallel batches; items are yielded strictly in input order.
pub struct CompositedFrames {
    pending: std::vec::IntoIter<PathBuf>,
    ready: VecDeque<Result<Canvas, FrameDecodeSkip>>,
    target: Resolution,
    batch: usize,
}

impl CompositedFrames {
    /// Compose `images` for `target`, batching by the rayon pool size.
    pub fn new(images: Vec<PathBuf>, target: Resolution) -> Self {
        Self::with_batch(images, target, rayon::current_num_threads() * 2)
    }

    /// Same as [`CompositedFrames::new`] with an explicit batch size (at least 1).
    pub fn with_batch(images: Vec<PathBuf>, target: Resolution, batch: usize) -> Self {
        Self {
            pending: images.into_iter(),
            ready: VecDeque::new(),
            target,
            batch: batch.max(1),
        }
    }

    fn refill(&mut self) {
        let chunk: Vec<PathBuf> = self.pending.by_ref().take(self.batch).collect();
        let target = self.target;
        let composed: Vec<_> = chunk
            .par_iter()
            .map(|path| compose_file(path, target))
            .collect();
        self.ready.extend(composed);
    }
}

impl Iterator for CompositedFrames {
    type Item = Result<Canvas, FrameDecodeSkip>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.ready.is_empty() {
            self.refill();
        }
        self.ready.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.ready.len() + self.pending.len();
        (n, Some(n))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frames.rs"]
mod tests;
