// src/sampler.rs

use crate::model::{Sample, SampleSize};
use rand::seq::index;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded draw of rows without replacement.
///
/// Every draw restarts a ChaCha generator from `seed`, positioned on the
/// caller's stream. Passing the project id as the stream keeps each project's
/// sample reproducible while different projects get unrelated sequences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampler {
    pub size: SampleSize,
    pub seed: u64,
}

impl Sampler {
    pub fn new(size: SampleSize, seed: u64) -> Self {
        Self { size, seed }
    }

    /// Number of rows a draw over `total` rows will pick
    pub fn sample_size(&self, total: usize) -> usize {
        self.size.resolve(total)
    }

    /// Draw unique indices in `[0, total)`.
    pub fn draw(&self, total: usize, stream: u64) -> Sample {
        let amount = self.sample_size(total);
        if amount == 0 {
            return Sample { indices: Vec::new(), total };
        }

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        rng.set_stream(stream);
        let indices = index::sample(&mut rng, total, amount).into_vec();
        tracing::debug!(total, amount, seed = self.seed, stream, "Drew sample");
        Sample { indices, total }
    }
}
