// Scale Engine - Scale notes for a key and scale type
// Memoized by (key, scale type)

use std::sync::Arc;

use super::cache::MemoCache;
use crate::library::Library;
use crate::theory::{derive_sequence, Note, ScaleType, TheoryResult};

pub struct ScaleEngine {
    library: Arc<Library>,
    cache: MemoCache<(Note, ScaleType), Vec<Note>>,
}

impl ScaleEngine {
    pub fn new(library: Arc<Library>) -> Self {
        ScaleEngine {
            library,
            cache: MemoCache::new("scale"),
        }
    }

    /// Notes of `scale_type` in `key`, in degree order (degree 1 first)
    pub fn get_or_compute(&self, key: &str, scale_type: ScaleType) -> TheoryResult<Arc<Vec<Note>>> {
        self.cache
            .get_or_try_insert_with((key.to_string(), scale_type), || {
                self.compute(key, scale_type)
            })
    }

    fn compute(&self, key: &str, scale_type: ScaleType) -> TheoryResult<Vec<Note>> {
        let alphabet = self.library.alphabet();
        let key_index = alphabet.index_of(key)?;
        let intervals = self.library.scale_pattern(scale_type)?;
        derive_sequence(key_index, alphabet.notes(), intervals)
    }

    /// Number of scales computed (cache misses) so far
    pub fn computations(&self) -> usize {
        self.cache.computations()
    }
}
