//! Per-facade pattern cache.
//!
//! Keyed by the exact pattern text. A read lock covers the fast path;
//! parsing happens outside any lock, so two threads racing on the same
//! new pattern may both parse it — parsing is deterministic, and the
//! first insertion wins, so callers never observe inconsistent trees.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::ast::Pattern;
use crate::error::ParseError;
use crate::parse;

#[derive(Default)]
pub(crate) struct PatternCache {
    inner: RwLock<HashMap<String, Arc<Pattern>>>,
}

impl PatternCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn get_or_parse(&self, source: &str) -> Result<Arc<Pattern>, ParseError> {
        {
            let map = read(&self.inner);
            if let Some(hit) = map.get(source) {
                #[cfg(feature = "tracing")]
                tracing::trace!(chars = source.len(), "pattern cache hit");
                return Ok(Arc::clone(hit));
            }
        }

        let parsed = Arc::new(parse::parse(source)?);
        #[cfg(feature = "tracing")]
        tracing::debug!(chars = source.len(), "pattern cache miss, parsed");

        let mut map = write(&self.inner);
        Ok(Arc::clone(
            map.entry(source.to_owned()).or_insert(parsed),
        ))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        read(&self.inner).len()
    }
}

// Lock poisoning can only follow a panic in a reader/writer; the map is
// still structurally sound, so recover the guard instead of unwrapping.
fn read(
    lock: &RwLock<HashMap<String, Arc<Pattern>>>,
) -> std::sync::RwLockReadGuard<'_, HashMap<String, Arc<Pattern>>> {
    match lock.read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn write(
    lock: &RwLock<HashMap<String, Arc<Pattern>>>,
) -> std::sync::RwLockWriteGuard<'_, HashMap<String, Arc<Pattern>>> {
    match lock.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
