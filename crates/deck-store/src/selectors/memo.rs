//! Single-slot memoization keyed on input identity

use std::sync::Arc;

/// Remembers the last computed value and the key it was computed from
#[derive(Debug)]
pub struct Memo<K, V> {
    slot: Option<(K, V)>,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<K: PartialEq, V: Clone> Memo<K, V> {
    /// Return the cached value if `key` equals the last key, else recompute
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce() -> V) -> V {
        if let Some((cached_key, value)) = &self.slot {
            if *cached_key == key {
                return value.clone();
            }
        }
        let value = compute();
        self.slot = Some((key, value.clone()));
        value
    }
}

/// Compares by pointer, not by value
#[derive(Debug)]
pub struct ArcKey<T>(Arc<T>);

impl<T> ArcKey<T> {
    pub fn new(arc: &Arc<T>) -> Self {
        Self(Arc::clone(arc))
    }
}

impl<T> PartialEq for ArcKey<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recomputes_only_on_new_key() {
        let mut memo: Memo<ArcKey<Vec<u8>>, usize> = Memo::default();
        let a = Arc::new(vec![1, 2, 3]);
        let mut calls = 0;

        let len = memo.get_or_compute(ArcKey::new(&a), || {
            calls += 1;
            a.len()
        });
        assert_eq!(len, 3);
        memo.get_or_compute(ArcKey::new(&a), || {
            calls += 1;
            0
        });
        assert_eq!(calls, 1);

        // equal contents, different allocation
        let b = Arc::new(vec![1, 2, 3]);
        memo.get_or_compute(ArcKey::new(&b), || {
            calls += 1;
            b.len()
        });
        assert_eq!(calls, 2);
    }
}
