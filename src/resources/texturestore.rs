//! Loaded textures keyed by file reference.
//!
//! The handle type comes from the texture backend. Handles release their GPU
//! resource on drop, so replacing or clearing an entry frees it.

use rustc_hash::FxHashMap;

pub struct TextureStore<T> {
    map: FxHashMap<String, T>,
}

impl<T> TextureStore<T> {
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// Insert a texture and return the handle it replaced, if any.
    pub fn insert(&mut self, key: impl Into<String>, texture: T) -> Option<T> {
        self.map.insert(key.into(), texture)
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&T> {
        self.map.get(key.as_ref())
    }

    pub fn contains(&self, key: impl AsRef<str>) -> bool {
        self.map.contains_key(key.as_ref())
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map.keys().cloned().collect();
        names.sort();
        names
    }

    /// Drop every handle.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<T> Default for TextureStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
