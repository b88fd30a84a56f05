use crate::types::{Bundle, Record};
use crate::Result;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use tracing::debug;

/// Named collections of fixture records
///
/// Merging is shallow: a category present in both sides is replaced
/// wholesale, never appended to. Record shape is never inspected.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry<T = Record> {
    bundle: Bundle<T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            bundle: BTreeMap::new(),
        }
    }
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `bundle` in, overwriting categories with the same name
    pub fn merge<I, K>(&mut self, bundle: I)
    where
        I: IntoIterator<Item = (K, Vec<T>)>,
        K: Into<String>,
    {
        for (category, records) in bundle {
            let category = category.into();
            debug!("Registering {} records under {:?}", records.len(), category);
            self.bundle.insert(category, records);
        }
    }

    /// Read view of every category
    pub fn data(&self) -> &Bundle<T> {
        &self.bundle
    }

    pub fn category(&self, name: &str) -> Option<&[T]> {
        self.bundle.get(name).map(Vec::as_slice)
    }
}

impl<T: DeserializeOwned> Registry<T> {
    /// Merge a JSON object whose values are arrays
    ///
    /// Nothing is merged when the text fails to parse.
    pub fn merge_json(&mut self, s: &str) -> Result<()> {
        let bundle: Bundle<T> = serde_json::from_str(s)?;
        self.merge(bundle);
        Ok(())
    }
}
