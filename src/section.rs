#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<Entry>,
}

impl Section {
    #[must_use]
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            entries: Vec::with_capacity(16),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in the order their keys first appeared.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the raw value stored for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(Entry::value)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|entry| entry.key == key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stores `value` under `key`, returning the value it replaced.
    pub(crate) fn insert(&mut self, key: String, value: String) -> Option<String> {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.key == key) {
            Some(std::mem::replace(&mut entry.value, value))
        } else {
            self.entries.push(Entry { key, value });
            None
        }
    }
}

/// A key and its raw, unconverted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    key: String,
    value: String,
}

impl Entry {
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_overwrites_in_place() {
        let mut section = Section::new("Section".to_owned());

        assert_eq!(section.insert("a".to_owned(), "1".to_owned()), None);
        assert_eq!(section.insert("b".to_owned(), "2".to_owned()), None);
        assert_eq!(
            section.insert("a".to_owned(), "3".to_owned()),
            Some("1".to_owned())
        );

        let keys = section.entries().iter().map(Entry::key).collect::<Vec<_>>();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(section.get("a"), Some("3"));
        assert_eq!(section.len(), 2);
    }

    #[test]
    fn missing_key() {
        let section = Section::new("Section".to_owned());

        assert!(section.is_empty());
        assert!(!section.contains_key("a"));
        assert_eq!(section.get("a"), None);
    }
}
