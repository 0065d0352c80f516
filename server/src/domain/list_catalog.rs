//! List Catalog
//!
//! The fixed allow-list of list names this service manages.

/// Allowed list names, in configuration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCatalog {
    names: Vec<String>,
}

impl ListCatalog {
    pub const DEFAULT_NAMES: [&'static str; 3] = ["category", "type", "area"];

    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        Self { names: unique }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for ListCatalog {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAMES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names() {
        let catalog = ListCatalog::default();
        assert!(catalog.contains("category"));
        assert!(catalog.contains("type"));
        assert!(catalog.contains("area"));
        assert!(!catalog.contains("nonexistent"));
        assert!(!catalog.contains("area.json"));
    }

    #[test]
    fn test_duplicates_collapsed() {
        let catalog = ListCatalog::new(["area", "area", "type"]);
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["area", "type"]);
    }
}
