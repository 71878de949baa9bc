use std::fmt;

/// Pointers visited along the current root-to-node descent
///
/// A `ResolutionPath` has value semantics: following a reference produces an
/// extended copy and leaves the original untouched, so sibling branches
/// never see each other's visits. Insertion order is kept so a cycle can be
/// reported as the chain that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionPath {
    visited: Vec<String>,
}

impl ResolutionPath {
    /// An empty path, the starting point of every top-level resolution
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `pointer` was already followed on this descent
    pub fn contains(&self, pointer: &str) -> bool {
        self.visited.iter().any(|p| p == pointer)
    }

    /// A copy of this path with `pointer` appended
    pub fn extended(&self, pointer: &str) -> Self {
        let mut visited = Vec::with_capacity(self.visited.len() + 1);
        visited.extend(self.visited.iter().cloned());
        visited.push(pointer.to_string());
        Self { visited }
    }

    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    /// Pointers in the order they were followed
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.visited.iter().map(String::as_str)
    }
}

impl fmt::Display for ResolutionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pointer) in self.visited.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", pointer)?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for ResolutionPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            visited: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extended_does_not_mutate_original() {
        let base = ResolutionPath::new().extended("#/A");
        let child = base.extended("#/B");

        assert!(base.contains("#/A"));
        assert!(!base.contains("#/B"));
        assert!(child.contains("#/A"));
        assert!(child.contains("#/B"));
        assert_eq!(base.len(), 1);
        assert_eq!(child.len(), 2);
    }

    #[test]
    fn test_siblings_are_independent() {
        let parent = ResolutionPath::new().extended("#/P");
        let left = parent.extended("#/L");
        let right = parent.extended("#/R");

        assert!(!left.contains("#/R"));
        assert!(!right.contains("#/L"));
    }

    #[test]
    fn test_display_shows_chain() {
        let path: ResolutionPath = ["#/A", "#/B"].into_iter().collect();
        assert_eq!(path.to_string(), "#/A -> #/B");
        assert_eq!(ResolutionPath::new().to_string(), "");
    }
}
