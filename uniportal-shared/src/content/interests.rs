//! Interest tags on the profile page.

pub const INTEREST_TAGS: [&str; 7] = [
    "Sports",
    "Music",
    "Coding",
    "Volunteering",
    "Research",
    "Art",
    "Debating",
];

/// Selected tags, in selection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interests {
    selected: Vec<&'static str>,
}

impl Default for Interests {
    fn default() -> Self {
        Self {
            selected: vec!["Coding"],
        }
    }
}

impl Interests {
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.selected.contains(&tag)
    }

    /// Adds or removes `tag`. Tags outside [`INTEREST_TAGS`] are ignored.
    pub fn toggle(&mut self, tag: &str) {
        if let Some(position) = self.selected.iter().position(|t| *t == tag) {
            self.selected.remove(position);
        } else if let Some(known) = INTEREST_TAGS.iter().find(|t| **t == tag) {
            self.selected.push(known);
        }
    }

    #[must_use]
    pub fn selected(&self) -> &[&'static str] {
        &self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut interests = Interests::default();
        assert!(interests.contains("Coding"));
        interests.toggle("Music");
        interests.toggle("Coding");
        assert_eq!(interests.selected(), &["Music"]);
    }

    #[test]
    fn test_unknown_tag_ignored() {
        let mut interests = Interests::default();
        interests.toggle("Knitting");
        assert_eq!(interests, Interests::default());
    }
}
