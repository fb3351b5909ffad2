// WHY: Title abbreviations like "Mr." end in a delimiter but precede a proper noun
// Matching them at the candidate delimiter prevents false sentence splits

/// Default titles suppressed as sentence boundaries
pub const DEFAULT_TITLES: &[&str] = &["Mr.", "Ms.", "Mrs."];

/// Ordered, de-duplicated set of literal title strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleChecker {
    titles: Vec<String>,
}

impl TitleChecker {
    /// Create a checker from literal titles; empty entries are ignored
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut checker = Self::default();
        for title in titles {
            checker.insert(title.as_ref());
        }
        checker
    }

    /// Parse the newline-separated titles setting
    /// WHY: An empty line would match at every index and silence all delimiters
    pub fn from_lines(raw: &str) -> Self {
        Self::new(raw.split('\n').map(|line| line.trim_end_matches('\r')))
    }

    fn insert(&mut self, title: &str) {
        if !title.is_empty() && !self.titles.iter().any(|t| t == title) {
            self.titles.push(title.to_string());
        }
    }

    /// Check whether any title ends exactly at `index`, inclusive
    pub fn title_ends_at(&self, chars: &[char], index: usize) -> bool {
        if index >= chars.len() {
            return false;
        }

        self.titles.iter().any(|title| {
            let mut preceding = chars[..=index].iter().rev();
            title.chars().rev().all(|ch| preceding.next() == Some(&ch))
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.titles.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Newline-joined form used when persisting settings
    pub fn to_lines(&self) -> String {
        self.titles.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_title_detection_at_delimiter() {
        let checker = TitleChecker::new(DEFAULT_TITLES.iter().copied());
        let text = chars("Ask Mrs. Smith or Mr. Jones.");

        // "Mrs." ends at index 7, "Mr." at index 20
        assert!(checker.title_ends_at(&text, 7));
        assert!(checker.title_ends_at(&text, 20));
        assert!(!checker.title_ends_at(&text, 27), "Final period is not a title");
    }

    #[test]
    fn test_title_longer_than_prefix() {
        let checker = TitleChecker::new(["Mrs."]);
        let text = chars("s. and more");
        assert!(!checker.title_ends_at(&text, 1));
        assert!(!checker.title_ends_at(&text, 50), "Out of range index never matches");
    }

    #[test]
    fn test_title_match_is_case_sensitive() {
        let checker = TitleChecker::new(["Mr."]);
        assert!(!checker.title_ends_at(&chars("mr."), 2));
        // Suffix match: "Mr." inside a longer word still matches
        assert!(checker.title_ends_at(&chars("HMr."), 3));
    }

    #[test]
    fn test_from_lines_parsing() {
        let checker = TitleChecker::from_lines("Mr.\r\nDr.\n\nMr.\nProf.\n");
        assert_eq!(checker.iter().collect::<Vec<_>>(), vec!["Mr.", "Dr.", "Prof."]);
        assert_eq!(checker.to_lines(), "Mr.\nDr.\nProf.");

        assert!(TitleChecker::from_lines("").is_empty());
    }
}
