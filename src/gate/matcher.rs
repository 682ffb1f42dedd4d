//! Path matching for the route gate.

use regex::RegexSet;

use crate::error::{EngineError, EngineResult};

/// How a path is classified by prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    /// Requires an authenticated session.
    Protected,
    /// Never requires a session.
    Public,
    /// Matched by neither list.
    Unmatched,
}

/// Classifies paths against the protected and public prefix lists.
///
/// Matching is plain `starts_with`, so `/employees/42` matches `/employees`.
/// When both lists match, the longer prefix wins; equal lengths favour
/// public.
#[derive(Debug, Clone)]
pub struct PrefixMatcher {
    protected: Vec<String>,
    public: Vec<String>,
}

impl PrefixMatcher {
    /// Creates a matcher from the two prefix lists.
    pub fn new(protected: Vec<String>, public: Vec<String>) -> Self {
        Self { protected, public }
    }

    fn longest_match(prefixes: &[String], path: &str) -> Option<usize> {
        prefixes
            .iter()
            .filter(|prefix| path.starts_with(prefix.as_str()))
            .map(String::len)
            .max()
    }

    /// Classifies a path.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_admin_engine::gate::{PathClass, PrefixMatcher};
    ///
    /// let matcher = PrefixMatcher::new(
    ///     vec!["/enquiry".to_string()],
    ///     vec!["/candidate/enquiry".to_string()],
    /// );
    /// assert_eq!(matcher.classify("/enquiry/7"), PathClass::Protected);
    /// assert_eq!(matcher.classify("/candidate/enquiry"), PathClass::Public);
    /// assert_eq!(matcher.classify("/about"), PathClass::Unmatched);
    /// ```
    pub fn classify(&self, path: &str) -> PathClass {
        let protected = Self::longest_match(&self.protected, path);
        let public = Self::longest_match(&self.public, path);

        match (protected, public) {
            (Some(p), Some(q)) if p > q => PathClass::Protected,
            (_, Some(_)) => PathClass::Public,
            (Some(_), None) => PathClass::Protected,
            (None, None) => PathClass::Unmatched,
        }
    }
}

/// Paths the gate never evaluates (static assets, image optimizer, API
/// sub-tree, favicon, image files).
///
/// Patterns are regular expressions compiled once into a [`RegexSet`].
#[derive(Debug, Clone)]
pub struct ExclusionMatcher {
    patterns: RegexSet,
}

impl ExclusionMatcher {
    /// Compiles the exclusion patterns.
    ///
    /// Returns `InvalidConfig` naming the first pattern that fails to compile.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> EngineResult<Self> {
        let sources: Vec<&str> = patterns.iter().map(|p| p.as_ref()).collect();

        for (i, source) in sources.iter().enumerate() {
            regex::Regex::new(source).map_err(|e| EngineError::InvalidConfig {
                field: format!("exclusions[{}]", i),
                message: e.to_string(),
            })?;
        }

        let patterns = RegexSet::new(&sources).map_err(|e| {
            EngineError::InvalidConfig {
                field: "exclusions".to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(Self { patterns })
    }

    /// Returns true when the gate should not look at this path at all.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.patterns.is_match(path)
    }
}
