//! Path normalization and glob matching
//!
//! Every path-based rule goes through [`normalize`] first so that `./a`, `/a`,
//! `a` and `x/../a` are all judged the same way.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::error::HookError;

/// Directory names that mark everything beneath them as test code
const TEST_DIRS: &[&str] = &["test", "tests", "__tests__", "spec", "specs"];

/// Normalize a file path for pattern matching.
///
/// Backslashes become `/`, empty and `.` segments are dropped, `..` collapses
/// its parent, and the result is always relative (no leading `./` or `/`).
/// Never fails; an empty result is returned as `.`.
pub fn normalize(path: &str) -> String {
    let unified = path.replace('\\', "/");
    let absolute = unified.starts_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in unified.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                // `/..` is still `/`
                _ if absolute => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    if segments.is_empty() {
        return ".".to_string();
    }
    segments.join("/")
}

/// Final segment of an already-normalized path
pub fn basename(normalized: &str) -> &str {
    normalized.rsplit('/').next().unwrap_or(normalized)
}

/// Naming-convention check used to exempt test fixtures from secret scanning
pub fn is_test_file(path: &str) -> bool {
    let normalized = normalize(path).to_lowercase();

    if normalized.split('/').any(|part| TEST_DIRS.contains(&part)) {
        return true;
    }

    let name = basename(&normalized);
    name.starts_with("test_")
        || name.ends_with("_test")
        || name.ends_with("_spec")
        || name.contains(".test.")
        || name.contains(".spec.")
}

/// An ordered, compiled list of glob patterns.
///
/// `*` stops at `/`, `**` crosses it. Patterns are tried against the whole
/// normalized path and against its basename.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<String>,
    set: GlobSet,
}

impl PatternSet {
    /// Compile patterns, keeping their order for reporting
    pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Self, HookError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = GlobBuilder::new(pattern.as_ref())
                .literal_separator(true)
                .build()?;
            builder.add(glob);
        }

        Ok(Self {
            patterns: patterns.iter().map(|p| p.as_ref().to_string()).collect(),
            set: builder.build()?,
        })
    }

    /// Return the first pattern (in list order) matching the path or its basename
    pub fn match_any(&self, path: &str) -> Option<&str> {
        let normalized = normalize(path);
        let name = basename(&normalized);

        let mut hits = self.set.matches(normalized.as_str());
        hits.extend(self.set.matches(name));

        hits.into_iter().min().map(|idx| self.patterns[idx].as_str())
    }

    /// Number of patterns in the set
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True when no patterns were compiled
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
