use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Decides whether a bare entry name is excluded. The renderer only depends
/// on this trait, so tests can substitute stub semantics for the glob engine.
pub trait NameMatcher {
    fn matches(&self, name: &str) -> bool;
}

/// Exclusion patterns compiled once before traversal.
///
/// Shell glob semantics: `*`, `?`, bracket classes and `{a,b}` alternation,
/// matched case-sensitively against the bare name, never the full path.
#[derive(Debug)]
pub struct CompiledPatterns {
    set: GlobSet,
}

impl CompiledPatterns {
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern)
                .with_context(|| format!("invalid exclude pattern: {pattern}"))?;
            builder.add(glob);
        }
        let set = builder.build().context("failed to compile exclude patterns")?;
        Ok(Self { set })
    }
}

impl NameMatcher for CompiledPatterns {
    fn matches(&self, name: &str) -> bool {
        self.set.is_match(name)
    }
}
