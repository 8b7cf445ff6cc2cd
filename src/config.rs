//! Reference data for the matchers
//!
//! The word lists are configuration, not code: a food-term list (one term per
//! line, multi-word terms space-separated), an alias-to-canonical-location
//! map and a pattern-to-canonical-location map (`key,CanonicalName` per
//! line). They are loaded once at startup, are immutable afterwards, and are
//! passed by reference into every matcher.

use crate::error::{Result, ScrapeError};
use crate::text;
use regex::{Regex, RegexBuilder};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::debug;

const BUNDLED_FOODS: &str = include_str!("../data/foods.txt");
const BUNDLED_LOCATIONS: &str = include_str!("../data/locations.txt");
const BUNDLED_PATTERNS: &str = include_str!("../data/location_patterns.txt");

/// Known food terms, case-normalized at load time
#[derive(Debug, Clone)]
pub struct FoodLexicon {
    /// Terms in file order
    terms: Vec<String>,

    /// Lookup index over the same terms
    index: HashSet<String>,

    /// First word of each multi-word term mapped to the candidate phrase
    /// word-counts, longest first
    phrase_lengths: HashMap<String, Vec<usize>>,
}

impl FoodLexicon {
    /// Build a lexicon from raw terms, normalizing each and skipping blanks
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut terms = Vec::new();
        let mut index = HashSet::new();
        let mut phrase_lengths: HashMap<String, Vec<usize>> = HashMap::new();

        for line in raw {
            let term = text::normalize(line.as_ref().trim());
            if term.is_empty() || index.contains(&term) {
                continue;
            }

            let words: Vec<&str> = term.split_whitespace().collect();
            if words.len() > 1 {
                let lengths = phrase_lengths.entry(words[0].to_string()).or_default();
                if !lengths.contains(&words.len()) {
                    lengths.push(words.len());
                    lengths.sort_unstable_by(|a, b| b.cmp(a));
                }
            }

            index.insert(term.clone());
            terms.push(term);
        }

        Self {
            terms,
            index,
            phrase_lengths,
        }
    }

    /// Parse a one-term-per-line word list
    #[must_use]
    pub fn parse(contents: &str) -> Self {
        Self::new(contents.lines())
    }

    /// Number of known terms
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Whether `candidate` is a known food string.
    ///
    /// True for an exact term, or for a term with a trailing `s` or `es`
    /// attached. This is the only pluralization rule; there is no stemming.
    #[must_use]
    pub fn is_valid_food(&self, candidate: &str) -> bool {
        if self.index.contains(candidate) {
            return true;
        }
        if let Some(stem) = candidate.strip_suffix('s')
            && self.index.contains(stem)
        {
            return true;
        }
        if let Some(stem) = candidate.strip_suffix("es")
            && self.index.contains(stem)
        {
            return true;
        }
        false
    }

    /// Candidate phrase word-counts for a first word, longest first
    pub(crate) fn phrase_lengths(&self, first_word: &str) -> &[usize] {
        self.phrase_lengths
            .get(first_word)
            .map_or(&[], Vec::as_slice)
    }
}

/// A raw alias resolving to a canonical location name
#[derive(Debug, Clone)]
pub struct LocationAlias {
    /// Normalized substring to search for
    pub alias: String,

    /// Display name the alias resolves to
    pub canonical: String,
}

impl LocationAlias {
    /// Create an alias pair, normalizing the alias side
    pub fn new(alias: impl AsRef<str>, canonical: impl Into<String>) -> Self {
        Self {
            alias: text::normalize(alias.as_ref().trim()),
            canonical: canonical.into(),
        }
    }
}

/// A structural pattern resolving to a canonical location name
#[derive(Debug, Clone)]
pub struct LocationPattern {
    /// Pattern source string; its length competes with alias lengths
    pub pattern: String,

    /// Display name the pattern resolves to
    pub canonical: String,

    pub(crate) regex: Regex,
}

impl LocationPattern {
    /// Compile a case-insensitive location pattern
    pub fn new(pattern: impl Into<String>, canonical: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| ScrapeError::Pattern {
                pattern: pattern.clone(),
                source,
            })?;
        Ok(Self {
            pattern,
            canonical: canonical.into(),
            regex,
        })
    }
}

/// Known location aliases and patterns, loaded once and immutable afterwards
#[derive(Debug, Clone)]
pub struct LocationDirectory {
    aliases: Vec<LocationAlias>,
    patterns: Vec<LocationPattern>,
}

impl LocationDirectory {
    /// Assemble a directory from already-built aliases and patterns
    #[must_use]
    pub const fn new(aliases: Vec<LocationAlias>, patterns: Vec<LocationPattern>) -> Self {
        Self { aliases, patterns }
    }

    /// Parse the alias and pattern maps from their file contents
    pub fn parse(aliases: &str, patterns: &str) -> Result<Self> {
        Ok(Self::new(
            parse_aliases(aliases, "<aliases>")?,
            parse_patterns(patterns, "<patterns>")?,
        ))
    }

    /// Aliases in file order
    #[must_use]
    pub fn aliases(&self) -> &[LocationAlias] {
        &self.aliases
    }

    /// Patterns in file order
    #[must_use]
    pub fn patterns(&self) -> &[LocationPattern] {
        &self.patterns
    }
}

/// Immutable reference data for the matchers, constructed once at startup
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Known food terms
    pub foods: FoodLexicon,

    /// Known location aliases and patterns
    pub locations: LocationDirectory,
}

impl ScraperConfig {
    /// Assemble a configuration from already-loaded parts
    #[must_use]
    pub const fn new(foods: FoodLexicon, locations: LocationDirectory) -> Self {
        Self { foods, locations }
    }

    /// Load reference data from externally supplied files.
    ///
    /// A missing or unreadable file, a mapping line without a comma, or a
    /// pattern that fails to compile is fatal; the matchers cannot run
    /// without their word lists.
    pub fn from_files(
        foods: impl AsRef<Path>,
        aliases: impl AsRef<Path>,
        patterns: impl AsRef<Path>,
    ) -> Result<Self> {
        let foods = FoodLexicon::parse(&read_reference(foods.as_ref())?);
        let aliases = parse_aliases(
            &read_reference(aliases.as_ref())?,
            &aliases.as_ref().display().to_string(),
        )?;
        let patterns = parse_patterns(
            &read_reference(patterns.as_ref())?,
            &patterns.as_ref().display().to_string(),
        )?;

        let config = Self::new(foods, LocationDirectory::new(aliases, patterns));
        config.log_loaded();
        Ok(config)
    }

    /// Load the reference data shipped with the crate
    pub fn bundled() -> Result<Self> {
        let config = Self::new(
            FoodLexicon::parse(BUNDLED_FOODS),
            LocationDirectory::parse(BUNDLED_LOCATIONS, BUNDLED_PATTERNS)?,
        );
        config.log_loaded();
        Ok(config)
    }

    fn log_loaded(&self) {
        debug!(
            "Loaded reference data: {} foods, {} aliases, {} patterns",
            self.foods.len(),
            self.locations.aliases().len(),
            self.locations.patterns().len()
        );
    }
}

fn read_reference(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ScrapeError::ConfigIo {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_aliases(contents: &str, file: &str) -> Result<Vec<LocationAlias>> {
    let mut aliases = Vec::new();
    for (number, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        // Canonical names may contain anything but a leading comma
        let Some((alias, canonical)) = line.split_once(',') else {
            return Err(ScrapeError::ConfigFormat {
                file: file.to_string(),
                line: number + 1,
                details: format!("expected `alias,CanonicalName`, got `{line}`"),
            });
        };
        aliases.push(LocationAlias::new(alias, canonical.trim()));
    }
    Ok(aliases)
}

fn parse_patterns(contents: &str, file: &str) -> Result<Vec<LocationPattern>> {
    let mut patterns = Vec::new();
    for (number, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        // Patterns may contain commas; canonical names may not, so split at
        // the last one
        let Some((pattern, canonical)) = line.rsplit_once(',') else {
            return Err(ScrapeError::ConfigFormat {
                file: file.to_string(),
                line: number + 1,
                details: format!("expected `pattern,CanonicalName`, got `{line}`"),
            });
        };
        patterns.push(LocationPattern::new(pattern.trim(), canonical.trim())?);
    }
    Ok(patterns)
}
