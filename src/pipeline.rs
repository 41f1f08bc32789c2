use crate::cache::PatternCaches;
use crate::error::Result;
use crate::options::Options;
use crate::patterns::{decamelize, PreservePattern, Replacer, TrimPattern, DEFAULT_PRESERVE};
use crate::transliterate::transliterate_preserving;
use once_cell::sync::Lazy;
use std::sync::Arc;

static GLOBAL: Lazy<Slugifier> = Lazy::new(Slugifier::new);

/// The slug transform pipeline.
///
/// Owns the caches of compiled patterns derived from the options it has
/// seen. Output depends only on the input text and options; the caches only
/// avoid recompiling patterns for configurations used before.
pub struct Slugifier {
    caches: PatternCaches,
}

impl Slugifier {
    /// Creates a slugifier with empty pattern caches.
    pub fn new() -> Self {
        Self {
            caches: PatternCaches::new(),
        }
    }

    /// Returns the process-wide slugifier behind [`crate::slugify`].
    pub fn global() -> &'static Slugifier {
        &GLOBAL
    }

    /// Converts `text` into a slug.
    ///
    /// # Panics
    ///
    /// Panics if the options are rejected by [`Options::validate`] or a
    /// derived pattern fails to compile. Use [`Slugifier::try_slugify`] to
    /// handle those cases.
    pub fn slugify(&self, text: &str, options: &Options) -> String {
        match self.try_slugify(text, options) {
            Ok(slug) => slug,
            Err(err) => panic!("cannot slugify {:?}: {}", text, err),
        }
    }

    /// Converts `text` into a slug, reporting unusable options as errors.
    pub fn try_slugify(&self, text: &str, options: &Options) -> Result<String> {
        options.validate()?;

        let mut slug = text.to_string();

        if !options.custom_replacements.is_empty() {
            let table = &options.custom_replacements;
            let replacer = self
                .caches
                .replacers
                .get_or_build(&Replacer::cache_key(table), || Replacer::new(table))?;
            slug = replacer.replace(&slug).into_owned();
        }

        if options.transliterate {
            slug = transliterate_preserving(
                &slug,
                options.locale.as_deref(),
                &options.preserve_characters,
            );
        }

        if options.decamelize {
            slug = decamelize(&slug);
        }

        if options.lowercase {
            slug = slug.to_lowercase();
        }

        let separator = options.separator.as_str();
        slug = if options.preserve_characters.is_empty() {
            DEFAULT_PRESERVE.collapse(&slug, separator).into_owned()
        } else {
            let preserve = &options.preserve_characters;
            let pattern = self
                .caches
                .preserve
                .get_or_build(&PreservePattern::cache_key(preserve), || {
                    PreservePattern::new(preserve)
                })?;
            pattern.collapse(&slug, separator).into_owned()
        };

        let trim = self.trim_pattern(options)?;
        if let Some(trim) = &trim {
            slug = trim.trim(&slug);
        }

        if let Some(max_length) = options.max_length {
            if let Some((cut, _)) = slug.char_indices().nth(max_length) {
                slug.truncate(cut);
                if let Some(trim) = &trim {
                    slug = trim.trim(&slug);
                }
            }
        }

        Ok(slug)
    }

    /// Total number of compiled patterns held by this slugifier's caches.
    pub fn cached_patterns(&self) -> usize {
        self.caches.preserve.len() + self.caches.trim.len() + self.caches.replacers.len()
    }

    fn trim_pattern(&self, options: &Options) -> Result<Option<Arc<TrimPattern>>> {
        let separator = options.separator.as_str();
        if separator.is_empty() {
            return Ok(None);
        }

        let lead = options.preserve_leading_underscore;
        let trail = options.preserve_trailing_dash;
        self.caches
            .trim
            .get_or_build(&TrimPattern::cache_key(separator, lead, trail), || {
                TrimPattern::new(separator, lead, trail)
            })
            .map(Some)
    }
}

impl Default for Slugifier {
    fn default() -> Self {
        Self::new()
    }
}
