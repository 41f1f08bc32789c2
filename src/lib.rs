//! # Slugify - URL-safe identifiers from arbitrary text
//!
//! Converts human-readable text into a normalized slug by running a fixed
//! sequence of transformations:
//! 1. **Custom replacement**: symbols such as `&` and `♥` become words, in one pass
//! 2. **Transliteration**: non-ASCII text becomes an ASCII approximation
//! 3. **Decamelization**: `fooBar` becomes `foo Bar`
//! 4. **Case folding**
//! 5. **Collapse**: every run of disallowed characters becomes one separator
//! 6. **Edge trimming** of leading and trailing separators
//! 7. **Truncation** to an optional maximum length
//!
//! ## Example
//!
//! ```
//! use slugify_rs::{slugify, CollisionTracker, Options};
//!
//! assert_eq!(slugify("I ♥ Cats", &Options::default()), "i-love-cats");
//! assert_eq!(slugify("fooBar", &Options::new().separator("_")), "foo_bar");
//!
//! // Repeated slugs get a numeric suffix.
//! let mut tracker = CollisionTracker::new();
//! assert_eq!(tracker.invoke("foo bar", &Options::default()), "foo-bar");
//! assert_eq!(tracker.invoke("foo bar", &Options::default()), "foo-bar-2");
//! ```
//!
//! ## Performance
//!
//! - Patterns derived from options (preserved characters, separators,
//!   replacement tables) are compiled once per distinct configuration
//! - Each stage is a single linear pass over the text

mod cache;
mod counter;
mod error;
mod options;
mod patterns;
mod pipeline;
mod transliterate;


pub use counter::{create_collision_tracker, CollisionTracker};
pub use error::{Result, SlugError};
pub use options::{Options, DEFAULT_REPLACEMENTS};
pub use pipeline::Slugifier;
pub use transliterate::{transliterate, transliterate_preserving};

/// Converts `text` into a slug using the global [`Slugifier`].
///
/// # Panics
///
/// Panics if `options` fail [`Options::validate`] or a derived pattern
/// cannot be compiled; see [`try_slugify`].
pub fn slugify(text: &str, options: &Options) -> String {
    Slugifier::global().slugify(text, options)
}

/// Fallible form of [`slugify`].
pub fn try_slugify(text: &str, options: &Options) -> Result<String> {
    Slugifier::global().try_slugify(text, options)
}
