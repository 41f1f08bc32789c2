use crate::error::Result;
use crate::options::Options;
use crate::pipeline::Slugifier;
use ahash::AHashMap as HashMap;

/// Slugifier that disambiguates repeated slugs with a numeric suffix.
///
/// The first occurrence of a slug is returned unchanged; the Nth repeat gets
/// `separator + N` appended. Only the base slug is counted: a suffixed result
/// such as `foo-bar-2` is not recorded as a slug of its own.
///
/// ```
/// use slugify_rs::{CollisionTracker, Options};
///
/// let mut tracker = CollisionTracker::new();
/// let opts = Options::default();
/// assert_eq!(tracker.invoke("foo bar", &opts), "foo-bar");
/// assert_eq!(tracker.invoke("foo bar", &opts), "foo-bar-2");
///
/// tracker.reset();
/// assert_eq!(tracker.invoke("foo bar", &opts), "foo-bar");
/// ```
pub struct CollisionTracker<'s> {
    slugifier: &'s Slugifier,
    occurrences: HashMap<String, usize>,
}

impl CollisionTracker<'static> {
    /// Creates a fresh tracker backed by the global slugifier.
    pub fn new() -> Self {
        Self::with_slugifier(Slugifier::global())
    }
}

impl<'s> CollisionTracker<'s> {
    /// Creates a fresh tracker backed by `slugifier`.
    pub fn with_slugifier(slugifier: &'s Slugifier) -> Self {
        Self {
            slugifier,
            occurrences: HashMap::new(),
        }
    }

    /// Slugifies `text`, appending a counter if the slug was seen before.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Slugifier::slugify`].
    pub fn invoke(&mut self, text: &str, options: &Options) -> String {
        match self.try_invoke(text, options) {
            Ok(slug) => slug,
            Err(err) => panic!("cannot slugify {:?}: {}", text, err),
        }
    }

    /// Fallible form of [`CollisionTracker::invoke`]. A failed call leaves
    /// the occurrence counts untouched.
    pub fn try_invoke(&mut self, text: &str, options: &Options) -> Result<String> {
        let slug = self.slugifier.try_slugify(text, options)?;

        let count = self.occurrences.entry(slug.clone()).or_insert(0);
        *count += 1;

        if *count == 1 {
            Ok(slug)
        } else {
            log::trace!("slug {:?} seen {} times", slug, count);
            Ok(format!("{}{}{}", slug, options.separator, count))
        }
    }

    /// Forgets every slug seen so far.
    pub fn reset(&mut self) {
        self.occurrences.clear();
    }

    /// Returns true if no slug has been produced since creation or the last
    /// reset.
    pub fn is_fresh(&self) -> bool {
        self.occurrences.is_empty()
    }
}

impl Default for CollisionTracker<'static> {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a fresh [`CollisionTracker`] backed by the global slugifier.
pub fn create_collision_tracker() -> CollisionTracker<'static> {
    CollisionTracker::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increments_collisions() {
        let mut tracker = CollisionTracker::new();
        let opts = Options::default();
        assert_eq!(tracker.invoke("foo bar", &opts), "foo-bar");
        assert_eq!(tracker.invoke("foo bar", &opts), "foo-bar-2");
        assert_eq!(tracker.invoke("Foo Bar!", &opts), "foo-bar-3");
        assert_eq!(tracker.invoke("baz", &opts), "baz");
    }

    #[test]
    fn test_reset() {
        let mut tracker = create_collision_tracker();
        let opts = Options::default();
        assert!(tracker.is_fresh());

        tracker.invoke("foo bar", &opts);
        tracker.invoke("foo bar", &opts);
        assert!(!tracker.is_fresh());

        tracker.reset();
        assert!(tracker.is_fresh());
        assert_eq!(tracker.invoke("foo bar", &opts), "foo-bar");
    }

    #[test]
    fn test_suffix_uses_call_separator() {
        let mut tracker = CollisionTracker::new();
        let opts = Options::new().separator("_");
        assert_eq!(tracker.invoke("foo bar", &opts), "foo_bar");
        assert_eq!(tracker.invoke("foo bar", &opts), "foo_bar_2");

        let opts = Options::new().separator("");
        assert_eq!(tracker.invoke("foo bar", &opts), "foobar");
        assert_eq!(tracker.invoke("foo bar", &opts), "foobar2");
    }

    #[test]
    fn test_suffixed_output_is_not_tracked() {
        let mut tracker = CollisionTracker::new();
        let opts = Options::default();
        assert_eq!(tracker.invoke("foo", &opts), "foo");
        assert_eq!(tracker.invoke("foo", &opts), "foo-2");
        // "foo 2" slugifies to the same text as the earlier suffixed output,
        // but it is a first occurrence as far as the tracker knows.
        assert_eq!(tracker.invoke("foo 2", &opts), "foo-2");
        assert_eq!(tracker.invoke("foo", &opts), "foo-3");
    }

    #[test]
    fn test_trackers_are_independent() {
        let slugifier = Slugifier::new();
        let mut a = CollisionTracker::with_slugifier(&slugifier);
        let mut b = CollisionTracker::with_slugifier(&slugifier);
        let opts = Options::default();

        assert_eq!(a.invoke("x", &opts), "x");
        assert_eq!(b.invoke("x", &opts), "x");
        assert_eq!(a.invoke("x", &opts), "x-2");
    }

    #[test]
    fn test_failed_call_leaves_state() {
        let mut tracker = CollisionTracker::new();
        let bad = Options::new().custom_replacements([("", "x")]);
        assert!(tracker.try_invoke("foo", &bad).is_err());
        assert!(tracker.is_fresh());
    }
}
