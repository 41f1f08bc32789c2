use crate::error::{Result, SlugError};

/// Symbol-to-word replacements applied when no custom table is given.
pub const DEFAULT_REPLACEMENTS: &[(&str, &str)] = &[
    ("&", " and "),
    ("+", " plus "),
    ("☕", " coffee "),
    ("♥", " love "),
];

/// Configuration for a single slugify call.
///
/// Every option has a default, so `Options::default()` describes the
/// standard behavior. Use the chainable setters to override individual
/// options:
///
/// ```
/// use slugify_rs::{slugify, Options};
///
/// let opts = Options::new().separator("_").max_length(7);
/// assert_eq!(slugify("Hello World", &opts), "hello_w");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// String placed between words. May be empty.
    pub separator: String,
    /// Lowercase the result.
    pub lowercase: bool,
    /// Split `camelCase` and `PascalCase` words before joining.
    pub decamelize: bool,
    /// Ordered (match, replacement) pairs applied before anything else.
    /// Replaces the default table rather than extending it.
    pub custom_replacements: Vec<(String, String)>,
    /// Keep one leading `_` when the separator is `_`.
    pub preserve_leading_underscore: bool,
    /// Keep one trailing `-` when the separator is `-`.
    pub preserve_trailing_dash: bool,
    /// Characters copied through verbatim instead of collapsed.
    pub preserve_characters: Vec<char>,
    /// Convert non-ASCII text to ASCII approximations.
    pub transliterate: bool,
    /// BCP-47 tag selecting language-specific transliterations.
    pub locale: Option<String>,
    /// Maximum length of the slug, in characters.
    pub max_length: Option<usize>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn decamelize(mut self, decamelize: bool) -> Self {
        self.decamelize = decamelize;
        self
    }

    pub fn custom_replacements<I, M, R>(mut self, replacements: I) -> Self
    where
        I: IntoIterator<Item = (M, R)>,
        M: Into<String>,
        R: Into<String>,
    {
        self.custom_replacements = replacements
            .into_iter()
            .map(|(m, r)| (m.into(), r.into()))
            .collect();
        self
    }

    pub fn preserve_leading_underscore(mut self, preserve: bool) -> Self {
        self.preserve_leading_underscore = preserve;
        self
    }

    pub fn preserve_trailing_dash(mut self, preserve: bool) -> Self {
        self.preserve_trailing_dash = preserve;
        self
    }

    pub fn preserve_characters<I: IntoIterator<Item = char>>(mut self, chars: I) -> Self {
        self.preserve_characters = chars.into_iter().collect();
        self
    }

    pub fn transliterate(mut self, transliterate: bool) -> Self {
        self.transliterate = transliterate;
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Checks that the configuration can be compiled into patterns.
    pub fn validate(&self) -> Result<()> {
        if let Some(index) = self
            .custom_replacements
            .iter()
            .position(|(from, _)| from.is_empty())
        {
            return Err(SlugError::EmptyReplacement { index });
        }
        Ok(())
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            separator: "-".to_string(),
            lowercase: true,
            decamelize: true,
            custom_replacements: DEFAULT_REPLACEMENTS
                .iter()
                .map(|&(from, to)| (from.to_string(), to.to_string()))
                .collect(),
            preserve_leading_underscore: false,
            preserve_trailing_dash: false,
            preserve_characters: Vec::new(),
            transliterate: true,
            locale: None,
            max_length: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = Options::default();
        assert_eq!(opts.separator, "-");
        assert!(opts.lowercase);
        assert!(opts.decamelize);
        assert!(opts.transliterate);
        assert_eq!(opts.custom_replacements.len(), DEFAULT_REPLACEMENTS.len());
        assert!(opts.preserve_characters.is_empty());
        assert_eq!(opts.max_length, None);
    }

    #[test]
    fn test_custom_table_replaces_default() {
        let opts = Options::new().custom_replacements([("@", " at ")]);
        assert_eq!(
            opts.custom_replacements,
            vec![("@".to_string(), " at ".to_string())]
        );
    }

    #[test]
    fn test_validate_rejects_empty_match() {
        let opts = Options::new().custom_replacements([("x", "y"), ("", "z")]);
        assert!(matches!(
            opts.validate(),
            Err(SlugError::EmptyReplacement { index: 1 })
        ));
        assert!(Options::default().validate().is_ok());
    }
}
