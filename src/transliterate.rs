//! ASCII transliteration with optional locale-specific overrides.

use deunicode::deunicode_with_tofu;

const GERMAN: &[(char, &str)] = &[
    ('ä', "ae"),
    ('ö', "oe"),
    ('ü', "ue"),
    ('Ä', "Ae"),
    ('Ö', "Oe"),
    ('Ü', "Ue"),
    ('ß', "ss"),
    ('ẞ', "SS"),
];

const DANO_NORWEGIAN: &[(char, &str)] = &[
    ('æ', "ae"),
    ('ø', "oe"),
    ('å', "aa"),
    ('Æ', "Ae"),
    ('Ø', "Oe"),
    ('Å', "Aa"),
];

/// Overrides for a BCP-47 tag, matched on its primary language subtag.
fn locale_overrides(locale: &str) -> &'static [(char, &'static str)] {
    let primary = locale.split(['-', '_']).next().unwrap_or_default();
    match primary.to_ascii_lowercase().as_str() {
        "de" => GERMAN,
        "da" | "nb" | "nn" | "no" => DANO_NORWEGIAN,
        _ => &[],
    }
}

/// True when the uppercase letter at `i` belongs to an all-caps word: the
/// next letter is uppercase, or there is no lowercase letter after it and
/// the previous letter is uppercase.
fn in_caps_word(chars: &[char], i: usize) -> bool {
    if !chars[i].is_uppercase() {
        return false;
    }
    let next = chars.get(i + 1).copied();
    let prev = i.checked_sub(1).map(|p| chars[p]);
    match next {
        Some(n) if n.is_uppercase() => true,
        Some(n) if n.is_lowercase() => false,
        _ => prev.is_some_and(char::is_uppercase),
    }
}

/// Converts `text` to ASCII. Characters without an ASCII approximation are
/// dropped.
pub fn transliterate(text: &str, locale: Option<&str>) -> String {
    let overrides = locale.map(locale_overrides).unwrap_or_default();
    if overrides.is_empty() {
        return deunicode_with_tofu(text, "");
    }

    let chars: Vec<char> = text.chars().collect();
    let mut mapped = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        match overrides.iter().find(|&&(from, _)| from == c) {
            Some(&(_, to)) if in_caps_word(&chars, i) => mapped.push_str(&to.to_uppercase()),
            Some(&(_, to)) => mapped.push_str(to),
            None => mapped.push(c),
        }
    }
    deunicode_with_tofu(&mapped, "")
}

/// Like [`transliterate`], but characters in `preserve` are copied through
/// verbatim and the runs between them are transliterated independently.
pub fn transliterate_preserving(text: &str, locale: Option<&str>, preserve: &[char]) -> String {
    if preserve.is_empty() {
        return transliterate(text, locale);
    }

    let mut out = String::with_capacity(text.len());
    let mut run_start = 0;
    for (i, c) in text.char_indices() {
        if preserve.contains(&c) {
            out.push_str(&transliterate(&text[run_start..i], locale));
            out.push(c);
            run_start = i + c.len_utf8();
        }
    }
    out.push_str(&transliterate(&text[run_start..], locale));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(transliterate("Hello, World!", None), "Hello, World!");
    }

    #[test]
    fn test_latin_accents() {
        assert_eq!(transliterate("Déjà Vu", None), "Deja Vu");
    }

    #[test]
    fn test_german_locale() {
        assert_eq!(transliterate("Über", Some("de")), "Ueber");
        assert_eq!(transliterate("Über", Some("de-AT")), "Ueber");
        assert_eq!(transliterate("Über", None), "Uber");
    }

    #[test]
    fn test_german_locale_all_caps() {
        assert_eq!(transliterate("ÜBER", Some("de")), "UEBER");
        assert_eq!(transliterate("GRÜN", Some("de")), "GRUEN");
        assert_eq!(transliterate("GRÖSSE Ü", Some("de")), "GROESSE Ue");
        assert_eq!(transliterate("STRAẞE", Some("de")), "STRASSE");
    }

    #[test]
    fn test_norwegian_locale() {
        assert_eq!(transliterate("Smørbrød på", Some("nb_NO")), "Smoerbroed paa");
    }

    #[test]
    fn test_unknown_locale_falls_back() {
        assert_eq!(transliterate("Über", Some("xx")), "Uber");
    }

    #[test]
    fn test_preserving_keeps_characters() {
        assert_eq!(transliterate_preserving("é#ü", None, &['#']), "e#u");
        assert_eq!(transliterate_preserving("café ü", None, &['ü']), "cafe ü");
        assert_eq!(transliterate_preserving("üü", None, &['ü']), "üü");
    }
}
