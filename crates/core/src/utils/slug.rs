use lazy_static::lazy_static;
use regex::Regex;

use crate::constants::{EMPTY_SLUG_PLACEHOLDER, SLUG_PATH_SEPARATOR};

lazy_static! {
    /// Any run of characters that is neither a letter nor a digit.
    static ref SEPARATOR_RUN_REGEX: Regex =
        Regex::new(r"[^\p{L}\p{N}]+").expect("Invalid regex pattern");
}

/// Turns a display name into a single slug segment.
///
/// Latin diacritics and ligatures are folded to ASCII, everything is
/// lowercased, and each run of non-alphanumeric characters becomes one `-`.
/// Letters without an ASCII form (e.g. CJK) are kept as they are.
///
/// ```
/// use storefront_core::utils::slugify;
///
/// assert_eq!(slugify("Shoes"), "shoes");
/// assert_eq!(slugify("Crème Brûlée"), "creme-brulee");
/// ```
pub fn slugify(name: &str) -> String {
    let mut folded = String::with_capacity(name.len());
    for c in name.to_lowercase().chars() {
        fold_char(c, &mut folded);
    }

    let slug = SEPARATOR_RUN_REGEX.replace_all(&folded, "-");
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        EMPTY_SLUG_PLACEHOLDER.to_string()
    } else {
        slug.to_string()
    }
}

/// Appends a child segment to its parent's slug path.
pub fn join_slug_path(parent_slug: &str, segment: &str) -> String {
    let parent = parent_slug.trim_end_matches(SLUG_PATH_SEPARATOR);
    if parent.is_empty() {
        return segment.to_string();
    }
    format!("{}{}{}", parent, SLUG_PATH_SEPARATOR, segment)
}

fn fold_char(c: char, out: &mut String) {
    match c {
        // Apostrophes join words instead of splitting them
        '\'' | '\u{2019}' => {}
        // Combining diacritical marks
        '\u{0300}'..='\u{036F}' => {}
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => out.push('a'),
        'æ' => out.push_str("ae"),
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => out.push('c'),
        'ď' | 'đ' | 'ð' => out.push('d'),
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => out.push('e'),
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => out.push('g'),
        'ĥ' | 'ħ' => out.push('h'),
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => out.push('i'),
        'ĵ' => out.push('j'),
        'ķ' => out.push('k'),
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => out.push('l'),
        'ñ' | 'ń' | 'ņ' | 'ň' => out.push('n'),
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => out.push('o'),
        'œ' => out.push_str("oe"),
        'ŕ' | 'ŗ' | 'ř' => out.push('r'),
        'ś' | 'ŝ' | 'ş' | 'š' | 'ș' => out.push('s'),
        'ß' => out.push_str("ss"),
        'ţ' | 'ť' | 'ŧ' | 'ț' => out.push('t'),
        'þ' => out.push_str("th"),
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => out.push('u'),
        'ŵ' => out.push('w'),
        'ý' | 'ÿ' | 'ŷ' => out.push('y'),
        'ź' | 'ż' | 'ž' => out.push('z'),
        other => out.push(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_plain_names() {
        assert_eq!(slugify("Shoes"), "shoes");
        assert_eq!(slugify("T-Shirts & Tops"), "t-shirts-tops");
        assert_eq!(slugify("  Summer   Sale 2024  "), "summer-sale-2024");
    }

    #[test]
    fn test_slugify_folds_latin_diacritics() {
        assert_eq!(slugify("Café au lait"), "cafe-au-lait");
        assert_eq!(slugify("Straße"), "strasse");
        assert_eq!(slugify("Łódź"), "lodz");
        assert_eq!(slugify("Ærø"), "aero");
    }

    #[test]
    fn test_slugify_drops_apostrophes() {
        assert_eq!(slugify("Men's Shoes"), "mens-shoes");
        assert_eq!(slugify("Kid\u{2019}s corner"), "kids-corner");
    }

    #[test]
    fn test_slugify_keeps_non_latin_letters() {
        assert_eq!(slugify("靴 Shoes"), "靴-shoes");
    }

    #[test]
    fn test_slugify_never_returns_empty() {
        assert_eq!(slugify("!!!"), EMPTY_SLUG_PLACEHOLDER);
        assert_eq!(slugify("--"), EMPTY_SLUG_PLACEHOLDER);
    }

    #[test]
    fn test_join_slug_path() {
        assert_eq!(join_slug_path("category", "shoes"), "category/shoes");
        assert_eq!(join_slug_path("category/", "shoes"), "category/shoes");
        assert_eq!(join_slug_path("", "shoes"), "shoes");
    }
}
