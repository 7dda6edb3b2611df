//! The named HTML character reference table.
//!
//! A curated subset of the HTML5 named character reference list: the
//! common HTML4 entities wikitext actually uses, plus the accented
//! letters, dashes, and symbols that show up in running prose. Stored as
//! a `phf::Map` built at compile time instead of a `match` arm per name.

/// Looks up a named character reference (without the leading `&` or
/// trailing `;`) and returns its decoded scalar value, if known.
pub(crate) fn lookup(name: &str) -> Option<char> {
    NAMED_ENTITIES.get(name).copied()
}

static NAMED_ENTITIES: phf::Map<&'static str, char> = phf::phf_map! {
    "amp" => '&',
    "lt" => '<',
    "gt" => '>',
    "quot" => '"',
    "apos" => '\'',
    "nbsp" => '\u{00A0}',
    "iexcl" => '¡',
    "cent" => '¢',
    "pound" => '£',
    "curren" => '¤',
    "yen" => '¥',
    "sect" => '§',
    "copy" => '©',
    "ordf" => 'ª',
    "laquo" => '«',
    "reg" => '®',
    "deg" => '°',
    "plusmn" => '±',
    "sup2" => '²',
    "sup3" => '³',
    "micro" => 'µ',
    "para" => '¶',
    "middot" => '·',
    "sup1" => '¹',
    "ordm" => 'º',
    "raquo" => '»',
    "frac14" => '¼',
    "frac12" => '½',
    "frac34" => '¾',
    "iquest" => '¿',
    "times" => '×',
    "divide" => '÷',
    "Agrave" => 'À',
    "Aacute" => 'Á',
    "Acirc" => 'Â',
    "Atilde" => 'Ã',
    "Auml" => 'Ä',
    "Aring" => 'Å',
    "AElig" => 'Æ',
    "Ccedil" => 'Ç',
    "Egrave" => 'È',
    "Eacute" => 'É',
    "Ecirc" => 'Ê',
    "Euml" => 'Ë',
    "Igrave" => 'Ì',
    "Iacute" => 'Í',
    "Icirc" => 'Î',
    "Iuml" => 'Ï',
    "Ntilde" => 'Ñ',
    "Ograve" => 'Ò',
    "Oacute" => 'Ó',
    "Ocirc" => 'Ô',
    "Otilde" => 'Õ',
    "Ouml" => 'Ö',
    "Oslash" => 'Ø',
    "Ugrave" => 'Ù',
    "Uacute" => 'Ú',
    "Ucirc" => 'Û',
    "Uuml" => 'Ü',
    "Yacute" => 'Ý',
    "szlig" => 'ß',
    "agrave" => 'à',
    "aacute" => 'á',
    "acirc" => 'â',
    "atilde" => 'ã',
    "auml" => 'ä',
    "aring" => 'å',
    "aelig" => 'æ',
    "ccedil" => 'ç',
    "egrave" => 'è',
    "eacute" => 'é',
    "ecirc" => 'ê',
    "euml" => 'ë',
    "igrave" => 'ì',
    "iacute" => 'í',
    "icirc" => 'î',
    "iuml" => 'ï',
    "ntilde" => 'ñ',
    "ograve" => 'ò',
    "oacute" => 'ó',
    "ocirc" => 'ô',
    "otilde" => 'õ',
    "ouml" => 'ö',
    "oslash" => 'ø',
    "ugrave" => 'ù',
    "uacute" => 'ú',
    "ucirc" => 'û',
    "uuml" => 'ü',
    "yacute" => 'ý',
    "yuml" => 'ÿ',
    "ndash" => '\u{2013}',
    "mdash" => '\u{2014}',
    "lsquo" => '\u{2018}',
    "rsquo" => '\u{2019}',
    "sbquo" => '\u{201A}',
    "ldquo" => '\u{201C}',
    "rdquo" => '\u{201D}',
    "bdquo" => '\u{201E}',
    "dagger" => '\u{2020}',
    "Dagger" => '\u{2021}',
    "bull" => '\u{2022}',
    "hellip" => '\u{2026}',
    "permil" => '\u{2030}',
    "prime" => '\u{2032}',
    "Prime" => '\u{2033}',
    "euro" => '\u{20AC}',
    "trade" => '\u{2122}',
    "larr" => '\u{2190}',
    "uarr" => '\u{2191}',
    "rarr" => '\u{2192}',
    "darr" => '\u{2193}',
    "alpha" => 'α',
    "beta" => 'β',
    "gamma" => 'γ',
    "delta" => 'δ',
    "pi" => 'π',
    "sigma" => 'σ',
    "omega" => 'ω',
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_common_entities() {
        assert_eq!(lookup("amp"), Some('&'));
        assert_eq!(lookup("nbsp"), Some('\u{00A0}'));
        assert_eq!(lookup("mdash"), Some('\u{2014}'));
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(lookup("notarealentity"), None);
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_eq!(lookup("AMP"), None);
        assert_ne!(lookup("Uuml"), lookup("uuml"));
    }
}
