//! Country flag lookup for cuisine areas, served by flagcdn.com.

pub const DEFAULT_FLAG_WIDTH: u32 = 48;

/// Shown instead of a flag when an area has no known country code
pub const FALLBACK_FLAG_GLYPH: &str = "🌍";

const AREA_TO_FLAG_CODE: &[(&str, &str)] = &[
    ("American", "us"),
    ("British", "gb"),
    ("Canadian", "ca"),
    ("Chinese", "cn"),
    ("Croatian", "hr"),
    ("Dutch", "nl"),
    ("Egyptian", "eg"),
    ("Filipino", "ph"),
    ("French", "fr"),
    ("Greek", "gr"),
    ("Indian", "in"),
    ("Irish", "ie"),
    ("Italian", "it"),
    ("Jamaican", "jm"),
    ("Japanese", "jp"),
    ("Kenyan", "ke"),
    ("Malaysian", "my"),
    ("Mexican", "mx"),
    ("Moroccan", "ma"),
    ("Polish", "pl"),
    ("Portuguese", "pt"),
    ("Russian", "ru"),
    ("Spanish", "es"),
    ("Thai", "th"),
    ("Tunisian", "tn"),
    ("Turkish", "tr"),
    ("Ukrainian", "ua"),
    ("Vietnamese", "vn"),
    ("Norwegian", "no"),
    ("Algerian", "dz"),
    ("Saudi Arabian", "sa"),
    ("Slovakian", "sk"),
    ("Uruguayan", "uy"),
    // The catalog spells it this way
    ("Venezulan", "ve"),
    ("Syrian", "sy"),
    ("Australian", "au"),
    ("Argentinian", "ar"),
];

/// ISO 3166 alpha-2 code (lower case) for an area name as the catalog spells it
pub fn country_code(area: &str) -> Option<&'static str> {
    AREA_TO_FLAG_CODE
        .iter()
        .find(|(name, _)| *name == area)
        .map(|(_, code)| *code)
}

/// flagcdn image URL; images are 4:3 so the height is derived from `width`
pub fn flag_url(code: &str, width: u32) -> String {
    let height = (f64::from(width) * 0.75).round() as u32;
    format!("https://flagcdn.com/{}x{}/{}.png", width, height, code)
}

pub fn area_flag_url(area: &str, width: u32) -> Option<String> {
    country_code(area).map(|code| flag_url(code, width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::areas::AVAILABLE_AREAS;

    #[test]
    fn test_country_code() {
        assert_eq!(country_code("French"), Some("fr"));
        assert_eq!(country_code("Saudi Arabian"), Some("sa"));
        assert_eq!(country_code("french"), None);
        assert_eq!(country_code("Unknown"), None);
    }

    #[test]
    fn test_flag_url_dimensions() {
        assert_eq!(flag_url("fr", 48), "https://flagcdn.com/48x36/fr.png");
        assert_eq!(flag_url("jp", 30), "https://flagcdn.com/30x23/jp.png");
        assert_eq!(flag_url("it", 20), "https://flagcdn.com/20x15/it.png");
    }

    #[test]
    fn test_every_recognized_area_has_a_flag() {
        for area in AVAILABLE_AREAS {
            assert!(country_code(area).is_some(), "{} has no flag", area);
        }
    }

    #[test]
    fn test_area_flag_url_unknown() {
        assert_eq!(area_flag_url("Atlantis", DEFAULT_FLAG_WIDTH), None);
    }
}
