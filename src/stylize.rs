//! "Thin" unicode text styling for card headings.
//!
//! Maps ASCII letters and digits onto the Mathematical Sans-Serif block so
//! latin headings (club names, mostly) render in the thin style used across
//! the menu. Anything without a mapping, including all cyrillic text, passes
//! through unchanged.

use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    static ref THIN_MAP: HashMap<char, char> = {
        let mut map = HashMap::new();
        // U+1D5A0 MATHEMATICAL SANS-SERIF CAPITAL A
        for (i, c) in ('A'..='Z').enumerate() {
            if let Some(styled) = char::from_u32(0x1D5A0 + i as u32) {
                map.insert(c, styled);
            }
        }
        // U+1D5BA MATHEMATICAL SANS-SERIF SMALL A
        for (i, c) in ('a'..='z').enumerate() {
            if let Some(styled) = char::from_u32(0x1D5BA + i as u32) {
                map.insert(c, styled);
            }
        }
        // U+1D7E2 MATHEMATICAL SANS-SERIF DIGIT ZERO
        for (i, c) in ('0'..='9').enumerate() {
            if let Some(styled) = char::from_u32(0x1D7E2 + i as u32) {
                map.insert(c, styled);
            }
        }
        map
    };
}

/// Restyle a heading with thin sans-serif characters.
pub fn thin(text: &str) -> String {
    text.chars()
        .map(|c| *THIN_MAP.get(&c).unwrap_or(&c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_letters_are_restyled() {
        let styled = thin("Case Club 1");
        assert_ne!(styled, "Case Club 1");
        // Every ASCII alphanumeric must have been replaced
        assert!(!styled.chars().any(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_unmapped_characters_pass_through() {
        assert_eq!(thin("Студклубы: —"), "Студклубы: —");
        assert_eq!(thin(""), "");
    }

    #[test]
    fn test_spacing_and_punctuation_preserved() {
        let styled = thin("A B,C");
        let plain: Vec<char> = styled.chars().collect();
        assert_eq!(plain[1], ' ');
        assert_eq!(plain[3], ',');
    }
}
