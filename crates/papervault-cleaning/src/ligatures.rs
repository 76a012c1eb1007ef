//! Ligature repair for PDF font-encoding artifacts.

/// Expand common typographic ligatures found in PDFs.
///
/// PDF text extraction often yields the precomposed Unicode glyph
/// (e.g. U+FB01 for "fi") where the source had plain letters; downstream
/// search and embedding both want the expanded form.
pub fn expand_ligatures(text: &str) -> String {
    text.replace('\u{FB00}', "ff")
        .replace('\u{FB01}', "fi")
        .replace('\u{FB02}', "fl")
        .replace('\u{FB03}', "ffi")
        .replace('\u{FB04}', "ffl")
        .replace('\u{FB05}', "ft")
        .replace('\u{FB06}', "st")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_ligatures() {
        assert_eq!(expand_ligatures("\u{FB01}nding \u{FB02}ow"), "finding flow");
        assert_eq!(
            expand_ligatures("e\u{FB03}cient o\u{FB04}ine"),
            "efficient offline"
        );
        assert_eq!(expand_ligatures("no ligatures here"), "no ligatures here");
    }

    #[test]
    fn test_ft_and_st_expand_separately() {
        assert_eq!(expand_ligatures("o\u{FB05}en"), "often");
        assert_eq!(expand_ligatures("fa\u{FB06}er"), "faster");
    }

    #[test]
    fn test_office_expands() {
        assert!(expand_ligatures("of\u{FB01}ce").contains("office"));
    }
}
