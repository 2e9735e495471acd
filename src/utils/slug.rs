/// Derive a URL slug from a display name: lowercase ASCII alphanumerics,
/// any other run of characters collapsed to a single hyphen.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("Corporate Branding"), "corporate-branding");
        assert_eq!(slugify("T-Shirts & Apparel"), "t-shirts-apparel");
    }

    #[test]
    fn collapses_and_trims_separators() {
        assert_eq!(slugify("  Large   Format  Printing "), "large-format-printing");
        assert_eq!(slugify("---Mugs---"), "mugs");
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(slugify("A4 Flyers (Full Colour)"), "a4-flyers-full-colour");
    }
}
