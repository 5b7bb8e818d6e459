/// Lowercases `name` and collapses every run of whitespace into a single `-`.
///
/// This is the identifier used in `/grants/<slug>` locations. Punctuation is
/// kept as is, so two names differing only in spacing share a slug.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for character in name.chars() {
        if is_separator(character) {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.extend(character.to_lowercase());
            in_whitespace = false;
        }
    }

    slug
}

/// The characters matched by `\s` in browser regular expressions, which
/// differ from Unicode `White_Space` by including U+FEFF and leaving out U+0085.
fn is_separator(character: char) -> bool {
    character == '\u{feff}' || (character.is_whitespace() && character != '\u{85}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_runs_collapse_into_one_dash() {
        assert_eq!(slugify("Creative  Capital\tAward"), "creative-capital-award");
        assert_eq!(slugify("\u{a0}Arts\u{3000}Fund "), "-arts-fund-");
    }

    #[test]
    fn byte_order_mark_separates_words() {
        assert_eq!(slugify("Arts\u{feff}Fund"), "arts-fund");
    }

    #[test]
    fn next_line_is_kept_in_the_slug() {
        assert_eq!(slugify("Arts\u{85}Fund"), "arts\u{85}fund");
    }
}
