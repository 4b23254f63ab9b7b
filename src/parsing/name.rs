//! Free-text name cleanup.

/// Cleans a name or city field.
///
/// Trims, collapses every whitespace run (tabs, newlines, no-break spaces)
/// into a single space and title-cases the result: a letter is uppercased
/// when it starts a word and lowercased otherwise. Anything that is not a
/// letter (space, hyphen, apostrophe, digit) starts a new word, so compound
/// names come out as `Jean-Pierre` or `D'Artagnan`.
///
/// Applying it twice gives the same result as applying it once.
///
/// ```
/// use fichepack::parsing::clean_name;
///
/// assert_eq!(clean_name("  jean-PIERRE \t de\u{a0}la  fontaine "), "Jean-Pierre De La Fontaine");
/// assert_eq!(clean_name(""), "");
/// ```
pub fn clean_name(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for (i, word) in input.split_whitespace().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        for ch in word.chars() {
            if !ch.is_alphabetic() {
                out.push(ch);
            } else if follows_letter(&out) {
                ch.to_lowercase().for_each(|c| push_cased(&mut out, c));
            } else {
                ch.to_uppercase().for_each(|c| push_cased(&mut out, c));
            }
        }
    }

    out
}

fn follows_letter(out: &str) -> bool {
    out.chars().next_back().is_some_and(char::is_alphabetic)
}

/// Pushes one char of a case mapping. Mappings can expand to several chars
/// (`ß` -> `SS`); the tail is cased against what precedes it.
fn push_cased(out: &mut String, c: char) {
    if c.is_alphabetic() && follows_letter(out) {
        out.extend(c.to_lowercase());
    } else {
        out.push(c);
    }
}
