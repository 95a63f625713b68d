//! First-name extraction from full passenger names.
//!
//! Passenger names follow the form `Surname, Title. Given names`, with the
//! personal (often maiden) name sometimes carried in parentheses and
//! nicknames in double quotes:
//!
//! ```text
//! Cumings, Mrs. John Bradley (Florence Briggs Thayer)
//! Palsson, Miss. Torborg Danira
//! Andersen, Mr. Albert Karvin ("Kid")
//! ```
//!
//! Extraction tries, in strict priority order: the parenthesized segment,
//! the quoted segment, then the first capitalized token after a matched
//! title. Only one strategy applies per name; a higher tier never falls
//! through to a lower one once its marker is present.

/// Titles that signal a following personal name. A candidate token is
/// compared after stripping one trailing period.
const TITLES: [&str; 6] = ["Miss", "Mrs", "Mme", "Mlle", "Lady", "Countess"];

/// Extracts the most likely personal first name from a full name.
///
/// Returns `None` when no strategy matches: no parentheses, quotes, or
/// comma; a matched title with no capitalized token after it; or an empty
/// parenthesized/quoted segment.
pub(crate) fn extract_first_name(name: &str) -> Option<&str> {
    // 1. parenthesized personal name; an unclosed parenthesis runs to the
    //    end of the string
    if let Some(open) = name.find('(') {
        let rest = &name[open + 1..];
        let inside = rest.find(')').map_or(rest, |close| &rest[..close]);
        return inside.split_whitespace().next();
    }

    // 2. quoted nickname; a lone quote does not count as a segment
    if let Some(open) = name.find('"') {
        let rest = &name[open + 1..];
        if let Some(close) = rest.find('"') {
            return rest[..close].split_whitespace().next();
        }
    }

    // 3. first capitalized token after a recognized title
    let (_, after_comma) = name.split_once(',')?;
    let tokens: Vec<&str> = after_comma.split_whitespace().collect();
    let title_position = tokens
        .iter()
        .position(|&token| TITLES.contains(&token.strip_suffix('.').unwrap_or(token)))?;
    tokens[title_position + 1..]
        .iter()
        .find(|token| token.chars().next().is_some_and(char::is_uppercase))
        .copied()
}
