//! Turns literal search terms into regular expressions.
//!
//! The transforms always run in the same order: [escape], then
//! [fold_accents] unless accents must match exactly, then [anchor_whole]
//! for whole-value matches. [compose] applies that pipeline.

use crate::errors::RecipeResult;
use crate::filter::Pattern;
use crate::query::QueryOptions;

const VOWEL_VARIANTS: [(char, [char; 5]); 10] = [
    ('a', ['a', 'á', 'à', 'ä', 'â']),
    ('e', ['e', 'é', 'è', 'ë', 'ê']),
    ('i', ['i', 'í', 'ì', 'ï', 'î']),
    ('o', ['o', 'ó', 'ò', 'ö', 'ô']),
    ('u', ['u', 'ú', 'ù', 'ü', 'û']),
    ('A', ['A', 'Á', 'À', 'Ä', 'Â']),
    ('E', ['E', 'É', 'È', 'Ë', 'Ê']),
    ('I', ['I', 'Í', 'Ì', 'Ï', 'Î']),
    ('O', ['O', 'Ó', 'Ò', 'Ö', 'Ô']),
    ('U', ['U', 'Ú', 'Ù', 'Ü', 'Û']),
];

/// Escapes every regex metacharacter so `value` matches only itself.
pub fn escape(value: &str) -> String {
    regex::escape(value)
}

/// Replaces each vowel of an escaped pattern with an alternation of the
/// vowel and its accented variants, so `a` becomes `(a|á|à|ä|â)`.
///
/// Accented vowels in the input fold to the same group as their base vowel,
/// which makes `Márgarita` and `Margarita` find each other. Escape sequences
/// never contain vowels, so they pass through untouched.
pub fn fold_accents(value: &str) -> String {
    let mut folded = String::with_capacity(value.len() * 4);
    for ch in value.chars() {
        match variants_of(ch) {
            Some(variants) => {
                folded.push('(');
                for (index, variant) in variants.iter().enumerate() {
                    if index > 0 {
                        folded.push('|');
                    }
                    folded.push(*variant);
                }
                folded.push(')');
            }
            None => folded.push(ch),
        }
    }
    folded
}

/// Anchors a pattern so it must cover the whole value.
pub fn anchor_whole(value: &str) -> String {
    format!("^{}$", value)
}

/// Builds the [Pattern] for a literal search term.
pub fn compose(value: &str, options: &QueryOptions) -> RecipeResult<Pattern> {
    let mut source = escape(value);
    if !options.is_accent_sensitive() {
        source = fold_accents(&source);
    }
    if options.is_match_whole() {
        source = anchor_whole(&source);
    }

    let pattern = Pattern::new(&source, options.is_case_insensitive())?;
    log::debug!("Composed pattern {} from '{}'", pattern, value);
    Ok(pattern)
}

fn variants_of(ch: char) -> Option<&'static [char; 5]> {
    VOWEL_VARIANTS
        .iter()
        .find(|(_, variants)| variants.contains(&ch))
        .map(|(_, variants)| variants)
}
