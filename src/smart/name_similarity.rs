//! Name similarity between a candidate and expected-slot name hints.
//!
//! Names are split into lowercase words on camel humps, digit runs and
//! separators (`userName`, `user_name` and `USER_NAME` all become
//! `["user", "name"]`). Similarity grows with the share of distinct words the
//! two names have in common, with a bonus when the last words agree since the
//! last word usually carries the noun (`selectedUser` vs `user`).
//!
//! Only whole words are compared. Shared substrings inside a word do not
//! count, so `username` and `userName` have nothing in common.

use rustc_hash::FxHashSet;

use super::ExpectedInfo;

/// Score for two names sharing all of their words.
const SHARED_WORDS_WEIGHT: u32 = 100;
/// Added when both names end in the same word.
const LAST_WORD_BONUS: u32 = 50;

/// Best similarity of `name` against the name hints of `infos`.
///
/// Slots without a name hint are ignored; `0` means nothing in common.
pub fn name_similarity<'i, I>(name: &str, infos: I) -> u32
where
    I: IntoIterator<Item = &'i ExpectedInfo>,
{
    let words = split_words(name);
    if words.is_empty() {
        return 0;
    }
    infos
        .into_iter()
        .filter_map(|info| info.expected_name.as_deref())
        .map(|expected| similarity(&words, &split_words(expected)))
        .max()
        .unwrap_or(0)
}

fn similarity(words: &[String], expected: &[String]) -> u32 {
    let expected_set: FxHashSet<&str> = expected.iter().map(String::as_str).collect();
    let shared: FxHashSet<&str> = words
        .iter()
        .map(String::as_str)
        .filter(|word| expected_set.contains(word))
        .collect();
    if shared.is_empty() {
        return 0;
    }

    let longest = words.len().max(expected.len()) as u32;
    let mut score = shared.len() as u32 * SHARED_WORDS_WEIGHT / longest;
    if words.last() == expected.last() {
        score += LAST_WORD_BONUS;
    }
    score
}

/// Split an identifier into lowercase words.
pub fn split_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = (c.is_uppercase() && prev.is_lowercase())
                || (c.is_uppercase() && prev.is_uppercase() && next_is_lower)
                || (c.is_ascii_digit() != prev.is_ascii_digit());
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.extend(c.to_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}
