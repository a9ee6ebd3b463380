//! Predicates over a single word.
//!
//! All checks are case-insensitive. Letter-based checks only look at ASCII
//! `a-z` after lowercasing. Run checks need the letters to be adjacent in the
//! word itself, so `-`, `'` or `&` break a run.

use crate::definitions::Suffix;

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Lowercased ASCII letters of `word`, in order.
fn letters(word: &str) -> Vec<char> {
    word.chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

/// Whether the letters read the same backwards. Empty and one-letter words count.
pub fn is_palindrome(word: &str) -> bool {
    let letters = letters(word);
    letters.iter().eq(letters.iter().rev())
}

/// First and last character match. Needs at least two characters.
pub fn is_start_end_same(word: &str) -> bool {
    let chars: Vec<char> = word.to_lowercase().chars().collect();
    match (chars.first(), chars.last()) {
        (Some(first), Some(last)) if chars.len() >= 2 => first == last,
        _ => false,
    }
}

/// Whether some `len` adjacent characters are all letters and satisfy `pred`.
fn any_letter_window(word: &str, len: usize, pred: impl Fn(&[char]) -> bool) -> bool {
    let chars: Vec<char> = word.chars().map(|c| c.to_ascii_lowercase()).collect();
    chars
        .windows(len)
        .filter(|w| w.iter().all(char::is_ascii_lowercase))
        .any(pred)
}

fn has_run(word: &str, len: usize) -> bool {
    any_letter_window(word, len, |w| w.iter().all(|c| *c == w[0]))
}

pub fn has_double_letters(word: &str) -> bool {
    has_run(word, 2)
}

pub fn has_triple_letters(word: &str) -> bool {
    has_run(word, 3)
}

/// Three adjacent letters in strictly increasing alphabetical order.
pub fn has_alphabetical_sequence(word: &str) -> bool {
    any_letter_window(word, 3, |w| w[0] < w[1] && w[1] < w[2])
}

/// Every letter is a vowel. False for words without letters.
pub fn is_all_vowels(word: &str) -> bool {
    let letters = letters(word);
    !letters.is_empty() && letters.iter().all(|c| is_vowel(*c))
}

/// No letter is a vowel. False for words without letters.
pub fn is_all_consonants(word: &str) -> bool {
    let letters = letters(word);
    !letters.is_empty() && letters.iter().all(|c| !is_vowel(*c))
}

pub fn vowel_count(word: &str) -> usize {
    letters(word).into_iter().filter(|c| is_vowel(*c)).count()
}

pub fn consonant_count(word: &str) -> usize {
    letters(word).into_iter().filter(|c| !is_vowel(*c)).count()
}

/// Approximate syllable count using vowel groups.
///
/// `y` counts as a vowel inside groups, a trailing silent `e`/`es`/`ed` is
/// dropped (but not `-le`), and any word with letters has at least one
/// syllable.
pub fn count_syllables(word: &str) -> usize {
    let letters = letters(word);
    if letters.is_empty() {
        return 0;
    }
    if letters.len() <= 3 {
        return 1;
    }

    let mut end = letters.len();
    let tail: String = letters[letters.len() - 2..].iter().collect();
    if tail == "es" || tail == "ed" {
        end -= 2;
    } else if letters[end - 1] == 'e' && letters[end - 2] != 'l' {
        end -= 1;
    }

    let mut groups = 0;
    let mut in_group = false;
    for c in &letters[..end] {
        let vowelish = is_vowel(*c) || *c == 'y';
        if vowelish && !in_group {
            groups += 1;
        }
        in_group = vowelish;
    }

    groups.max(1)
}

/// Every tracked suffix the word ends with.
pub fn word_endings(word: &str) -> Vec<Suffix> {
    let lower = word.to_lowercase();
    Suffix::ALL
        .iter()
        .copied()
        .filter(|suffix| lower.ends_with(suffix.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case("racecar", true)]
    #[test_case("Level", true)]
    #[test_case("a", true)]
    #[test_case("", true)]
    #[test_case("hello", false)]
    #[test_case("noon", true)]
    fn test_is_palindrome(word: &str, expected: bool) {
        assert_eq!(is_palindrome(word), expected);
    }

    #[test_case("level", true)]
    #[test_case("Trust", true)]
    #[test_case("a", false)]
    #[test_case("", false)]
    #[test_case("hello", false)]
    fn test_is_start_end_same(word: &str, expected: bool) {
        assert_eq!(is_start_end_same(word), expected);
    }

    #[test_case("balloon", true, false)]
    #[test_case("brrr", true, true)]
    #[test_case("cat", false, false)]
    #[test_case("aA", true, false)]
    #[test_case("re-enter", false, false)]
    #[test_case("go-on", false, false)]
    #[test_case("bee-eel", true, false)]
    fn test_letter_runs(word: &str, double: bool, triple: bool) {
        assert_eq!(has_double_letters(word), double);
        assert_eq!(has_triple_letters(word), triple);
    }

    #[test_case("abcdef", true)]
    #[test_case("almost", true)]
    #[test_case("first", true)]
    #[test_case("zebra", false)]
    #[test_case("ab", false)]
    #[test_case("aab", false)]
    #[test_case("x-a-b-c", false)]
    #[test_case("PB&J", false)]
    #[test_case("Abc's", true)]
    fn test_has_alphabetical_sequence(word: &str, expected: bool) {
        assert_eq!(has_alphabetical_sequence(word), expected);
    }

    #[test]
    fn test_vowel_consonant_classification() {
        assert!(is_all_vowels("eau"));
        assert!(!is_all_vowels("beau"));
        assert!(is_all_consonants("rhythm"));
        assert!(is_all_consonants("crwth"));
        assert!(!is_all_consonants("rhyme"));
        assert!(!is_all_vowels(""));
        assert!(!is_all_consonants("-"));
    }

    #[test]
    fn test_counts_ignore_non_letters() {
        assert_eq!(vowel_count("self-aware"), 4);
        assert_eq!(consonant_count("self-aware"), 5);
        assert_eq!(vowel_count("123"), 0);
    }

    #[test_case("cat", 1)]
    #[test_case("table", 2)]
    #[test_case("serendipity", 5)]
    #[test_case("jumped", 1)]
    #[test_case("rhythm", 1)]
    #[test_case("", 0)]
    fn test_count_syllables(word: &str, expected: usize) {
        assert_eq!(count_syllables(word), expected);
    }

    #[test]
    fn test_word_endings() {
        assert_eq!(word_endings("selfless"), vec![Suffix::Less]);
        assert_eq!(word_endings("running"), vec![Suffix::Ing]);
        assert_eq!(word_endings("Kindness"), vec![Suffix::Ness]);
        assert!(word_endings("d").is_empty());
        assert!(word_endings("cat").is_empty());
    }

    proptest! {
        #[test]
        fn test_palindrome_symmetry(word in "[a-zA-Z]{0,12}") {
            let reversed: String = word.chars().rev().collect();
            prop_assert_eq!(is_palindrome(&word), is_palindrome(&reversed));
        }

        #[test]
        fn test_vowels_plus_consonants_cover_letters(word in "[a-zA-Z' -]{0,16}") {
            let letters = word.chars().filter(|c| c.is_ascii_alphabetic()).count();
            prop_assert_eq!(vowel_count(&word) + consonant_count(&word), letters);
        }

        #[test]
        fn test_triple_implies_double(word in "[a-c]{0,10}") {
            if has_triple_letters(&word) {
                prop_assert!(has_double_letters(&word));
            }
        }
    }
}
