//! String helpers
//!
//! Everything here works on `char`s (Unicode scalar values). Grapheme
//! clusters made of several scalars are not kept together, so reversing or
//! truncating text with combining marks can split them.

/// Uppercases the first character and lowercases the rest
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

/// Case-insensitive palindrome check over ASCII letters and digits
///
/// Everything else (spaces, punctuation, non-ASCII letters) is ignored, so
/// an empty or all-punctuation string counts as a palindrome.
pub fn is_palindrome(s: &str) -> bool {
    let cleaned: String = s
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    cleaned == reverse_string(&cleaned)
}

/// Number of whitespace-separated words
pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}

/// Shortens `s` to at most `max_len` characters, ending in `...`
///
/// Strings that already fit are returned unchanged. Otherwise the first
/// `max_len - 3` characters are kept and the ellipsis brings the result back
/// to exactly `max_len` characters. When `max_len < 3` only the ellipsis is
/// left.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }

    let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Lowercases `s`, then capitalizes each space-separated word
///
/// Only the ASCII space separates words; runs of spaces are preserved.
pub fn to_title_case(s: &str) -> String {
    s.to_lowercase()
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn remove_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Non-overlapping occurrences of `sub` in `s`, scanning left to right
///
/// An empty `sub` never matches.
pub fn count_occurrences(s: &str, sub: &str) -> usize {
    if sub.is_empty() {
        return 0;
    }
    s.matches(sub).count()
}

/// True if `s` is non-empty and made only of ASCII digits
pub fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Converts `camelCase` to `kebab-case`
///
/// A hyphen goes between a lowercase letter or digit and the uppercase
/// letter right after it; then the whole string is lowercased. Runs of
/// capitals are not split, so `XMLHttpRequest` becomes `xmlhttp-request`.
pub fn camel_to_kebab(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;

    for c in s.chars() {
        let at_boundary = prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
            && c.is_ascii_uppercase();
        if at_boundary {
            out.push('-');
        }
        out.push(c);
        prev = Some(c);
    }

    out.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("hello"), "Hello");
        assert_eq!(capitalize("world"), "World");
        assert_eq!(capitalize("Hello"), "Hello");
        assert_eq!(capitalize("hELLO"), "Hello");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn capitalize_non_ascii() {
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize("ß"), "SS");
    }

    #[test]
    fn reverse() {
        assert_eq!(reverse_string("hello"), "olleh");
        assert_eq!(reverse_string("world"), "dlrow");
        assert_eq!(reverse_string(""), "");
        assert_eq!(reverse_string("a"), "a");
        assert_eq!(reverse_string("racecar"), "racecar");
        assert_eq!(reverse_string("añb"), "bña");
    }

    #[test]
    fn palindromes() {
        assert!(is_palindrome("racecar"));
        assert!(is_palindrome("RaceCar"));
        assert!(is_palindrome("A man a plan a canal Panama"));
        assert!(is_palindrome("Was it a car or a cat I saw"));
        assert!(is_palindrome("a"));
        assert!(is_palindrome(""));
        assert!(is_palindrome("!!!"));
    }

    #[test]
    fn non_palindromes() {
        assert!(!is_palindrome("hello"));
        assert!(!is_palindrome("world"));
        assert!(!is_palindrome("12a"));
    }

    #[test]
    fn counts_words() {
        assert_eq!(word_count("Hello world"), 2);
        assert_eq!(word_count("The quick brown fox"), 4);
        assert_eq!(word_count("Hello   world"), 2);
        assert_eq!(word_count("  leading and trailing\t"), 3);
        assert_eq!(word_count("hello"), 1);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
    }

    #[test]
    fn truncate_long_strings() {
        assert_eq!(truncate("This is a very long string", 10), "This is...");
        assert_eq!(truncate("hello world", 5), "he...");
        assert_eq!(truncate("hello world", 5).chars().count(), 5);
    }

    #[test]
    fn truncate_leaves_short_strings() {
        assert_eq!(truncate("Short", 10), "Short");
        assert_eq!(truncate("Exactly", 7), "Exactly");
        assert_eq!(truncate("", 5), "");
    }

    #[test]
    fn truncate_tiny_limits() {
        assert_eq!(truncate("hello", 2), "...");
        assert_eq!(truncate("hello", 0), "...");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
    }

    #[test]
    fn title_case() {
        assert_eq!(to_title_case("hello world"), "Hello World");
        assert_eq!(to_title_case("the quick brown fox"), "The Quick Brown Fox");
        assert_eq!(to_title_case("Hello World"), "Hello World");
        assert_eq!(to_title_case("HELLO WORLD"), "Hello World");
        assert_eq!(to_title_case("hello"), "Hello");
        assert_eq!(to_title_case("two  spaces"), "Two  Spaces");
        assert_eq!(to_title_case(""), "");
    }

    #[test]
    fn strips_whitespace() {
        assert_eq!(remove_whitespace("hello world"), "helloworld");
        assert_eq!(remove_whitespace("a b c d"), "abcd");
        assert_eq!(remove_whitespace("hello   world"), "helloworld");
        assert_eq!(remove_whitespace("hello\tworld\n"), "helloworld");
        assert_eq!(remove_whitespace("  hello   world  "), "helloworld");
        assert_eq!(remove_whitespace("helloworld"), "helloworld");
        assert_eq!(remove_whitespace(""), "");
    }

    #[test]
    fn occurrences() {
        assert_eq!(count_occurrences("hello world", "o"), 2);
        assert_eq!(count_occurrences("banana", "na"), 2);
        assert_eq!(count_occurrences("hello", "x"), 0);
        assert_eq!(count_occurrences("", "a"), 0);
    }

    #[test]
    fn occurrences_do_not_overlap() {
        assert_eq!(count_occurrences("aaa", "aa"), 1);
        assert_eq!(count_occurrences("aaaa", "aa"), 2);
    }

    #[test]
    fn occurrences_of_empty_substring_is_zero() {
        assert_eq!(count_occurrences("hello", ""), 0);
        assert_eq!(count_occurrences("", ""), 0);
    }

    #[test]
    fn numeric_strings() {
        assert!(is_numeric("123"));
        assert!(is_numeric("0"));
        assert!(is_numeric("999"));
        assert!(is_numeric("12345"));
    }

    #[test]
    fn non_numeric_strings() {
        assert!(!is_numeric("abc"));
        assert!(!is_numeric("12a"));
        assert!(!is_numeric("1.23"));
        assert!(!is_numeric("12 34"));
        assert!(!is_numeric("-1"));
        assert!(!is_numeric("١٢٣")); // Arabic-Indic digits
        assert!(!is_numeric(""));
    }

    #[test]
    fn camel_to_kebab_case() {
        assert_eq!(camel_to_kebab("helloWorld"), "hello-world");
        assert_eq!(camel_to_kebab("myVariableName"), "my-variable-name");
        assert_eq!(camel_to_kebab("camelCaseString"), "camel-case-string");
        assert_eq!(camel_to_kebab("version2Beta"), "version2-beta");
        assert_eq!(camel_to_kebab("hello"), "hello");
        assert_eq!(camel_to_kebab("hello-world"), "hello-world");
        assert_eq!(camel_to_kebab(""), "");
    }

    #[test]
    fn camel_to_kebab_keeps_capital_runs_together() {
        assert_eq!(camel_to_kebab("XMLHttpRequest"), "xmlhttp-request");
        assert_eq!(camel_to_kebab("HTTPSConnection"), "httpsconnection");
    }
}
