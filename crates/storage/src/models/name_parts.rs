/// Titles accepted in front of a name, compared lowercase with periods removed.
const TITLES: &[&str] = &[
    "mr", "mrs", "ms", "miss", "mx", "dr", "doctor", "prof", "professor", "rev", "reverend",
    "pastor", "fr", "father", "sister", "brother", "rabbi", "imam", "hon", "honorable", "judge",
    "justice", "sir", "dame", "lady", "lord", "capt", "captain", "col", "colonel", "gen",
    "general", "lt", "lieutenant", "maj", "sgt", "sergeant", "cpl", "officer", "det", "coach",
    "mayor", "sen", "senator", "rep", "gov", "governor", "pres", "aunt", "uncle",
];

/// Generational and professional suffixes, compared lowercase with periods removed.
const SUFFIXES: &[&str] = &[
    "jr", "sr", "ii", "iii", "iv", "v", "2nd", "3rd", "4th", "phd", "md", "dds", "dmd", "dvm",
    "esq", "esquire", "cpa", "rn", "jd", "mba", "llm", "edd", "psyd", "pe", "ret",
];

/// Structured decomposition of a free-text human name.
///
/// Every field may be empty. The value is produced by [`NameParts::parse`],
/// which never fails: malformed input degrades to a best-effort split.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameParts {
    pub prefix: String,
    pub first: String,
    pub middle: String,
    pub last: String,
    pub nickname: String,
    pub suffix: String,
}

impl NameParts {
    /// Splits a full name into its parts.
    ///
    /// Handles leading titles, trailing suffixes, quoted or parenthesised
    /// nicknames, `"Last, First"` ordering and `"First Last, Jr."` suffix
    /// commas. What remains is split by position: first token, last token,
    /// and everything between as the middle name. Hyphenated names are kept
    /// whole.
    ///
    /// # Examples
    ///
    /// ```
    /// use storage::models::NameParts;
    ///
    /// let parts = NameParts::parse("Dr. John Q. Smith Jr.");
    /// assert_eq!(parts.prefix, "Dr.");
    /// assert_eq!(parts.middle, "Q.");
    /// assert_eq!(parts.formal_name(), "Dr. John Smith Jr.");
    /// ```
    pub fn parse(full_name: &str) -> Self {
        let (remainder, nicknames) = extract_nicknames(full_name);

        let pieces: Vec<&str> = remainder
            .split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .collect();

        let mut parts = match pieces.as_slice() {
            [] => Self::default(),
            [single] => Self::from_ordered(single, &[]),
            [main, rest @ ..] if rest.iter().all(|piece| is_suffix_piece(piece)) => {
                Self::from_ordered(main, rest)
            }
            [family, given, rest @ ..] => Self::from_reversed(family, given, rest),
        };

        parts.nickname = nicknames.join(" ");
        parts
    }

    /// `"{prefix} {first} {last} {suffix}"` with empty parts dropped.
    pub fn formal_name(&self) -> String {
        join_non_empty(&[&self.prefix, &self.first, &self.last, &self.suffix])
    }

    /// The nickname when there is one, otherwise the first name.
    pub fn greeting_name(&self) -> String {
        if self.nickname.is_empty() {
            self.first.clone()
        } else {
            self.nickname.clone()
        }
    }

    /// `"{greeting} {last}"` with empty parts dropped.
    pub fn familiar_name(&self) -> String {
        join_non_empty(&[&self.greeting_name(), &self.last])
    }

    // "Prefix First Middle Last Suffix" with optional comma-separated suffixes.
    fn from_ordered(main: &str, extra_suffixes: &[&str]) -> Self {
        let tokens: Vec<&str> = main.split_whitespace().collect();

        let mut start = 0;
        while start < tokens.len() && is_title(tokens[start]) {
            start += 1;
        }

        // A suffix needs a name in front of it; a lone "V" or "Jr" is a name.
        let mut end = tokens.len();
        while end > start + 1 && is_suffix(tokens[end - 1]) {
            end -= 1;
        }

        let prefix = tokens[..start].join(" ");
        let suffix = join_suffixes(&tokens[end..], extra_suffixes);
        let names = &tokens[start..end];

        let mut parts = Self {
            prefix,
            suffix,
            ..Self::default()
        };

        match names {
            [] => {}
            [only] => parts.first = (*only).to_string(),
            [first, middle @ .., last] => {
                parts.first = (*first).to_string();
                parts.middle = middle.join(" ");
                parts.last = (*last).to_string();
            }
        }

        parts
    }

    // "Last, Prefix First Middle, Suffix".
    fn from_reversed(family: &str, given: &str, extra_suffixes: &[&str]) -> Self {
        let family_tokens: Vec<&str> = family.split_whitespace().collect();
        let mut family_end = family_tokens.len();
        while family_end > 1 && is_suffix(family_tokens[family_end - 1]) {
            family_end -= 1;
        }

        let given_tokens: Vec<&str> = given.split_whitespace().collect();
        let mut start = 0;
        while start < given_tokens.len() && is_title(given_tokens[start]) {
            start += 1;
        }

        let mut suffix_tokens: Vec<&str> = family_tokens[family_end..].to_vec();
        let mut given_end = given_tokens.len();
        while given_end > start + 1 && is_suffix(given_tokens[given_end - 1]) {
            given_end -= 1;
        }
        suffix_tokens.extend_from_slice(&given_tokens[given_end..]);

        let names = &given_tokens[start..given_end];

        Self {
            prefix: given_tokens[..start].join(" "),
            first: names.first().map(|s| (*s).to_string()).unwrap_or_default(),
            middle: names.get(1..).map(|rest| rest.join(" ")).unwrap_or_default(),
            last: family_tokens[..family_end].join(" "),
            nickname: String::new(),
            suffix: join_suffixes(&suffix_tokens, extra_suffixes),
        }
    }
}

fn join_non_empty(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn join_suffixes(tokens: &[&str], extra: &[&str]) -> String {
    tokens
        .iter()
        .chain(extra.iter())
        .map(|suffix| suffix.trim())
        .filter(|suffix| !suffix.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn normalize_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| *c != '.' && *c != ',')
        .flat_map(char::to_lowercase)
        .collect()
}

fn is_title(token: &str) -> bool {
    TITLES.contains(&normalize_token(token).as_str())
}

fn is_suffix(token: &str) -> bool {
    SUFFIXES.contains(&normalize_token(token).as_str())
}

fn is_suffix_piece(piece: &str) -> bool {
    piece.split_whitespace().all(is_suffix)
}

/// Pulls nicknames out of a raw name and returns the cleaned remainder.
///
/// Recognised forms, in this order: a single-quoted word standing on its own
/// (`'Bud'`), double-quoted text (straight or typographic quotes) and
/// parenthesised text. Apostrophes inside words ("O'Brien") are left alone.
fn extract_nicknames(raw: &str) -> (String, Vec<String>) {
    let mut nicknames = Vec::new();

    let mut words = Vec::new();
    for word in raw.split_whitespace() {
        let quoted = word.len() > 2 && word.starts_with('\'') && word.ends_with('\'');
        if quoted {
            nicknames.push(word[1..word.len() - 1].to_string());
        } else {
            words.push(word);
        }
    }
    let text = words.join(" ").replace(['\u{201C}', '\u{201D}'], "\"");

    let text = take_delimited(&text, '"', '"', &mut nicknames);
    let text = take_delimited(&text, '(', ')', &mut nicknames);

    (text.split_whitespace().collect::<Vec<_>>().join(" "), nicknames)
}

// Removes every `open ... close` span, collecting non-empty contents. An
// unmatched opening delimiter is dropped on its own.
fn take_delimited(text: &str, open: char, close: char, found: &mut Vec<String>) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(open) {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + open.len_utf8()..];

        match after_open.find(close) {
            Some(end) => {
                let inner = after_open[..end]
                    .trim_matches(|c: char| c == open || c == close || c.is_whitespace());
                if !inner.is_empty() {
                    found.push(inner.split_whitespace().collect::<Vec<_>>().join(" "));
                }
                output.push(' ');
                rest = &after_open[end + close.len_utf8()..];
                if open != close {
                    rest = rest.trim_start_matches(close);
                }
            }
            None => {
                output.push(' ');
                rest = after_open;
            }
        }
    }
    output.push_str(rest);

    if open != close {
        output = output.replace(close, " ");
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(prefix: &str, first: &str, middle: &str, last: &str, nickname: &str, suffix: &str) -> NameParts {
        NameParts {
            prefix: prefix.to_string(),
            first: first.to_string(),
            middle: middle.to_string(),
            last: last.to_string(),
            nickname: nickname.to_string(),
            suffix: suffix.to_string(),
        }
    }

    #[test]
    fn test_empty_input_is_all_empty() {
        assert_eq!(NameParts::parse(""), NameParts::default());
        assert_eq!(NameParts::parse("   \t\n "), NameParts::default());
    }

    #[test]
    fn test_full_name_with_title_and_suffix() {
        let name = NameParts::parse("Dr. John Q. Smith Jr.");
        assert_eq!(name, parts("Dr.", "John", "Q.", "Smith", "", "Jr."));
        assert_eq!(name.formal_name(), "Dr. John Smith Jr.");
        assert_eq!(name.greeting_name(), "John");
        assert_eq!(name.familiar_name(), "John Smith");
    }

    #[test]
    fn test_double_quoted_nickname_and_hyphenated_last_name() {
        let name = NameParts::parse("Mary \"Mo\" Jones-Lee");
        assert_eq!(name, parts("", "Mary", "", "Jones-Lee", "Mo", ""));
        assert_eq!(name.greeting_name(), "Mo");
        assert_eq!(name.familiar_name(), "Mo Jones-Lee");
        assert_eq!(name.formal_name(), "Mary Jones-Lee");
    }

    #[test]
    fn test_single_token_is_first_name() {
        let name = NameParts::parse("Madonna");
        assert_eq!(name, parts("", "Madonna", "", "", "", ""));
        assert_eq!(name.familiar_name(), "Madonna");
        assert_eq!(name.formal_name(), "Madonna");
    }

    #[test]
    fn test_parenthesised_nickname() {
        let name = NameParts::parse("William (Bill) Henry Gates III");
        assert_eq!(name, parts("", "William", "Henry", "Gates", "Bill", "III"));
        assert_eq!(name.familiar_name(), "Bill Gates");
    }

    #[test]
    fn test_single_quoted_nickname_but_not_apostrophe() {
        let name = NameParts::parse("James 'Jim' O'Brien");
        assert_eq!(name, parts("", "James", "", "O'Brien", "Jim", ""));
    }

    #[test]
    fn test_typographic_quotes() {
        let name = NameParts::parse("Robert \u{201C}Bobby\u{201D} Smith");
        assert_eq!(name.nickname, "Bobby");
        assert_eq!(name.first, "Robert");
        assert_eq!(name.last, "Smith");
    }

    #[test]
    fn test_multiple_nicknames_are_joined() {
        let name = NameParts::parse("Elizabeth \"Liz\" (Beth) Taylor");
        assert_eq!(name.nickname, "Liz Beth");
        assert_eq!(name.first, "Elizabeth");
        assert_eq!(name.last, "Taylor");
    }

    #[test]
    fn test_unbalanced_quote_degrades() {
        let name = NameParts::parse("Anna \"Banana Smith");
        assert_eq!(name.first, "Anna");
        assert_eq!(name.middle, "Banana");
        assert_eq!(name.last, "Smith");
        assert_eq!(name.nickname, "");

        let name = NameParts::parse("Anna Smith)");
        assert_eq!(name, parts("", "Anna", "", "Smith", "", ""));
    }

    #[test]
    fn test_multiple_middle_names() {
        let name = NameParts::parse("John Ronald Reuel Tolkien");
        assert_eq!(name, parts("", "John", "Ronald Reuel", "Tolkien", "", ""));
    }

    #[test]
    fn test_title_matching_is_case_insensitive() {
        let name = NameParts::parse("MRS. Jane Doe");
        assert_eq!(name.prefix, "MRS.");
        assert_eq!(name.first, "Jane");

        let name = NameParts::parse("prof Ada Lovelace");
        assert_eq!(name.prefix, "prof");
    }

    #[test]
    fn test_several_titles_and_suffixes() {
        let name = NameParts::parse("Rev. Dr. Martin Luther King Jr. PhD");
        assert_eq!(name.prefix, "Rev. Dr.");
        assert_eq!(name.first, "Martin");
        assert_eq!(name.middle, "Luther");
        assert_eq!(name.last, "King");
        assert_eq!(name.suffix, "Jr., PhD");
    }

    #[test]
    fn test_title_with_single_name_is_first_name() {
        let name = NameParts::parse("Mr. Johnson");
        assert_eq!(name, parts("Mr.", "Johnson", "", "", "", ""));
        assert_eq!(name.formal_name(), "Mr. Johnson");
        assert_eq!(name.familiar_name(), "Johnson");

        let name = NameParts::parse("Sir Elton");
        assert_eq!(name, parts("Sir", "Elton", "", "", "", ""));
    }

    #[test]
    fn test_lone_title_is_prefix() {
        assert_eq!(NameParts::parse("Dr."), parts("Dr.", "", "", "", "", ""));
        assert_eq!(NameParts::parse("Mr"), parts("Mr", "", "", "", "", ""));
        assert_eq!(NameParts::parse("Rev. Dr."), parts("Rev. Dr.", "", "", "", "", ""));

        let name = NameParts::parse("Smith, Dr.");
        assert_eq!(name, parts("Dr.", "", "", "Smith", "", ""));
    }

    #[test]
    fn test_lone_suffix_is_a_name() {
        assert_eq!(NameParts::parse("Jr."), parts("", "Jr.", "", "", "", ""));
    }

    #[test]
    fn test_inner_tokens_are_middle_names() {
        let name = NameParts::parse("Ludwig van Beethoven");
        assert_eq!(name, parts("", "Ludwig", "van", "Beethoven", "", ""));

        let name = NameParts::parse("Maria Anna de la Cruz");
        assert_eq!(name, parts("", "Maria", "Anna de la", "Cruz", "", ""));

        let name = NameParts::parse("Mary Le Smith");
        assert_eq!(name, parts("", "Mary", "Le", "Smith", "", ""));
    }

    #[test]
    fn test_doubled_parentheses_yield_clean_nickname() {
        let name = NameParts::parse("John ((Bob)) Smith");
        assert_eq!(name, parts("", "John", "", "Smith", "Bob", ""));

        let name = NameParts::parse("((Bob)) Smith");
        assert_eq!(name, parts("", "Smith", "", "", "Bob", ""));
    }

    #[test]
    fn test_last_first_comma_format() {
        let name = NameParts::parse("Smith, John Quincy");
        assert_eq!(name, parts("", "John", "Quincy", "Smith", "", ""));

        let name = NameParts::parse("Jones-Lee, Dr. Mary, PhD");
        assert_eq!(name, parts("Dr.", "Mary", "", "Jones-Lee", "", "PhD"));
    }

    #[test]
    fn test_suffix_after_comma() {
        let name = NameParts::parse("John Smith, Jr.");
        assert_eq!(name, parts("", "John", "", "Smith", "", "Jr."));

        let name = NameParts::parse("Jane Doe, MD, PhD");
        assert_eq!(name.suffix, "MD, PhD");
        assert_eq!(name.formal_name(), "Jane Doe MD, PhD");
    }

    #[test]
    fn test_stray_commas_are_ignored() {
        let name = NameParts::parse(", , John Smith ,");
        assert_eq!(name, parts("", "John", "", "Smith", "", ""));
    }

    #[test]
    fn test_whitespace_is_collapsed() {
        let name = NameParts::parse("  Dr.   John    Smith  ");
        assert_eq!(name, parts("Dr.", "John", "", "Smith", "", ""));
        assert_eq!(name.formal_name(), "Dr. John Smith");
    }

    #[test]
    fn test_nickname_only() {
        let name = NameParts::parse("(Buddy)");
        assert_eq!(name, parts("", "", "", "", "Buddy", ""));
        assert_eq!(name.greeting_name(), "Buddy");
        assert_eq!(name.familiar_name(), "Buddy");
        assert_eq!(name.formal_name(), "");
    }

    #[test]
    fn test_parse_is_deterministic() {
        let inputs = [
            "",
            "Dr. John Q. Smith Jr.",
            "Mary \"Mo\" Jones-Lee",
            "Smith, John",
            "((()))\"\"''",
            ",,,",
            "Ünïcödé Nämé (Ñick)",
        ];
        for input in inputs {
            let first = NameParts::parse(input);
            let second = NameParts::parse(input);
            assert_eq!(first, second);
            assert_eq!(first.formal_name(), second.formal_name());
            assert_eq!(first.familiar_name(), second.familiar_name());
            assert_eq!(first.greeting_name(), second.greeting_name());
        }
    }

    #[test]
    fn test_garbage_input_does_not_panic() {
        for input in ["\"", "(", ")", "'", "''", "\"\"", "( )", "'a", "—", ",", "Mr.,"] {
            let name = NameParts::parse(input);
            assert!(!name.formal_name().starts_with(' '));
            assert!(!name.familiar_name().ends_with(' '));
        }

        let name = NameParts::parse("((Bob)) (( Smith");
        assert_eq!(name.nickname, "Bob");
        assert_eq!(name.first, "Smith");
        assert!(!name.first.contains('('));
    }
}
