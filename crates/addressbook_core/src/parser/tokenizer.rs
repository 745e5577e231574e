//! Prefix argument tokenizer.
//!
//! Splits `1 t/Bob d/Bob owes $100` into a preamble (`1`) and prefixed values.
//! A prefix only counts at the start of input or after whitespace, so values
//! such as `and/or` stay intact. Unknown prefixes are kept as plain text.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s)([A-Za-z]+/)").expect("valid prefix regex"));

/// Claim title prefix.
pub const PREFIX_TITLE: &str = "t/";
/// Claim description prefix.
pub const PREFIX_DESCRIPTION: &str = "d/";

/// Tokenized arguments of one command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<String, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first recognized prefix, trimmed.
    pub fn preamble(&self) -> &str {
        self.preamble.as_str()
    }

    /// Last value given for `prefix`.
    pub fn value(&self, prefix: &str) -> Option<&str> {
        self.values
            .get(prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in input order.
    pub fn all_values(&self, prefix: &str) -> &[String] {
        self.values.get(prefix).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Tokenizes `args` using only the listed `prefixes`.
pub fn tokenize(args: &str, prefixes: &[&str]) -> ArgumentMultimap {
    let marks = PREFIX_RE
        .captures_iter(args)
        .filter_map(|caps| caps.get(1))
        .filter(|prefix| prefixes.contains(&prefix.as_str()))
        .collect::<Vec<_>>();

    let preamble_end = marks.first().map_or(args.len(), |mark| mark.start());
    let mut multimap = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (position, mark) in marks.iter().enumerate() {
        let value_end = marks
            .get(position + 1)
            .map_or(args.len(), |next| next.start());
        multimap
            .values
            .entry(mark.as_str().to_string())
            .or_default()
            .push(args[mark.end()..value_end].trim().to_string());
    }

    multimap
}

#[cfg(test)]
mod tests {
    use super::{tokenize, PREFIX_DESCRIPTION, PREFIX_TITLE};

    const PREFIXES: &[&str] = &[PREFIX_TITLE, PREFIX_DESCRIPTION];

    #[test]
    fn splits_preamble_and_prefixed_values() {
        let tokens = tokenize(" 1 t/Bob d/Bob owes $100", PREFIXES);
        assert_eq!(tokens.preamble(), "1");
        assert_eq!(tokens.value(PREFIX_TITLE), Some("Bob"));
        assert_eq!(tokens.value(PREFIX_DESCRIPTION), Some("Bob owes $100"));
    }

    #[test]
    fn embedded_slashes_and_unknown_prefixes_stay_in_values() {
        let tokens = tokenize("2 t/Trip d/taxi and/or bus x/ignored", PREFIXES);
        assert_eq!(
            tokens.value(PREFIX_DESCRIPTION),
            Some("taxi and/or bus x/ignored")
        );
    }

    #[test]
    fn repeated_prefix_keeps_every_value_and_last_wins() {
        let tokens = tokenize("1 t/First t/Second", PREFIXES);
        assert_eq!(tokens.all_values(PREFIX_TITLE), ["First", "Second"]);
        assert_eq!(tokens.value(PREFIX_TITLE), Some("Second"));
        assert_eq!(tokens.value(PREFIX_DESCRIPTION), None);
    }
}
