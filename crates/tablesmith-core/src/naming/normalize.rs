/// Letter prefixed to identifiers that would otherwise start with a digit.
pub const PLACEHOLDER: char = 'N';

/// Characters that are never legal in a generated identifier.
const BLACKLIST: &[char] = &[
    '-', '.', ',', ';', ':', '!', '?', '\'', '"', '`', '~', '$', '%', '^', '*', '+', '=', '|',
    '\\', '/', '(', ')', '[', ']', '{', '}', '<', '>',
];

pub fn is_blacklisted(ch: char) -> bool {
    ch.is_whitespace() || BLACKLIST.contains(&ch)
}

/// Turns an arbitrary database name into a valid identifier.
///
/// `#`, `@` and `&` are spelled out before the blacklist is stripped, and the
/// result is prefixed with [`PLACEHOLDER`] when it starts with a digit.
pub fn normalize_identifier(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());

    for ch in raw.chars() {
        match ch {
            '#' => out.push_str("Number"),
            '@' => out.push_str("At"),
            '&' => out.push_str("And"),
            ch if is_blacklisted(ch) => {}
            ch => out.push(ch),
        }
    }

    prefix_if_numeric(out)
}

/// Prefixes [`PLACEHOLDER`] when `ident` is empty or starts with a digit.
pub fn prefix_if_numeric(ident: String) -> String {
    match ident.chars().next() {
        None => PLACEHOLDER.to_string(),
        Some(ch) if ch.is_numeric() => format!("{PLACEHOLDER}{ident}"),
        Some(_) => ident,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_symbols_before_stripping() {
        assert_eq!(normalize_identifier("Foo#Bar"), "FooNumberBar");
        assert_eq!(normalize_identifier("Mail@Home"), "MailAtHome");
        assert_eq!(normalize_identifier("Salt & Pepper"), "SaltAndPepper");
    }

    #[test]
    fn strips_blacklist() {
        assert_eq!(normalize_identifier("first-name (old)"), "firstnameold");
        assert_eq!(normalize_identifier("[Order].[Id]"), "OrderId");
    }

    #[test]
    fn leading_digit_is_prefixed() {
        let ident = normalize_identifier("3_Foo#Bar");
        assert_eq!(ident, "N3_FooNumberBar");
        assert!(!ident.starts_with(|ch: char| ch.is_ascii_digit()));
        assert!(!ident.chars().any(is_blacklisted));
    }

    #[test]
    fn digit_exposed_by_stripping_is_prefixed() {
        assert_eq!(normalize_identifier("-1st"), "N1st");
    }

    #[test]
    fn empty_result_becomes_placeholder() {
        assert_eq!(normalize_identifier("()"), "N");
        assert_eq!(normalize_identifier(""), "N");
    }
}
