//! Percent-encoding for playlist track locations

/// Percent-encode a filesystem path for use after `file:///` in a playlist
///
/// Each character is looked up in a fixed table; characters not in the table
/// are kept as-is (including `.`, `:` and non-ASCII letters). Both `/` and `\`
/// become `%2F`, so Windows and Unix separators end up identical.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(encode_path("A B/C.mp3"), "A%20B%2FC.mp3");
/// assert_eq!(encode_path("a\\b"), "a%2Fb");
/// ```
pub fn encode_path(path: &str) -> String {
    let mut encoded = String::with_capacity(path.len());
    for c in path.chars() {
        match replacement(c) {
            Some(code) => encoded.push_str(code),
            None => encoded.push(c),
        }
    }
    encoded
}

fn replacement(c: char) -> Option<&'static str> {
    let code = match c {
        ' ' => "%20",
        '!' => "%21",
        '"' => "%22",
        '#' => "%23",
        '$' => "%24",
        '%' => "%25",
        '&' => "%26",
        '\'' => "%27",
        '(' => "%28",
        ')' => "%29",
        '*' => "%2A",
        '+' => "%2B",
        ',' => "%2C",
        '-' => "%2D",
        '/' => "%2F",
        ';' => "%3B",
        '<' => "%3C",
        '=' => "%3D",
        '>' => "%3E",
        '?' => "%3F",
        '@' => "%40",
        '[' => "%5B",
        '\\' => "%2F", // separator, not a literal backslash
        ']' => "%5D",
        '^' => "%5E",
        '_' => "%5F",
        '`' => "%60",
        '{' => "%7B",
        '|' => "%7C",
        '}' => "%7D",
        '~' => "%7E",
        '£' => "%C2%A3",
        '€' => "%E2%82%AC",
        _ => return None,
    };
    Some(code)
}
