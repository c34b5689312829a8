use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped when turning an identifier into a path segment.
///
/// Everything except ASCII alphanumerics and `- _ . ! ~ * ' ( )` is
/// percent-encoded, the same unreserved set URL component encoding uses.
/// Output paths double as request paths on a static host, so segments must
/// stay valid in both worlds.
const SEGMENT_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encodes an untrusted string into a single safe path segment.
///
/// Server ids and version strings come straight from the configuration file
/// and end up as directory and file names. Separators, spaces, and reserved
/// characters are percent-encoded so a value like `a/b` becomes one segment
/// (`a%2Fb`) instead of nesting a directory. The dot-only segments `.` and
/// `..` are fully escaped as well since encoding leaves dots intact.
pub fn encode_path_segment(raw: &str) -> String {
    match raw {
        "." => "%2E".to_string(),
        ".." => "%2E%2E".to_string(),
        _ => utf8_percent_encode(raw, SEGMENT_ESCAPE).to_string(),
    }
}
