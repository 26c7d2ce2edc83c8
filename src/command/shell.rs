// file: src/command/shell.rs
// version: 1.0.0
// guid: 51b8d3e6-9c2a-4f07-a4d1-6e3f80b92c75

//! Shell quoting for rendered arguments

/// Escape single quotes as `\'`
///
/// Only the quote character is touched; backslashes already in the value pass
/// through unchanged.
pub fn escape_single_quotes(value: &str) -> String {
    value.replace('\'', "\\'")
}

/// Wrap a value in single quotes after escaping it
pub fn single_quote(value: &str) -> String {
    format!("'{}'", escape_single_quotes(value))
}

/// Render one `--option 'value'` token
pub fn long_option(option: &str, value: &str) -> String {
    format!("--{} {}", option, single_quote(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_single_quotes() {
        assert_eq!(escape_single_quotes("My 'Killer' Server"), r"My \'Killer\' Server");
        assert_eq!(escape_single_quotes("plain"), "plain");
    }

    #[test]
    fn test_backslashes_are_left_alone() {
        assert_eq!(escape_single_quotes(r"a\'b"), r"a\\'b");
    }

    #[test]
    fn test_long_option() {
        assert_eq!(long_option("level", "debug"), "--level 'debug'");
        assert_eq!(long_option("name", "it's"), r"--name 'it\'s'");
        assert_eq!(long_option("empty", ""), "--empty ''");
    }
}
