//! Display-name formatting for the top-level result list.

use percent_encoding::percent_decode_str;

/// Shorten `path` for display.
///
/// The home-directory prefix becomes `~`, ampersands become "And" (the
/// host's markup renderer mangles raw `&`), and percent-encoding from the
/// indexer's URIs is decoded.
pub fn display_name(path: &str, home: &str) -> String {
    let name = match path.strip_prefix(home) {
        Some(rest) if !home.is_empty() => format!("~{rest}"),
        _ => path.to_string(),
    };
    decode(&name.replace('&', "And"))
}

/// Percent-decode `s`, returning it unchanged if decoding does not produce
/// valid UTF-8.
pub fn decode(s: &str) -> String {
    match percent_decode_str(s).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_prefix_becomes_tilde() {
        assert_eq!(display_name("/home/u/Music", "/home/u"), "~/Music");
    }

    #[test]
    fn test_home_elsewhere_is_untouched() {
        assert_eq!(display_name("/srv/home/u", "/home/u"), "/srv/home/u");
    }

    #[test]
    fn test_ampersand_and_decoding() {
        assert_eq!(
            display_name("/home/u/Projects/A&B", "/home/u"),
            "~/Projects/AAndB"
        );
        assert_eq!(
            display_name("/home/u/My%20Docs", "/home/u"),
            "~/My Docs"
        );
    }

    #[test]
    fn test_decode_leaves_plus_alone() {
        // Folder names can legitimately contain '+'.
        assert_eq!(decode("/opt/gtk+3"), "/opt/gtk+3");
    }

    #[test]
    fn test_decode_invalid_utf8_falls_back() {
        assert_eq!(decode("/x/%ff%fe"), "/x/%ff%fe");
    }
}
