//! Small text cleanups applied to scraped fields.

/// Removes every occurrence of `needle` from `haystack`, comparing
/// ASCII case-insensitively.
///
/// Used for subsite labels carrying a literal `.com` suffix and for the
/// `...read more` tail some description blocks end with. The needle
/// must be ASCII (all callers pass literals); matching runs over the
/// original bytes, so surrounding multi-byte text never shifts the
/// match offsets off a char boundary. An ASCII byte never equals a
/// UTF-8 continuation byte, so every match starts and ends on a
/// boundary of the original string.
pub(crate) fn remove_ignore_case(haystack: &str, needle: &str) -> String {
    if needle.is_empty() || !needle.is_ascii() {
        return haystack.to_string();
    }

    let bytes = haystack.as_bytes();
    let needle_bytes = needle.as_bytes();

    let mut out = String::with_capacity(haystack.len());
    let mut pos = 0;
    while let Some(found) = bytes[pos..]
        .windows(needle_bytes.len())
        .position(|window| window.eq_ignore_ascii_case(needle_bytes))
    {
        out.push_str(&haystack[pos..pos + found]);
        pos += found + needle_bytes.len();
    }
    out.push_str(&haystack[pos..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_dot_com_any_case() {
        assert_eq!(remove_ignore_case("BlacksOnBlondes.com", ".com"), "BlacksOnBlondes");
        assert_eq!(remove_ignore_case("CumBang.COM", ".com"), "CumBang");
    }

    #[test]
    fn test_strips_read_more_tail() {
        assert_eq!(
            remove_ignore_case("A wild night out...Read More", "...read more"),
            "A wild night out",
        );
    }

    #[test]
    fn test_no_occurrence_is_identity() {
        assert_eq!(remove_ignore_case("plain overview", "...read more"), "plain overview");
    }

    #[test]
    fn test_removes_all_occurrences() {
        assert_eq!(remove_ignore_case("a.com.b.COM.c", ".com"), "a.b.c");
    }

    #[test]
    fn test_multibyte_neighbors_do_not_panic() {
        // 'İ' lowercases 2 bytes -> 3 and 'ẞ' 3 -> 2; total length is
        // unchanged but every boundary after them shifts, which used to
        // break lowercase-copy offset matching.
        assert_eq!(remove_ignore_case("İ...Read Moreẞ", "...read more"), "İẞ");
    }

    #[test]
    fn test_needle_between_multibyte_runs() {
        assert_eq!(
            remove_ignore_case("ünïcode.COM über", ".com"),
            "ünïcode über",
        );
        assert_eq!(remove_ignore_case("漢字...READ MORE", "...read more"), "漢字");
    }

    #[test]
    fn test_multibyte_haystack_without_needle_is_identity() {
        assert_eq!(remove_ignore_case("İẞü", ".com"), "İẞü");
    }
}
