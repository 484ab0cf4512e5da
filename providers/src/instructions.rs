//! Pull example snippets out of a puzzle's instruction page.

use crate::util::decode_html_entities;

/// Text of the first `<code>` element after `prefix` (matched
/// case-insensitively), with one wrapping `<pre>`/`<em>` tag removed and
/// HTML entities decoded.
pub fn code_after(html: &str, prefix: &str) -> Option<String> {
    // ASCII lowercasing keeps byte offsets aligned with `html`.
    let lower = html.to_ascii_lowercase();
    let start = lower.find(&prefix.to_ascii_lowercase())? + prefix.len();
    let open = start + lower[start..].find("<code>")? + "<code>".len();
    let close = open + lower[open..].find("</code>")?;

    let (mut from, mut to) = (open, close);
    if let Some(tag) = ["<pre>", "<em>"]
        .into_iter()
        .find(|tag| lower[from..to].starts_with(tag))
    {
        from += tag.len();
    }
    if let Some(tag) = ["</pre>", "</em>"]
        .into_iter()
        .find(|tag| lower[from..to].ends_with(tag))
    {
        to -= tag.len();
    }

    Some(decode_html_entities(&html[from..to]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<article class="day-desc">
<p>For example:</p>
<pre><code>3   4
4   3
2   5
</code></pre>
<p>In the example above, this is a total distance of <code><em>11</em></code>!</p>
<p>Then use <code>a &lt; b</code> to compare.</p>
</article>"#;

    #[test]
    fn test_example_block() {
        assert_eq!(
            code_after(PAGE, "For example:").as_deref(),
            Some("3   4\n4   3\n2   5\n")
        );
    }

    #[test]
    fn test_strips_emphasis() {
        assert_eq!(
            code_after(PAGE, ", a total distance of ").as_deref(),
            Some("11")
        );
    }

    #[test]
    fn test_case_insensitive_prefix() {
        assert_eq!(
            code_after(PAGE, "A TOTAL DISTANCE OF").as_deref(),
            Some("11")
        );
    }

    #[test]
    fn test_decodes_entities() {
        assert_eq!(code_after(PAGE, "Then use").as_deref(), Some("a < b"));
    }

    #[test]
    fn test_missing_prefix_or_code() {
        assert_eq!(code_after(PAGE, "not on the page"), None);
        assert_eq!(code_after(PAGE, "to compare."), None);
    }
}
