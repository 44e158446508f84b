use super::*;

#[test]
fn test_escape_html() {
    assert_eq!(escape_html("Tom & Jerry"), "Tom &amp; Jerry");
    assert_eq!(escape_html("a < b > c"), "a &lt; b &gt; c");
    assert_eq!(
        escape_html(r#"say "hi" & 'bye'"#),
        "say &quot;hi&quot; &amp; &#39;bye&#39;"
    );
}

#[test]
fn test_escape_html_no_double_pass() {
    assert_eq!(escape_html("&amp;"), "&amp;amp;");
    assert_eq!(escape_html("plain text"), "plain text");
}

#[test]
fn test_escape_html_keeps_non_ascii() {
    assert_eq!(escape_html("Café <3"), "Café &lt;3");
}
