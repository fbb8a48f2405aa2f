use super::to_plain_text;

#[test]
fn it_keeps_plain_text() {
    assert_eq!(to_plain_text("Done (3.2s)!"), "Done (3.2s)!");
}

#[test]
fn it_strips_spans() {
    let line = r#"<span style="color: var(--warning, #FFA500);">[Server exited with code 0]</span>"#;
    assert_eq!(to_plain_text(line), "[Server exited with code 0]");
}

#[test]
fn it_decodes_entities() {
    assert_eq!(
        to_plain_text("&lt;steve&gt; &quot;hi&quot; &amp; bye&#39;"),
        "<steve> \"hi\" & bye'"
    );
}

#[test]
fn it_does_not_double_decode() {
    assert_eq!(to_plain_text("&amp;lt;"), "&lt;");
}

#[test]
fn it_reduces_empty_markup_to_nothing() {
    assert_eq!(to_plain_text("<span></span>"), "");
}
