#[cfg(test)]
#[path = "markup_test.rs"]
mod tests;

const ENTITIES: [(&str, &str); 7] = [
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&#x27;", "'"),
    ("&nbsp;", " "),
    // Last, so `&amp;lt;` decodes to `&lt;` and not `<`.
    ("&amp;", "&"),
];

/// Console output arrives as HTML fragments (coloured spans, escaped
/// entities). Reduces a single line to the plain text a terminal can show.
pub fn to_plain_text(line: &str) -> String {
    let mut text = String::with_capacity(line.len());
    let mut in_tag = false;

    for c in line.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    for (entity, replacement) in ENTITIES {
        text = text.replace(entity, replacement);
    }

    return text;
}
