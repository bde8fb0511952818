//! Escaping of user text before it is embedded in HTML email

/// Replaces `<` and `>` with their entity forms. Nothing else is touched.
pub fn escape_markup(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escapes a message body and turns newlines into `<br />`.
///
/// Line breaks are inserted after escaping, so the `<br />` tags survive.
pub fn escape_message(input: &str) -> String {
    escape_markup(input).replace('\n', "<br />")
}

/// Makes a display label safe for a quoted address header: control
/// characters (CR/LF included) are dropped, then `\\` and `"` are
/// backslash-escaped.
pub fn quote_header_label(label: &str) -> String {
    let mut quoted = String::with_capacity(label.len());
    for c in label.chars().filter(|c| !c.is_control()) {
        if c == '\\' || c == '"' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted
}
