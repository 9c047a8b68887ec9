//! Telegram MarkdownV2 helpers

/// Escapes every MarkdownV2 special character in `text`.
///
/// # Example
///
/// ```
/// use pcoscore::markdown::escape_markdown_v2;
///
/// let escaped = escape_markdown_v2("Score: 70%. Not a diagnosis!");
/// assert_eq!(escaped, "Score: 70%\\. Not a diagnosis\\!");
/// ```
pub fn escape_markdown_v2(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        match c {
            '\\' | '_' | '*' | '[' | ']' | '(' | ')' | '~' | '`' | '>' | '#' | '+' | '-' | '=' | '|' | '{'
            | '}' | '.' | '!' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }

    result
}

/// Bold span with its content escaped
pub fn bold(text: &str) -> String {
    format!("*{}*", escape_markdown_v2(text))
}
