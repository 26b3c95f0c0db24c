mod properties;
mod scenarios;

/// Remove all markup from rendered HTML, turning entities back into the
/// characters they stand for.
pub fn unmarkup(html: &str) -> String {
    let mut result = String::new();
    let mut inside = false;
    for c in html.chars() {
        match c {
            '<' => inside = true,
            '>' => inside = false,
            _ if !inside => result.push(c),
            _ => {}
        }
    }
    result
        .replace("&emsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// What a line should look like once its markup has been removed: its
/// leading spaces, then its trimmed content.
pub fn expected(line: &str) -> String {
    let width = line
        .chars()
        .take_while(|c| *c == ' ')
        .count();
    format!("{}{}", " ".repeat(width), line.trim())
}
