/// Returns the first complete `<table>...</table>` element, nested tables included.
///
/// Tag names are matched case-insensitively. `None` when there is no table or it never closes.
pub fn extract_table(html: &str) -> Option<&str> {
    let lower = html.to_ascii_lowercase();
    let start = find_open_tag(&lower, 0)?;

    let mut depth = 0usize;
    let mut cursor = start;

    loop {
        let next_open = find_open_tag(&lower, cursor);
        let next_close = lower[cursor..].find("</table").map(|i| i + cursor)?;

        match next_open {
            Some(open) if open < next_close => {
                depth += 1;
                cursor = open + "<table".len();
            }
            _ => {
                depth -= 1;
                let end = lower[next_close..].find('>').map(|i| i + next_close + 1)?;
                if depth == 0 {
                    return Some(&html[start..end]);
                }
                cursor = end;
            }
        }
    }
}

/// Position of the next `<table` that is a real tag (followed by whitespace, `>` or `/`).
fn find_open_tag(lower: &str, from: usize) -> Option<usize> {
    let mut cursor = from;
    while let Some(offset) = lower[cursor..].find("<table") {
        let at = cursor + offset;
        let after = lower[at + "<table".len()..].chars().next();
        match after {
            Some(c) if c.is_whitespace() || c == '>' || c == '/' => return Some(at),
            _ => cursor = at + "<table".len(),
        }
    }
    None
}
