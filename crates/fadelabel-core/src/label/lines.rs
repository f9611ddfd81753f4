//! L4 Atomic Layer: splitting label text into display lines

/// Separator inserted between appended labels
pub const LINE_SEPARATOR: char = '\r';

/// Escaped carriage return as it appears in skin and config text
const ESCAPED_CR: &str = "\\r";

/// Split resolved label text into display lines.
///
/// A line ends at whichever of `\r` or `\n` comes first, so `\r\n` yields an
/// empty line that is then dropped. Lines of one character or less are
/// discarded.
pub fn split_lines(text: &str) -> Vec<String> {
    let text = text.replace(ESCAPED_CR, "\r");
    let mut lines = Vec::new();
    let mut rest = text.as_str();

    while !rest.is_empty() {
        let end = match (rest.find('\r'), rest.find('\n')) {
            (Some(cr), Some(lf)) => Some(cr.min(lf)),
            (cr, lf) => cr.or(lf),
        };

        match end {
            Some(end) => {
                push_line(&mut lines, &rest[..end]);
                // both separators are single-byte
                rest = &rest[end + 1..];
            }
            None => {
                push_line(&mut lines, rest);
                break;
            }
        }
    }

    lines
}

fn push_line(lines: &mut Vec<String>, line: &str) {
    if line.chars().count() > 1 {
        lines.push(line.to_string());
    }
}
