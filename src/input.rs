//! Source line utility functions

/// Marks the start of a comment running to the end of the line.
const COMMENT_MARKER: char = '#';

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Split one raw source line into its tokens.
///
/// Line terminators and everything from the first `#` onwards are dropped,
/// then the remainder is split on runs of spaces and tabs. A literal `#` can
/// only appear in a string as the escape `\035`, so the first one always
/// starts a comment.
///
/// Blank lines and comment-only lines yield no tokens.
pub fn sanitize(line: &str) -> Vec<&str> {
    let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
    let code = match line.find(COMMENT_MARKER) {
        Some(start) => &line[..start],
        None => line,
    };

    code.split(is_blank).filter(|t| !t.is_empty()).collect()
}
