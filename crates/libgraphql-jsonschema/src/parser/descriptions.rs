use crate::LineCursor;
use crate::line_classifier::LineKind;
use crate::line_classifier::classify;

/// Reads a description that occupies exactly one line (`"..."` or
/// `"""..."""`) and moves past it.
pub(super) fn read_single_line_description(cursor: &mut LineCursor) -> String {
    cursor.advance_and_get_current()
        .map(|line| {
            line.trim()
                .trim_start_matches('"')
                .trim_end_matches('"')
                .trim()
                .to_string()
        })
        .unwrap_or_default()
}

/// Reads a `"""` block, starting on its opening line, and moves past the
/// closing marker. Lines are trimmed and joined with single spaces; blank
/// lines contribute nothing.
pub(super) fn read_multi_line_description(cursor: &mut LineCursor) -> String {
    let mut parts = vec![];
    let Some(opener) = cursor.advance_and_get_current() else {
        return String::new();
    };
    push_part(&mut parts, opener.trim().trim_start_matches('"'));

    while let Some(line) = cursor.advance_and_get_current() {
        let line = line.trim();
        if classify(Some(line)) == LineKind::MultiLineDescriptionOpenOrClose {
            push_part(&mut parts, line.trim_end_matches('"'));
            break;
        }
        push_part(&mut parts, line);
    }

    parts.join(" ")
}

fn push_part(parts: &mut Vec<String>, text: &str) {
    let text = text.trim();
    if !text.is_empty() {
        parts.push(text.to_string());
    }
}
