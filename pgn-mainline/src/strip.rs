use crate::error::FormatError;

const CONTEXT_CHARS: usize = 40;

fn context_at(text: &str, offset: usize) -> String {
    let mut start = offset.saturating_sub(CONTEXT_CHARS);
    while !text.is_char_boundary(start) {
        start -= 1;
    }
    text[start..=offset].trim_start().to_string()
}

fn tail_context(text: &str) -> String {
    let trimmed = text.trim_end();
    let mut start = trimmed.len().saturating_sub(CONTEXT_CHARS);
    while !trimmed.is_char_boundary(start) {
        start -= 1;
    }
    trimmed[start..].trim_start().to_string()
}

/// Removes brace comments, semicolon line comments and parenthesized
/// variations from one game's move text, leaving only the mainline.
///
/// Retained runs are whitespace-normalized and joined with single spaces.
pub fn strip_movetext(text: &str) -> Result<String, FormatError> {
    let mut runs: Vec<&str> = Vec::new();
    let mut paren_depth = 0usize;
    let mut in_brace = false;
    let mut in_line_comment = false;
    let mut emit_start = 0usize;

    for (index, character) in text.char_indices() {
        if in_line_comment {
            if character == '\n' {
                in_line_comment = false;
                emit_start = index + 1;
            }
            continue;
        }

        if in_brace {
            if character == '}' {
                in_brace = false;
                emit_start = index + 1;
            }
            continue;
        }

        match character {
            '{' => {
                // A comment inside a variation is dropped with the
                // variation, so only flush at the top level.
                if paren_depth == 0 {
                    runs.push(&text[emit_start..index]);
                }
                in_brace = true;
            }
            '}' => {
                return Err(FormatError::UnmatchedCloseBrace {
                    offset: index,
                    context: context_at(text, index),
                });
            }
            '(' => {
                if paren_depth == 0 {
                    runs.push(&text[emit_start..index]);
                }
                paren_depth += 1;
            }
            ')' => {
                if paren_depth == 0 {
                    return Err(FormatError::UnmatchedCloseParen {
                        offset: index,
                        context: context_at(text, index),
                    });
                }
                paren_depth -= 1;
                if paren_depth == 0 {
                    emit_start = index + 1;
                }
            }
            ';' => {
                if paren_depth == 0 {
                    runs.push(&text[emit_start..index]);
                    in_line_comment = true;
                }
            }
            _ => (),
        }
    }

    if in_brace {
        return Err(FormatError::UnterminatedComment {
            context: tail_context(text),
        });
    }
    if paren_depth > 0 {
        return Err(FormatError::UnterminatedVariation {
            open: paren_depth,
            context: tail_context(text),
        });
    }
    // A trailing ';' comment may end at end of input instead of a newline.
    if !in_line_comment {
        runs.push(&text[emit_start..]);
    }

    Ok(runs
        .iter()
        .flat_map(|run| run.split_whitespace())
        .collect::<Vec<&str>>()
        .join(" "))
}
