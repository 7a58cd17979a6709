//! Discord message splitting
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.2.0: Limits count characters, matching how Discord measures content
//! - 1.1.0: Drop embed helpers, skip blank chunks so every piece is sendable
//! - 1.0.0: Line-aware, UTF-8 safe chunking for bot replies

/// Discord message content limit (characters)
pub const MESSAGE_LIMIT: usize = 2000;

/// Split text into pieces of at most `max_chars` characters.
///
/// Splits prefer newline boundaries. Lines that are too long on their own are
/// broken between characters. Chunks consisting only of whitespace are dropped.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    if text.chars().count() <= max_chars {
        return if text.trim().is_empty() {
            Vec::new()
        } else {
            vec![text.to_string()]
        };
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0;

    for line in text.lines() {
        let line_chars = line.chars().count();
        // +1 for the newline that rejoins this line to `current`
        let needed = if current.is_empty() { line_chars } else { line_chars + 1 };
        if current_chars + needed <= max_chars {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
            current_chars += needed;
            continue;
        }

        flush(&mut chunks, &mut current);
        current_chars = 0;
        if line_chars <= max_chars {
            current.push_str(line);
            current_chars = line_chars;
        } else {
            split_long_line(line, max_chars, &mut chunks);
        }
    }
    flush(&mut chunks, &mut current);

    chunks
}

fn flush(chunks: &mut Vec<String>, current: &mut String) {
    let piece = std::mem::take(current);
    if !piece.trim().is_empty() {
        chunks.push(piece.trim_end().to_string());
    }
}

fn split_long_line(line: &str, max_chars: usize, chunks: &mut Vec<String>) {
    let chars: Vec<char> = line.chars().collect();
    for piece in chars.chunks(max_chars.max(1)) {
        chunks.push(piece.iter().collect());
    }
}

/// Chunk text for message content (2000 character limit)
pub fn chunk_for_message(text: &str) -> Vec<String> {
    chunk_text(text, MESSAGE_LIMIT)
}
