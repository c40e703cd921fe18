// src/core/pipeline/splitter.rs

/// Characters per piece handed to the tokenizer.
///
/// Bounds the size of a single tokenizer input. Changing it can change
/// counted totals because tokens never span a piece boundary.
pub const PIECE_SIZE: usize = 2000;

/// Splits `chunk` into consecutive pieces of `piece_size` characters.
///
/// Pieces borrow from `chunk`, keep their order, and never overlap. The last
/// piece may be shorter. No zero-length piece is produced, so an empty chunk
/// yields no pieces and an exact multiple of `piece_size` has no empty tail.
///
/// # Panics
///
/// Panics if `piece_size` is zero.
#[must_use]
pub fn split_pieces(chunk: &str, piece_size: usize) -> Vec<&str> {
    assert!(piece_size > 0, "piece_size must be positive");

    let mut pieces = Vec::new();
    let mut start = 0;
    let mut chars_in_piece = 0;

    for (offset, _) in chunk.char_indices() {
        if chars_in_piece == piece_size {
            pieces.push(&chunk[start..offset]);
            start = offset;
            chars_in_piece = 0;
        }
        chars_in_piece += 1;
    }

    if start < chunk.len() {
        pieces.push(&chunk[start..]);
    }

    pieces
}
