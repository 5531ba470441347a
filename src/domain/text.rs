//! Pure text transforms: the chunk splitter and prompt normalization.

/// Placeholder token substituted for characters outside the model's expected
/// input alphabet.
pub const EMOJI_PLACEHOLDER: &str = "[emoji]";

/// Splits `text` into bounded-size chunks with a fixed character overlap.
///
/// The text is first cut into pieces at `separator` boundaries (each piece
/// keeps its trailing separator, so no characters are lost). Pieces are then
/// merged into chunks of at most `chunk_size` characters; when a chunk closes,
/// its trailing pieces totalling at most `overlap` characters are carried over
/// as the prefix of the next chunk.
///
/// Best-effort bound: a single piece longer than `chunk_size` is emitted as
/// its own chunk rather than cut mid-piece. Empty input yields no chunks.
/// Lengths are in characters, not bytes.
pub fn split_text(text: &str, chunk_size: usize, overlap: usize, separator: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let pieces: Vec<&str> = if separator.is_empty() {
        vec![text]
    } else {
        text.split_inclusive(separator).collect()
    };

    let mut chunks: Vec<String> = Vec::new();
    let mut window: Vec<&str> = Vec::new();
    let mut window_len = 0usize;

    for piece in pieces {
        let piece_len = piece.chars().count();

        if !window.is_empty() && window_len + piece_len > chunk_size {
            chunks.push(window.concat());

            // Carry trailing pieces into the next chunk, shrinking until the
            // carried text fits under `overlap` and leaves room for the
            // incoming piece.
            while window_len > overlap
                || (window_len + piece_len > chunk_size && window_len > 0)
            {
                let dropped = window.remove(0);
                window_len -= dropped.chars().count();
            }
        }

        window.push(piece);
        window_len += piece_len;
    }

    // The window always holds at least one piece not yet emitted.
    if !window.is_empty() {
        chunks.push(window.concat());
    }

    chunks
}

/// Replaces emoji and pictographic characters with [`EMOJI_PLACEHOLDER`].
///
/// Stateless transform applied to a question before retrieval and prompt
/// composition. A joined emoji sequence (ZWJ, variation selectors, skin
/// tones) collapses to a single placeholder. All other text passes through
/// unchanged.
pub fn normalize_prompt_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_emoji_run = false;

    for c in input.chars() {
        if is_emoji_joiner(c) {
            // Joiners never terminate a run and never appear in the output.
            continue;
        }
        if is_emoji_char(c) {
            if !in_emoji_run {
                out.push_str(EMOJI_PLACEHOLDER);
                in_emoji_run = true;
            }
        } else {
            out.push(c);
            in_emoji_run = false;
        }
    }

    out
}

/// Characters that join or modify an emoji sequence without standing alone.
fn is_emoji_joiner(c: char) -> bool {
    matches!(c, '\u{200D}' | '\u{FE00}'..='\u{FE0F}' | '\u{20E3}')
}

/// Emoji and pictographic scalars: the supplementary symbol planes plus the
/// few BMP code points that render as emoji. Ordinary BMP symbols (circled
/// digits, geometric shapes) pass through untouched; extracted PDF text
/// uses them as list bullets and numbering.
fn is_emoji_char(c: char) -> bool {
    matches!(
        c,
        '\u{1F000}'..='\u{1FFFF}'
            | '\u{2600}'..='\u{27BF}'
            | '\u{2B00}'..='\u{2BFF}'
            | '\u{231A}'..='\u{231B}'
            | '\u{23E9}'..='\u{23F3}'
            | '\u{23F8}'..='\u{23FA}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rebuilds the original text from chunks by stripping the carried
    /// overlap prefix of each chunk after the first. Inputs use unique line
    /// content so the maximal suffix/prefix match is unambiguous.
    fn reconstruct(chunks: &[String]) -> String {
        let mut rebuilt = String::new();
        for (i, chunk) in chunks.iter().enumerate() {
            if i == 0 {
                rebuilt.push_str(chunk);
                continue;
            }
            let prev = &chunks[i - 1];
            let max = prev.len().min(chunk.len());
            let shared = (0..=max)
                .rev()
                .find(|&k| chunk.is_char_boundary(k) && prev.ends_with(&chunk[..k]))
                .unwrap_or(0);
            rebuilt.push_str(&chunk[shared..]);
        }
        rebuilt
    }

    fn numbered_lines(n: usize) -> String {
        (0..n).map(|i| format!("line number {i}\n")).collect()
    }

    #[test]
    fn test_split_empty_text_yields_no_chunks() {
        assert!(split_text("", 1000, 200, "\n").is_empty());
    }

    #[test]
    fn test_split_short_text_single_chunk() {
        let chunks = split_text("short text", 1000, 200, "\n");
        assert_eq!(chunks, vec!["short text".to_string()]);
    }

    #[test]
    fn test_split_respects_chunk_size() {
        let text = numbered_lines(200);
        let chunks = split_text(&text, 100, 20, "\n");

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 100, "chunk too long: {chunk:?}");
        }
    }

    #[test]
    fn test_split_consecutive_chunks_overlap() {
        let text = numbered_lines(100);
        let chunks = split_text(&text, 120, 40, "\n");

        assert!(chunks.len() > 1);
        for pair in chunks.windows(2) {
            // The next chunk must open with a non-empty suffix of the
            // previous one, and that suffix stays within the overlap budget.
            let shared = (1..=pair[0].len().min(pair[1].len()))
                .rev()
                .find(|&k| pair[0].ends_with(&pair[1][..k]));
            let shared = shared.expect("chunks do not overlap");
            assert!(shared <= 40, "overlap {shared} exceeds budget");
        }
    }

    #[test]
    fn test_split_reconstructs_original_text() {
        for (size, overlap) in [(50, 10), (100, 20), (120, 40), (1000, 200)] {
            let text = numbered_lines(150);
            let chunks = split_text(&text, size, overlap, "\n");
            assert_eq!(reconstruct(&chunks), text, "size={size} overlap={overlap}");
        }
    }

    #[test]
    fn test_split_prefers_separator_boundaries() {
        let text = "alpha\nbeta\ngamma\ndelta\n";
        let chunks = split_text(text, 12, 0, "\n");

        for chunk in &chunks {
            assert!(chunk.ends_with('\n'), "cut off-boundary: {chunk:?}");
        }
    }

    #[test]
    fn test_split_oversized_run_emitted_whole() {
        let long_run = "x".repeat(500);
        let text = format!("head\n{long_run}\ntail\n");
        let chunks = split_text(&text, 100, 10, "\n");

        assert!(
            chunks.iter().any(|c| c.contains(&long_run)),
            "oversized run was cut mid-piece"
        );
    }

    #[test]
    fn test_split_counts_chars_not_bytes() {
        let text: String = (0..30).map(|i| format!("wörd-{i:02}-é\n")).collect();
        let chunks = split_text(&text, 30, 11, "\n");
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 30);
        }
        assert_eq!(reconstruct(&chunks), text);
    }

    #[test]
    fn test_normalize_plain_text_unchanged() {
        assert_eq!(
            normalize_prompt_text("What does section 3.1 say?"),
            "What does section 3.1 say?"
        );
    }

    #[test]
    fn test_normalize_replaces_emoji() {
        assert_eq!(
            normalize_prompt_text("great \u{1F600} question"),
            "great [emoji] question"
        );
    }

    #[test]
    fn test_normalize_collapses_joined_sequence() {
        // woman + ZWJ + laptop renders as a single glyph
        let input = "dev \u{1F469}\u{200D}\u{1F4BB} here";
        assert_eq!(normalize_prompt_text(input), "dev [emoji] here");
    }

    #[test]
    fn test_normalize_keeps_accented_text() {
        assert_eq!(normalize_prompt_text("café naïve"), "café naïve");
    }

    #[test]
    fn test_normalize_keeps_bmp_list_symbols() {
        // circled digits and geometric shapes show up in extracted PDF text
        let input = "\u{2460} intro \u{25A0} bullet \u{25B8} item";
        assert_eq!(normalize_prompt_text(input), input);
    }

    #[test]
    fn test_normalize_still_replaces_bmp_emoji() {
        assert_eq!(
            normalize_prompt_text("at \u{231A} sharp \u{2B50}"),
            "at [emoji] sharp [emoji]"
        );
    }

    #[test]
    fn test_normalize_separate_emoji_get_separate_placeholders() {
        assert_eq!(
            normalize_prompt_text("\u{1F600} and \u{1F680}"),
            "[emoji] and [emoji]"
        );
    }
}
