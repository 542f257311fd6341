use crate::utils::truncate_to_char_boundary;

/// Where a bounded read currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadState {
    /// More chunks can be fed
    Open,
    /// The byte budget is used up, the caller should stop reading
    Exhausted,
}

/// Incremental UTF-8 decoder with a hard byte ceiling.
///
/// Chunks are fed as they arrive from the network. Bytes of a multi-byte
/// character that straddle two chunks are carried over until the rest of the
/// character shows up. Once `max_bytes` input bytes have been consumed the state
/// flips to [`ReadState::Exhausted`] and further input is ignored. A character
/// cut in half by the ceiling is dropped, so the decoded text never exceeds
/// `max_bytes` bytes.
#[derive(Debug)]
pub struct BoundedText {
    max_bytes: usize,
    consumed: usize,
    text: String,
    carry: Vec<u8>,
    state: ReadState,
}

impl BoundedText {
    pub fn new(max_bytes: usize) -> Self {
        Self {
            max_bytes,
            consumed: 0,
            text: String::new(),
            carry: Vec::new(),
            state: ReadState::Open,
        }
    }

    pub fn state(&self) -> ReadState {
        self.state
    }

    /// Number of input bytes accepted so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Feed the next chunk, keeping at most the remaining budget of it
    pub fn feed(&mut self, chunk: &[u8]) -> ReadState {
        if self.state == ReadState::Exhausted {
            return self.state;
        }

        let remaining = self.max_bytes.saturating_sub(self.consumed);
        let slice = if chunk.len() > remaining {
            &chunk[..remaining]
        } else {
            chunk
        };

        self.consumed += slice.len();
        self.decode(slice);

        if self.consumed >= self.max_bytes {
            self.state = ReadState::Exhausted;
        }
        self.state
    }

    /// Flush the decoder and return the text
    pub fn finish(mut self) -> String {
        if !self.carry.is_empty() && self.state == ReadState::Open {
            // Stream ended in the middle of a character
            self.text.push(char::REPLACEMENT_CHARACTER);
        }
        truncate_to_char_boundary(&mut self.text, self.max_bytes);
        self.text
    }

    fn decode(&mut self, bytes: &[u8]) {
        let mut pending = std::mem::take(&mut self.carry);
        pending.extend_from_slice(bytes);

        let mut rest: &[u8] = &pending;
        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    self.text.push_str(valid);
                    break;
                }
                Err(err) => {
                    let (valid, after) = rest.split_at(err.valid_up_to());
                    if let Ok(valid) = std::str::from_utf8(valid) {
                        self.text.push_str(valid);
                    }
                    match err.error_len() {
                        Some(len) => {
                            self.text.push(char::REPLACEMENT_CHARACTER);
                            rest = &after[len..];
                        }
                        None => {
                            self.carry = after.to_vec();
                            break;
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_under_budget() {
        let mut reader = BoundedText::new(64);
        assert_eq!(reader.feed(b"hello "), ReadState::Open);
        assert_eq!(reader.feed(b"world"), ReadState::Open);
        assert_eq!(reader.consumed(), 11);
        assert_eq!(reader.finish(), "hello world");
    }

    #[test]
    fn test_truncates_chunk_at_budget() {
        let mut reader = BoundedText::new(8);
        assert_eq!(reader.feed(b"abcde"), ReadState::Open);
        assert_eq!(reader.feed(b"fghijkl"), ReadState::Exhausted);
        // Anything after the budget is ignored
        assert_eq!(reader.feed(b"mnop"), ReadState::Exhausted);
        assert_eq!(reader.consumed(), 8);
        assert_eq!(reader.finish(), "abcdefgh");
    }

    #[test]
    fn test_exact_budget_is_exhausted() {
        let mut reader = BoundedText::new(4);
        assert_eq!(reader.feed(b"abcd"), ReadState::Exhausted);
        assert_eq!(reader.finish(), "abcd");
    }

    #[test]
    fn test_character_split_across_chunks() {
        // "é" is 0xC3 0xA9, "€" is 0xE2 0x82 0xAC
        let mut reader = BoundedText::new(64);
        reader.feed(&[b'a', 0xC3]);
        reader.feed(&[0xA9, 0xE2]);
        reader.feed(&[0x82]);
        reader.feed(&[0xAC, b'z']);
        assert_eq!(reader.finish(), "aé€z");
    }

    #[test]
    fn test_budget_cuts_multibyte_character() {
        // Budget ends after the first byte of "€", which must not leak out
        let mut reader = BoundedText::new(3);
        assert_eq!(reader.feed("ab€".as_bytes()), ReadState::Exhausted);
        let text = reader.finish();
        assert_eq!(text, "ab");
        assert!(text.len() <= 3);
    }

    #[test]
    fn test_budget_cut_across_chunks() {
        let mut reader = BoundedText::new(5);
        reader.feed("日".as_bytes()); // 3 bytes
        reader.feed("本".as_bytes()); // would be 6 bytes total
        assert_eq!(reader.finish(), "日");
    }

    #[test]
    fn test_invalid_bytes_are_replaced() {
        let mut reader = BoundedText::new(64);
        reader.feed(&[b'o', 0xFF, b'k']);
        assert_eq!(reader.finish(), "o\u{FFFD}k");
    }

    #[test]
    fn test_replacements_never_exceed_budget() {
        let mut reader = BoundedText::new(4);
        reader.feed(&[0xFF, 0xFF, 0xFF, 0xFF]);
        let text = reader.finish();
        assert!(text.len() <= 4);
        assert_eq!(text, "\u{FFFD}");
    }

    #[test]
    fn test_stream_ending_mid_character() {
        let mut reader = BoundedText::new(64);
        reader.feed(&[b'x', 0xE2, 0x82]);
        assert_eq!(reader.state(), ReadState::Open);
        assert_eq!(reader.finish(), "x\u{FFFD}");
    }

    #[test]
    fn test_zero_budget() {
        let mut reader = BoundedText::new(0);
        assert_eq!(reader.feed(b"anything"), ReadState::Exhausted);
        assert_eq!(reader.finish(), "");
    }
}
