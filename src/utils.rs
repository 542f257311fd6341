/// Shorten `text` to at most `max_bytes` bytes without splitting a character
pub fn truncate_to_char_boundary(text: &mut String, max_bytes: usize) {
    if text.len() <= max_bytes {
        return;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
}

/// Name of the environment provisioned for a pull request
pub fn pull_request_environment_name(pull_request_number: u64) -> String {
    format!("pr-{pull_request_number}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_untouched() {
        let mut text = "short".to_string();
        truncate_to_char_boundary(&mut text, 10);
        assert_eq!(text, "short");
    }

    #[test]
    fn test_truncate_backs_off_to_boundary() {
        let mut text = "aé€".to_string(); // 1 + 2 + 3 bytes
        truncate_to_char_boundary(&mut text, 5);
        assert_eq!(text, "aé");

        let mut text = "aé€".to_string();
        truncate_to_char_boundary(&mut text, 2);
        assert_eq!(text, "a");
    }

    #[test]
    fn test_environment_name() {
        assert_eq!(pull_request_environment_name(10), "pr-10");
    }
}
