const INSTRUCTIONS: &str = "The following title and description belong to a code change by the \
    user. Create tests that ensure the described functionality works.";

/// Build the natural-language request sent to the test-generation service.
///
/// Only an empty title or description is replaced by a placeholder, whitespace
/// is kept as written. `linked_content` is the text fetched from links in the
/// description and is appended as additional information only when non-empty.
pub fn build_prompt(title: &str, body: &str, linked_content: &str) -> String {
    let title = if title.is_empty() {
        "No title provided"
    } else {
        title
    };
    let body = if body.is_empty() {
        "No description provided"
    } else {
        body
    };

    let mut prompt = format!("{INSTRUCTIONS}\n\n# TITLE\n{title}\n\n# DESCRIPTION\n{body}\n");
    if !linked_content.is_empty() {
        prompt.push_str("\n\nAdditional information: ");
        prompt.push_str(linked_content);
        prompt.push('\n');
    }
    prompt
}
