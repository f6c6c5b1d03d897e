//! Prompt construction for biography generation.
//!
//! The prompt wording is fixed: downstream text quality depends on the
//! exact framing, so it is not configurable per run.

/// Build the generation prompt for one author.
///
/// Asks for a short, punchy biography centred on the author's best-known
/// work and style. `display_name` is interpolated verbatim.
pub fn biography_prompt(display_name: &str) -> String {
    format!(
        "Write a brief 50-word biography of {display_name}, focusing on their \
         most famous work, literary style, and key contributions to literature. \
         Keep it concise and impactful."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_author_name() {
        let prompt = biography_prompt("Jane Austen");
        assert!(prompt.contains("Jane Austen"));
    }

    #[test]
    fn prompt_keeps_fixed_framing() {
        let prompt = biography_prompt("Mark Twain");
        assert!(prompt.starts_with("Write a brief 50-word biography of Mark Twain,"));
        assert!(prompt.ends_with("Keep it concise and impactful."));
    }
}
