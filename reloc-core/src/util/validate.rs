pub fn is_non_empty_text(text: &str) -> bool {
    !text.trim().is_empty()
}
