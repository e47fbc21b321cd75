/// Replaces spreadsheet carriage-return escapes and line breaks with spaces,
/// then collapses whitespace.
pub fn clean_text(text: &str) -> String {
    let replaced = text
        .replace("_x000D_", " ")
        .replace(['\r', '\n'], " ");
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_excel_escapes_and_newlines() {
        assert_eq!(clean_text("CPR_x000D_\nBLS"), "CPR BLS");
        assert_eq!(clean_text("  a\r\n\tb  "), "a b");
        assert_eq!(clean_text(""), "");
    }
}
