// src/core/sanitize.rs

/// Last segment of a backend path such as `/downloads/订单_2024.xlsx`.
pub fn file_name_from_path(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Make a backend-supplied name safe to create locally.
/// Keeps letters (any script), digits, `.`, `-`, `_`; whitespace runs become `_`.
pub fn sanitize_file_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() || ch == '.' || ch == '-' {
            out.push(ch);
            last_us = false;
        } else if ch.is_whitespace() || ch == '_' {
            if !last_us { out.push('_'); last_us = true; }
        }
    }
    let out = out.trim_matches(|c| c == '_' || c == '.').to_string();
    if out.is_empty() { s!("export.xlsx") } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_dirs_and_separators() {
        assert_eq!(file_name_from_path("/downloads/a b.xlsx"), "a b.xlsx");
        assert_eq!(sanitize_file_name("a b.xlsx"), "a_b.xlsx");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "etcpasswd");
        assert_eq!(sanitize_file_name("京东订单_2024.xlsx"), "京东订单_2024.xlsx");
        assert_eq!(sanitize_file_name("///"), "export.xlsx");
    }
}
