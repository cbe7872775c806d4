/// Canonical lookup key for a creature name or numeric id
///
/// "Mr. Mime" -> "mr-mime", " Tapu_Koko " -> "tapu-koko", "025" -> "025".
pub fn normalize_identifier(identifier: &str) -> String {
    let trimmed = identifier.trim();

    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
        return trimmed.to_string();
    }

    let mut key = String::with_capacity(trimmed.len());
    for c in trimmed.chars().flat_map(char::to_lowercase) {
        match c {
            ' ' | '_' | '-' => {
                if !key.ends_with('-') && !key.is_empty() {
                    key.push('-');
                }
            }
            c if c.is_alphanumeric() => key.push(c),
            _ => {}
        }
    }

    key.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_names() {
        assert_eq!(normalize_identifier("Pikachu"), "pikachu");
        assert_eq!(normalize_identifier("  Charizard "), "charizard");
        assert_eq!(normalize_identifier("Mr. Mime"), "mr-mime");
        assert_eq!(normalize_identifier("tapu_koko"), "tapu-koko");
        assert_eq!(normalize_identifier("Farfetch'd"), "farfetchd");
    }

    #[test]
    fn test_normalize_ids() {
        assert_eq!(normalize_identifier("25"), "25");
        assert_eq!(normalize_identifier(" 6 "), "6");
    }

    #[test]
    fn test_normalize_collapses_separators() {
        assert_eq!(normalize_identifier("ho  oh"), "ho-oh");
        assert_eq!(normalize_identifier("-porygon-z-"), "porygon-z");
        assert_eq!(normalize_identifier("!!!"), "");
    }
}
