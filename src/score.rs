/// Match quality of a catalog title against the requested brand name.
///
/// Both inputs are trimmed and lowercased first, so the score is insensitive
/// to case and outer whitespace. The result is one of a fixed ladder:
/// 100 exact, 95 equal ignoring internal spaces, 85 title starts with the
/// query, 75 query contained in the title, 65 every query word contained in
/// the title, 40 baseline. An empty title or query scores 0. Never errors;
/// every candidate gets ranked, none is excluded by score alone.
pub fn score_title(title: &str, query: &str) -> u32 {
    let t = title.trim().to_lowercase();
    let q = query.trim().to_lowercase();
    if t.is_empty() || q.is_empty() {
        return 0;
    }
    if t == q {
        return 100;
    }
    if t.replace(' ', "") == q.replace(' ', "") {
        return 95;
    }
    if t.starts_with(&q) {
        return 85;
    }
    if t.contains(&q) {
        return 75;
    }
    if q.split_whitespace().all(|word| t.contains(word)) {
        return 65;
    }
    40
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_exact_match() {
        assert_eq!(score_title("OpenAI", "openai"), 100);
        assert_eq!(score_title("  openai  ", "OpenAI"), 100);
        assert_eq!(score_title("Anthropic", "Anthropic"), 100);
    }

    #[test]
    fn test_score_ignores_internal_spaces() {
        assert_eq!(score_title("Open AI", "openai"), 95);
        assert_eq!(score_title("openai", "Open AI"), 95);
    }

    #[test]
    fn test_score_title_starts_with_query() {
        assert_eq!(score_title("openai platform", "openai"), 85);
    }

    #[test]
    fn test_score_query_inside_title() {
        assert_eq!(score_title("the openai company", "openai"), 75);
    }

    #[test]
    fn test_score_all_query_words_present() {
        assert_eq!(score_title("open the ai", "open ai"), 65);
    }

    #[test]
    fn test_score_baseline() {
        assert_eq!(score_title("Anthropic", "openai"), 40);
    }

    #[test]
    fn test_score_empty_inputs() {
        assert_eq!(score_title("", "openai"), 0);
        assert_eq!(score_title("openai", ""), 0);
        assert_eq!(score_title("   ", "openai"), 0);
    }

    #[test]
    fn test_score_codomain_is_finite() {
        let allowed = [0, 40, 65, 75, 85, 95, 100];
        let pairs = [
            ("OpenAI", "openai"),
            ("Open AI", "openai"),
            ("openai platform", "openai"),
            ("the openai company", "openai"),
            ("open the ai", "open ai"),
            ("Anthropic", "openai"),
            ("", ""),
            ("x", "y"),
        ];
        for (title, query) in pairs {
            assert!(allowed.contains(&score_title(title, query)));
        }
    }
}
