/// Joins class fragments with single spaces, skipping empty ones. Components
/// build conditional class lists by passing `""` for branches that don't
/// apply.
pub fn compose_classes(parts: &[&str]) -> String {
    let mut composed = String::new();
    for part in parts {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if !composed.is_empty() {
            composed.push(' ');
        }
        composed.push_str(part);
    }
    composed
}

#[macro_export]
macro_rules! classes {
    ($($part:expr),+ $(,)?) => {
        $crate::compose_classes(&[$($part),+])
    };
}

#[cfg(test)]
mod test {
    use super::compose_classes;

    #[test]
    fn joins_fragments_with_single_spaces() {
        assert_eq!(
            compose_classes(&["flex h-8", "text-sm", "uppercase"]),
            "flex h-8 text-sm uppercase"
        );
    }

    #[test]
    fn skips_empty_and_whitespace_fragments() {
        assert_eq!(compose_classes(&["", "flex", "  ", "gap-2", ""]), "flex gap-2");
        assert_eq!(compose_classes(&["", ""]), "");
    }

    #[test]
    fn macro_front_end_matches_the_function() {
        let disabled = false;
        assert_eq!(
            classes!("flex", if disabled { "opacity-50" } else { "" }),
            "flex"
        );
    }
}
