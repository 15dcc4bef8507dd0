//! Named color lookup for seed strings.
//!
//! The widget accepts the 16 basic CSS color keywords as seeds, the same
//! set every browser resolves. Lookup is case insensitive.

/// The basic CSS color keywords and their RGB triples.
const NAMED_COLORS: &[(&str, (u8, u8, u8))] = &[
    ("aqua", (0, 255, 255)),
    ("black", (0, 0, 0)),
    ("blue", (0, 0, 255)),
    ("fuchsia", (255, 0, 255)),
    ("gray", (128, 128, 128)),
    ("green", (0, 128, 0)),
    ("lime", (0, 255, 0)),
    ("maroon", (128, 0, 0)),
    ("navy", (0, 0, 128)),
    ("olive", (128, 128, 0)),
    ("purple", (128, 0, 128)),
    ("red", (255, 0, 0)),
    ("silver", (192, 192, 192)),
    ("teal", (0, 128, 128)),
    ("white", (255, 255, 255)),
    ("yellow", (255, 255, 0)),
];

/// Resolves a color keyword to its RGB triple, or `None` if unknown.
pub fn lookup(name: &str) -> Option<(u8, u8, u8)> {
    let name = name.trim().to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, rgb)| rgb)
}

/// Returns the recognized keyword names.
pub fn list_names() -> Vec<&'static str> {
    NAMED_COLORS.iter().map(|&(n, _)| n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_resolves_known_keywords() {
        assert_eq!(lookup("red"), Some((255, 0, 0)));
        assert_eq!(lookup("navy"), Some((0, 0, 128)));
        assert_eq!(lookup("silver"), Some((192, 192, 192)));
    }

    #[test]
    fn lookup_is_case_insensitive_and_trims() {
        assert_eq!(lookup("RED"), Some((255, 0, 0)));
        assert_eq!(lookup("  Teal "), Some((0, 128, 128)));
    }

    #[test]
    fn lookup_rejects_unknown_names() {
        assert_eq!(lookup("cornflowerblue"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn list_names_covers_the_basic_sixteen() {
        let names = list_names();
        assert_eq!(names.len(), 16);
        assert!(names.contains(&"black"));
        assert!(names.contains(&"aqua"));
    }
}
