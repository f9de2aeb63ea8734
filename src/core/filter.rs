//! Titel-Filter für die Marker-Liste.
//!
//! Case-insensitive Substring-Suche; eine leere Eingabe passt auf alles.

use super::ListEntry;

/// Prüft, ob ein Titel zur Sucheingabe passt.
pub fn matches(title: &str, query: &str) -> bool {
    query.is_empty() || title.to_lowercase().contains(&query.to_lowercase())
}

/// Liefert die kanonischen Indizes aller passenden Einträge,
/// in kanonischer Reihenfolge.
pub fn filter_indices(entries: &[ListEntry], query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| needle.is_empty() || entry.title.to_lowercase().contains(&needle))
        .map(|entry| entry.original_index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(titles: &[&str]) -> Vec<ListEntry> {
        titles
            .iter()
            .enumerate()
            .map(|(i, t)| ListEntry {
                title: (*t).to_string(),
                visible: true,
                original_index: i,
            })
            .collect()
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(matches("World Trade Center", ""));
        let list = entries(&["A", "B", "C"]);
        assert_eq!(filter_indices(&list, ""), vec![0, 1, 2]);
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        assert!(matches("The Roosevelt Hotel", "roos"));
        assert!(matches("The Roosevelt Hotel", "ROOS"));
        assert!(!matches("Empire State Building", "roos"));
    }

    #[test]
    fn test_filter_keeps_canonical_order_and_indices() {
        let list = entries(&[
            "World Trade Center",
            "Empire State Building",
            "The Roosevelt Hotel",
            "Rockefeller Center",
        ]);

        assert_eq!(filter_indices(&list, "center"), vec![0, 3]);
        assert_eq!(filter_indices(&list, "roos"), vec![2]);
        assert_eq!(filter_indices(&list, "xyz"), Vec::<usize>::new());
    }

    #[test]
    fn test_unicode_titles_match_lowercased() {
        let list = entries(&["Münster Süd", "Berlin"]);
        assert_eq!(filter_indices(&list, "SÜD"), vec![0]);
    }
}
