// 🔤 Display-string ordering
//
// Orders anything displayable by its lower-cased display string.
// Sorting is stable: equal strings keep their original order.

use std::cmp::Ordering;
use std::fmt::Display;

/// Compare two values by their display strings, ignoring case
pub fn compare_display_ci<T: Display + ?Sized>(a: &T, b: &T) -> Ordering {
    a.to_string().to_lowercase().cmp(&b.to_string().to_lowercase())
}

/// Sort in place by case-insensitive display string, ascending.
///
/// Same order as `compare_display_ci`, but each key is built only once.
pub fn sort_by_display<T: Display>(items: &mut [T]) {
    items.sort_by_cached_key(|item| item.to_string().to_lowercase());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_ignores_case() {
        assert_eq!(compare_display_ci("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_display_ci("ACME", "acme"), Ordering::Equal);
        assert_eq!(compare_display_ci("zeta", "Alpha"), Ordering::Greater);
    }

    #[test]
    fn test_sort_by_display() {
        let mut items = vec!["banana", "Cherry", "apple", "Banana2"];
        sort_by_display(&mut items);
        assert_eq!(items, vec!["apple", "banana", "Banana2", "Cherry"]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        // Same display string, different identities: original order is kept
        let mut items = vec![("b", 1), ("A", 2), ("a", 3), ("B", 4)];
        let mut displayed: Vec<Tagged> = items.drain(..).map(|(s, n)| Tagged(s, n)).collect();
        sort_by_display(&mut displayed);

        let order: Vec<u32> = displayed.iter().map(|t| t.1).collect();
        assert_eq!(order, vec![2, 3, 1, 4]);
    }

    #[test]
    fn test_sorted_adjacent_pairs_are_ordered() {
        let mut items = vec!["Saint Louis", "kansas city", "Boston", "austin", "Remote"];
        sort_by_display(&mut items);
        for pair in items.windows(2) {
            assert!(pair[0].to_lowercase() <= pair[1].to_lowercase());
        }
    }

    struct Tagged(&'static str, u32);

    impl Display for Tagged {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.0)
        }
    }
}
