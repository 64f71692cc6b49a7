/// Returns `true` when any two elements of `items` compare equal.
///
/// Only `PartialEq` is required so float slices work too. The check is
/// pairwise, which is fine for the short lists this is meant for.
pub fn contains_duplicates<T: PartialEq>(items: &[T]) -> bool {
    items
        .iter()
        .enumerate()
        .any(|(idx, item)| items[idx + 1..].contains(item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slice_has_no_duplicates() {
        let empty: [&str; 0] = [];
        assert!(!contains_duplicates(&empty));
    }

    #[test]
    fn detects_duplicate_strings() {
        assert!(!contains_duplicates(&["apple", "banana", "cherry"]));
        assert!(contains_duplicates(&["apple", "banana", "apple"]));
    }

    #[test]
    fn detects_duplicate_integers() {
        assert!(!contains_duplicates(&[1, 2, 3, 4]));
        assert!(contains_duplicates(&[1, 2, 2, 3]));
    }

    #[test]
    fn detects_duplicate_floats() {
        assert!(!contains_duplicates(&[1.1, 2.2, 3.3]));
        assert!(contains_duplicates(&[1.1, 2.2, 1.1]));
    }

    #[test]
    fn nan_never_equals_itself() {
        assert!(!contains_duplicates(&[f64::NAN, f64::NAN]));
    }
}
