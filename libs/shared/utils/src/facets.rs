use std::collections::HashSet;

/// Distinct values of `key` across `items`, in first-seen order.
pub fn distinct_by<'a, T, I, F>(items: I, key: F) -> Vec<String>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> &str,
{
    let mut seen = HashSet::new();
    let mut values = Vec::new();

    for item in items {
        let value = key(item);
        if seen.insert(value.to_string()) {
            values.push(value.to_string());
        }
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_by_preserves_first_seen_order() {
        let labels = vec!["b", "a", "b", "c", "a"];
        let values = distinct_by(&labels, |s| *s);
        assert_eq!(values, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_distinct_by_empty_input() {
        let labels: Vec<&str> = Vec::new();
        assert!(distinct_by(&labels, |s| *s).is_empty());
    }
}
