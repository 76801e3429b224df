//! Session catalog: the ordered, search-ready item list.

use crate::vault::ItemRecord;

/// An item paired with the session's secrets-revealing flag.
///
/// Built once per browsing session by `build_catalog` and immutable
/// afterwards; every row shares the same flag value, so there is no
/// per-row mutable display state.
pub struct DisplayItem {
    pub record: ItemRecord,
    pub show_secrets: bool,
}

/// Order the raw item list and wrap each record for display.
///
/// Ordering (total, stable): non-trashed before trashed, then
/// ascending by category, then ascending by title (byte order).
/// The browse UI never re-sorts after this.
pub fn build_catalog(mut items: Vec<ItemRecord>, show_secrets: bool) -> Vec<DisplayItem> {
    items.sort_by(|a, b| {
        a.trashed
            .cmp(&b.trashed)
            .then(a.category.cmp(&b.category))
            .then_with(|| a.title.cmp(&b.title))
    });

    items
        .into_iter()
        .map(|record| DisplayItem {
            record,
            show_secrets,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::Category;

    fn item(title: &str, category: Category, trashed: bool) -> ItemRecord {
        ItemRecord {
            title: title.into(),
            category,
            trashed,
            ..ItemRecord::default()
        }
    }

    #[test]
    fn trashed_items_sort_last() {
        let catalog = build_catalog(
            vec![
                item("a", Category::Login, true),
                item("b", Category::Login, false),
                item("c", Category::Other, false),
            ],
            false,
        );

        let trashed: Vec<bool> = catalog.iter().map(|d| d.record.trashed).collect();
        assert_eq!(trashed, vec![false, false, true]);
    }

    #[test]
    fn sorts_by_category_then_title() {
        let catalog = build_catalog(
            vec![
                item("zulu", Category::Login, false),
                item("alpha", Category::SecureNote, false),
                item("mike", Category::Login, false),
            ],
            false,
        );

        let titles: Vec<&str> = catalog.iter().map(|d| d.record.title.as_str()).collect();
        assert_eq!(titles, vec!["mike", "zulu", "alpha"]);
    }

    #[test]
    fn ordering_is_a_total_order() {
        let catalog = build_catalog(
            vec![
                item("b", Category::Other, true),
                item("a", Category::Login, true),
                item("b", Category::Login, false),
                item("a", Category::Other, false),
                item("a", Category::Login, false),
            ],
            false,
        );

        for pair in catalog.windows(2) {
            let (l, r) = (&pair[0].record, &pair[1].record);
            let left_key = (l.trashed, l.category, l.title.as_str());
            let right_key = (r.trashed, r.category, r.title.as_str());
            assert!(left_key <= right_key, "{left_key:?} > {right_key:?}");
        }
    }

    #[test]
    fn show_secrets_flag_propagates_to_every_row() {
        let catalog = build_catalog(vec![item("a", Category::Login, false)], true);
        assert!(catalog[0].show_secrets);
    }
}
