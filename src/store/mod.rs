use crate::models::Product;
use crate::seed;

// ── ProductStore: the in-memory catalogue ────────────────────────────────────

/// Ordered, in-memory sequence of products.
///
/// - Lookups are linear scans returning the *first* record with a matching
///   `product_id`; ids are not unique.
/// - `insert` always appends, duplicates included.
/// - `replace` swaps the whole record in place, id included.
/// - `remove` moves the last record into the freed slot, so order is only
///   preserved when the tail is removed.
///
/// The store itself is not synchronized; `AppState` wraps it in a lock.
#[derive(Debug, Default)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Store pre-loaded with the sample catalogue.
    pub fn seeded() -> Self {
        Self::new(seed::sample_products())
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn find(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.product_id == id)
    }

    pub fn insert(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Returns `false` when no record carries `id`.
    pub fn replace(&mut self, id: i64, product: Product) -> bool {
        match self.position(id) {
            Some(idx) => {
                self.products[idx] = product;
                true
            }
            None => false,
        }
    }

    /// Returns the removed record, or `None` when no record carries `id`.
    pub fn remove(&mut self, id: i64) -> Option<Product> {
        self.position(id).map(|idx| self.products.swap_remove(idx))
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.products.iter().position(|p| p.product_id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(id: i64, name: &str) -> Product {
        Product {
            product_id: id,
            product_name: name.to_string(),
            ..Default::default()
        }
    }

    fn ids(store: &ProductStore) -> Vec<i64> {
        store.all().iter().map(|p| p.product_id).collect()
    }

    // ── Lookup ─────────────────────────────────────────────────────────────────

    #[test]
    fn find_returns_first_match() {
        let store = ProductStore::new(vec![named(7, "first"), named(7, "second")]);
        assert_eq!(store.find(7).unwrap().product_name, "first");
    }

    #[test]
    fn find_missing_is_none() {
        assert!(ProductStore::seeded().find(8).is_none());
    }

    // ── Insert ─────────────────────────────────────────────────────────────────

    #[test]
    fn insert_appends_duplicates() {
        let mut store = ProductStore::seeded();
        store.insert(named(1, "copy"));
        assert_eq!(ids(&store), vec![1, 2, 3, 1]);
        assert_eq!(store.len(), 4);
    }

    // ── Replace ────────────────────────────────────────────────────────────────

    #[test]
    fn replace_keeps_position_and_overwrites_id() {
        let mut store = ProductStore::seeded();
        assert!(store.replace(2, named(4, "Firefighter Stuff")));
        assert_eq!(ids(&store), vec![1, 4, 3]);
        assert!(store.find(2).is_none());
    }

    #[test]
    fn replace_is_a_full_overwrite() {
        let mut store = ProductStore::seeded();
        store.replace(3, named(3, "Bare"));
        assert_eq!(store.find(3), Some(&named(3, "Bare")));
    }

    #[test]
    fn replace_missing_leaves_store_untouched() {
        let mut store = ProductStore::seeded();
        assert!(!store.replace(8, named(8, "ghost")));
        assert_eq!(ids(&store), vec![1, 2, 3]);
    }

    // ── Remove ─────────────────────────────────────────────────────────────────

    #[test]
    fn remove_middle_swaps_in_last() {
        let mut store = ProductStore::new(vec![
            named(1, "a"),
            named(2, "b"),
            named(3, "c"),
            named(4, "d"),
        ]);
        let removed = store.remove(2).unwrap();
        assert_eq!(removed.product_name, "b");
        assert_eq!(ids(&store), vec![1, 4, 3]);
    }

    #[test]
    fn remove_tail_preserves_order() {
        let mut store = ProductStore::seeded();
        store.remove(3);
        assert_eq!(ids(&store), vec![1, 2]);
    }

    #[test]
    fn remove_takes_only_one_duplicate() {
        let mut store = ProductStore::new(vec![named(5, "x"), named(5, "y")]);
        store.remove(5);
        assert_eq!(store.len(), 1);
        assert_eq!(store.find(5).unwrap().product_name, "y");
    }

    #[test]
    fn remove_missing_is_none() {
        let mut store = ProductStore::default();
        assert!(store.remove(1).is_none());
    }
}
