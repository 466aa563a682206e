use crate::data_types::{catalog_types::Product, CartEntry};

/// Products awaiting checkout. Each product appears at most once
/// (implied quantity 1); insertion order is preserved for display.
#[derive(Debug, Default)]
pub struct CartStore {
    entries: Vec<CartEntry>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, product: Product) {
        if self.contains(product.id) {
            return;
        }
        self.entries.push(CartEntry { product });
    }

    pub fn remove(&mut self, product_id: u64) {
        self.entries.retain(|entry| entry.product.id != product_id);
    }

    pub fn contains(&self, product_id: u64) -> bool {
        self.entries.iter().any(|entry| entry.product.id == product_id)
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_price(&self) -> f64 {
        self.entries.iter().map(|entry| entry.product.price).sum()
    }

    /// Cleared on checkout completion or explicit reset.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, name: &str, price: f64) -> Product {
        Product {
            id,
            name: name.into(),
            price,
            category_id: 1,
            unit_id: 1,
            image: None,
            description: None,
        }
    }

    #[test]
    fn add_is_idempotent_per_product() {
        let mut cart = CartStore::new();
        cart.add(product(1, "Chicken Bowl", 9.5));
        cart.add(product(1, "Chicken Bowl", 9.5));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut cart = CartStore::new();
        cart.add(product(2, "Veg Bowl", 8.0));
        cart.add(product(1, "Chicken Bowl", 9.5));
        let names: Vec<&str> = cart
            .entries()
            .iter()
            .map(|e| e.product.name.as_str())
            .collect();
        assert_eq!(names, vec!["Veg Bowl", "Chicken Bowl"]);
    }

    #[test]
    fn total_sums_unit_prices_and_clear_empties() {
        let mut cart = CartStore::new();
        cart.add(product(1, "Chicken Bowl", 9.5));
        cart.add(product(2, "Veg Bowl", 8.0));
        assert!((cart.total_price() - 17.5).abs() < f64::EPSILON);

        cart.remove(1);
        assert!(!cart.contains(1));
        assert_eq!(cart.len(), 1);

        cart.clear();
        assert!(cart.is_empty());
    }
}
