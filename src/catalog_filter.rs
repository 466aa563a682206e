use std::collections::BTreeSet;

use crate::data_types::catalog_types::Product;

/// Three independent facets. An empty set for a facet means "no
/// filtering on that facet", not "exclude everything".
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub search: String,
    pub categories: BTreeSet<u32>,
    pub units: BTreeSet<u32>,
}

/// Intersection of the three facets, input order preserved.
pub fn filter_products<'a>(products: &'a [Product], filter: &ProductFilter) -> Vec<&'a Product> {
    let needle = filter.search.to_lowercase();

    products
        .iter()
        .filter(|product| needle.is_empty() || product.name.to_lowercase().contains(&needle))
        .filter(|product| {
            filter.categories.is_empty() || filter.categories.contains(&product.category_id)
        })
        .filter(|product| filter.units.is_empty() || filter.units.contains(&product.unit_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, name: &str, category_id: u32, unit_id: u32) -> Product {
        Product {
            id,
            name: name.into(),
            price: 5.0,
            category_id,
            unit_id,
            image: None,
            description: None,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Chicken Bowl", 1, 10),
            product(2, "Veg Bowl", 2, 10),
            product(3, "CHICKEN Wrap", 1, 20),
        ]
    }

    #[test]
    fn empty_filter_returns_everything_in_order() {
        let products = catalog();
        let visible = filter_products(&products, &ProductFilter::default());
        let ids: Vec<u64> = visible.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn search_is_case_insensitive_containment() {
        let products = catalog();
        let filter = ProductFilter {
            search: "chicken".into(),
            ..ProductFilter::default()
        };
        let names: Vec<&str> = filter_products(&products, &filter)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Chicken Bowl", "CHICKEN Wrap"]);
    }

    #[test]
    fn search_over_two_bowls_matches_only_the_chicken_one() {
        let products = vec![
            product(1, "Chicken Bowl", 1, 10),
            product(2, "Veg Bowl", 2, 10),
        ];
        let filter = ProductFilter {
            search: "chicken".into(),
            ..ProductFilter::default()
        };
        let visible = filter_products(&products, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Chicken Bowl");
    }

    #[test]
    fn facets_intersect() {
        let products = catalog();
        let filter = ProductFilter {
            search: String::new(),
            categories: BTreeSet::from([1]),
            units: BTreeSet::from([10]),
        };
        let ids: Vec<u64> = filter_products(&products, &filter)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn empty_facet_set_means_facet_off() {
        let products = catalog();
        let filter = ProductFilter {
            search: String::new(),
            categories: BTreeSet::new(),
            units: BTreeSet::from([20]),
        };
        let ids: Vec<u64> = filter_products(&products, &filter)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![3]);
    }
}
