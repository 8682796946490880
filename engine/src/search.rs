//! Search filter over the catalog.

use crate::{Catalog, Product};
use std::sync::Arc;

/// Filter the catalog by a case-insensitive substring match on product name.
///
/// An empty query returns the whole catalog. Matches keep catalog order.
/// The query is not trimmed.
pub fn filter(catalog: &Catalog, query: &str) -> Vec<Arc<Product>> {
    if query.is_empty() {
        return catalog.products().to_vec();
    }

    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|p| p.name_contains_folded(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_catalog() -> Catalog {
        Catalog::new(vec![
            Product::new(1, "Portal Gun", "", 10.0, ""),
            Product::new(2, "Plumbus", "", 5.0, ""),
            Product::new(3, "Plumbus Deluxe", "", 50.0, ""),
        ])
        .unwrap()
    }

    fn ids(products: &[Arc<Product>]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn empty_query_returns_everything() {
        let catalog = test_catalog();
        assert_eq!(ids(&filter(&catalog, "")), vec![1, 2, 3]);
    }

    #[test]
    fn substring_match() {
        let catalog = test_catalog();
        assert_eq!(ids(&filter(&catalog, "plum")), vec![2, 3]);
        assert_eq!(ids(&filter(&catalog, "gun")), vec![1]);
    }

    #[test]
    fn case_insensitive() {
        let catalog = test_catalog();
        assert_eq!(ids(&filter(&catalog, "PLUMBUS")), vec![2, 3]);
        assert_eq!(ids(&filter(&catalog, "pOrTaL")), vec![1]);
    }

    #[test]
    fn no_match() {
        let catalog = test_catalog();
        assert!(filter(&catalog, "zzz").is_empty());
    }

    #[test]
    fn whitespace_query_is_not_trimmed() {
        let catalog = test_catalog();
        // Only names containing a space match
        assert_eq!(ids(&filter(&catalog, " ")), vec![1, 3]);
        assert!(filter(&catalog, "   ").is_empty());
    }

    #[test]
    fn shares_catalog_products() {
        let catalog = test_catalog();
        let result = filter(&catalog, "gun");
        assert!(Arc::ptr_eq(&result[0], catalog.get(1).unwrap()));
    }

    #[test]
    fn unicode_case_folding() {
        let catalog = Catalog::new(vec![
            Product::new(1, "Портальная пушка", "", 1.0, ""),
            Product::new(2, "Плюмбус", "", 1.0, ""),
        ])
        .unwrap();

        assert_eq!(ids(&filter(&catalog, "ПЛЮМ")), vec![2]);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_catalog() -> impl Strategy<Value = Catalog> {
            prop::collection::vec("[a-zA-Z ]{0,12}", 0..20).prop_map(|names| {
                let products = names
                    .into_iter()
                    .enumerate()
                    .map(|(i, name)| Product::new(i as u64, name, "", 1.0, ""))
                    .collect();
                Catalog::new(products).unwrap()
            })
        }

        proptest! {
            #[test]
            fn prop_filter_is_ordered_subsequence(
                catalog in arb_catalog(),
                query in "[a-zA-Z ]{0,3}",
            ) {
                let result = filter(&catalog, &query);

                // Ids are assigned in catalog order, so a strictly increasing
                // id sequence is an order-preserving subsequence
                let result_ids = ids(&result);
                prop_assert!(result_ids.windows(2).all(|w| w[0] < w[1]));
                prop_assert!(result_ids.iter().all(|id| catalog.contains(*id)));
            }

            #[test]
            fn prop_filter_matches_name(
                catalog in arb_catalog(),
                query in "[a-zA-Z ]{0,3}",
            ) {
                let result = filter(&catalog, &query);
                let needle = query.to_lowercase();

                for product in &result {
                    prop_assert!(product.name.to_lowercase().contains(&needle));
                }

                let expected = catalog
                    .iter()
                    .filter(|p| p.name.to_lowercase().contains(&needle))
                    .count();
                prop_assert_eq!(result.len(), expected);
            }

            #[test]
            fn prop_empty_query_is_identity(catalog in arb_catalog()) {
                let result = filter(&catalog, "");
                prop_assert_eq!(result.len(), catalog.len());
                for (a, b) in result.iter().zip(catalog.iter()) {
                    prop_assert!(Arc::ptr_eq(a, b));
                }
            }
        }
    }
}
