//! Integration tests for the storefront session.
//!
//! These drive a session line by line, the way the stdin loop does.

use std::io::Write;
use std::path::PathBuf;

use storefront::{AppError, Config, OutputFormat, Reply, Session};
use storefront_engine::{Catalog, IncrementPolicy, Product};

/// Test helper to create the two-product catalog used across scenarios.
fn create_test_catalog() -> Catalog {
    Catalog::new(vec![
        Product::new(1, "Portal Gun", "Slightly used", 10.0, "/img/gun.webp"),
        Product::new(2, "Plumbus", "Everyone has one", 5.0, "/img/plumbus.webp"),
    ])
    .unwrap()
}

fn run(session: &mut Session, line: &str) -> String {
    match session.handle_line(line).unwrap() {
        Reply::Output(text) => text,
        Reply::Quit => panic!("unexpected quit on {:?}", line),
    }
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_browse_add_and_checkout() {
        let mut session = Session::new(create_test_catalog(), &Config::default());

        run(&mut session, "add 1");
        run(&mut session, "add 1");
        let text = run(&mut session, "add 2");
        assert!(text.contains("[cart: 3]"));

        let text = run(&mut session, "cart");
        assert!(text.contains("| Total: 25.00 schmeckles"));

        let text = run(&mut session, "dec 2");
        assert!(!text.contains("| [2] Plumbus"));
        assert!(text.contains("| [1] Portal Gun  2 x"));

        let text = run(&mut session, "checkout");
        assert!(text.contains("Thank you for your purchase"));
        assert!(text.contains("2 x Portal Gun = 20.00 schmeckles"));
        assert!(!text.contains("Shopping cart"));

        let snapshot = session.shop().snapshot();
        assert!(snapshot.cart.is_empty());
        assert!(!snapshot.cart_open);
        assert_eq!(session.receipts().len(), 1);
    }

    #[test]
    fn test_search_then_clear() {
        let mut session = Session::new(create_test_catalog(), &Config::default());

        let text = run(&mut session, "search plum");
        assert!(text.contains("[2] Plumbus"));
        assert!(!text.contains("[1] Portal Gun"));

        let text = run(&mut session, "search   plum");
        assert!(text.contains("[2] Plumbus"));
        assert_eq!(session.shop().query(), "plum");

        let text = run(&mut session, "search zzz");
        assert!(text.contains("nothing matches"));

        let text = run(&mut session, "search");
        assert!(text.contains("[1] Portal Gun"));
        assert!(text.contains("[2] Plumbus"));
    }

    #[test]
    fn test_detail_buy_closes_overlay() {
        let mut session = Session::new(create_test_catalog(), &Config::default());

        let text = run(&mut session, "view 2");
        assert!(text.contains("+== Plumbus"));

        let text = run(&mut session, "buy");
        assert!(!text.contains("+== Plumbus"));
        assert_eq!(session.shop().cart().quantity_of(2), 1);
    }

    #[test]
    fn test_increment_policy_from_config() {
        let strict = Config::default();
        let lenient = Config {
            increment_policy: IncrementPolicy::AddIfMissing,
            ..Config::default()
        };

        let mut a = Session::new(create_test_catalog(), &strict);
        let mut b = Session::new(create_test_catalog(), &lenient);
        run(&mut a, "inc 1");
        run(&mut b, "inc 1");

        assert_eq!(a.shop().cart().quantity_of(1), 0);
        assert_eq!(b.shop().cart().quantity_of(1), 1);
    }

    #[test]
    fn test_json_intents_and_output() {
        let config = Config {
            output: OutputFormat::Json,
            ..Config::default()
        };
        let mut session = Session::new(create_test_catalog(), &config);

        let text = run(&mut session, r#"{"type": "addToCart", "productId": 1}"#);
        let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(value["cart"]["totalPrice"], 10.0);
        assert_eq!(value["cart"]["lines"][0]["lineTotal"], 10.0);
    }

    #[test]
    fn test_errors_are_recoverable() {
        let mut session = Session::new(create_test_catalog(), &Config::default());

        let err = session.handle_line("add 42").unwrap_err();
        assert!(matches!(err, AppError::Engine(_)));
        assert!(err.is_recoverable());

        let err = session.handle_line("dance").unwrap_err();
        assert!(matches!(err, AppError::BadCommand(_)));
        assert!(err.is_recoverable());

        // Session keeps working afterwards
        run(&mut session, "add 1");
        assert_eq!(session.shop().cart().total_item_count(), 1);
    }

    #[test]
    fn test_quit() {
        let mut session = Session::new(create_test_catalog(), &Config::default());
        assert_eq!(session.handle_line("quit").unwrap(), Reply::Quit);
    }
}

#[cfg(test)]
mod catalog_file_tests {
    use super::*;

    #[tokio::test]
    async fn test_load_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": 10, "name": "Meeseeks Box", "description": "Existence is pain", "price": 19.99, "imageUrl": "/m"}},
                {{"id": 11, "name": "Butter Robot", "description": "Passes butter", "price": 25.5, "imageUrl": "/b"}}
            ]"#
        )
        .unwrap();

        let config = Config {
            catalog_path: Some(file.path().to_path_buf()),
            ..Config::default()
        };
        let catalog = config.load_catalog().await.unwrap();
        assert_eq!(catalog.len(), 2);

        let mut session = Session::new(catalog, &config);
        let text = run(&mut session, "add 11");
        assert!(text.contains("[11] Butter Robot - 25.50 schmeckles  (in cart: 1)"));
    }

    #[tokio::test]
    async fn test_invalid_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let config = Config {
            catalog_path: Some(file.path().to_path_buf()),
            ..Config::default()
        };
        let result = config.load_catalog().await;
        assert!(matches!(result, Err(AppError::Engine(_))));
    }

    #[tokio::test]
    async fn test_missing_catalog_file() {
        let config = Config {
            catalog_path: Some(PathBuf::from("/no/such/catalog.json")),
            ..Config::default()
        };
        let result = config.load_catalog().await;
        assert!(matches!(result, Err(AppError::CatalogRead { .. })));
    }
}
