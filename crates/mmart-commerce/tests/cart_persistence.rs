//! Cart behavior across simulated page reloads.
//!
//! Each "reload" builds a fresh `CartStore` over a clone of the same
//! in-memory backend, the way a new page load reads `localStorage`.

use mmart_cache::{KeyValueStore, MemoryStore};
use mmart_commerce::prelude::*;

fn naira(amount: i64) -> Money {
    Money::from_major(amount, Currency::NGN)
}

fn line(id: u64, price: i64, quantity: i64) -> CartLine {
    CartLine::new(id, format!("Product {id}"), naira(price), format!("/p/{id}.png"), quantity)
}

#[test]
fn totals_match_worked_example() {
    let mut cart = CartStore::load(MemoryStore::new());
    cart.add_to_cart(line(1, 1200, 2)).unwrap();
    cart.add_to_cart(line(1, 1200, 1)).unwrap();
    cart.add_to_cart(line(2, 500, 1)).unwrap();

    assert_eq!(cart.cart_total(), naira(4100));
    assert_eq!(cart.cart_count(), 4);
}

#[test]
fn repeated_adds_keep_one_line_per_product() {
    let mut cart = CartStore::load(MemoryStore::new());
    let quantities = [1, 4, 2, 7, 1];
    for q in quantities {
        cart.add_to_cart(line(3, 250, q)).unwrap();
    }

    let matching: Vec<_> = cart
        .lines()
        .iter()
        .filter(|l| l.product_id == ProductId::new(3))
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].quantity, quantities.iter().sum::<i64>());
}

#[test]
fn totals_track_every_mutation() {
    let mut cart = CartStore::load(MemoryStore::new());
    cart.add_to_cart(line(1, 100, 1)).unwrap();
    cart.add_to_cart(line(2, 330, 3)).unwrap();
    cart.add_to_cart(line(3, 75, 2)).unwrap();
    cart.update_quantity(ProductId::new(2), 1).unwrap();
    cart.remove_from_cart(ProductId::new(3)).unwrap();

    let expected: i64 = cart
        .lines()
        .iter()
        .map(|l| l.unit_price.amount_minor * l.quantity)
        .sum();
    assert_eq!(cart.cart_total().amount_minor, expected);
    assert_eq!(cart.cart_total(), naira(430));
    assert_eq!(cart.cart_count(), 2);
}

#[test]
fn added_line_survives_reload() {
    let backend = MemoryStore::new();
    let added = line(5, 7500, 2).with_specification("Weight", "5kg");

    {
        let mut cart = CartStore::load(backend.clone());
        cart.add_to_cart(added.clone()).unwrap();
    }

    let reloaded = CartStore::load(backend);
    assert_eq!(reloaded.lines(), &[added]);
}

#[test]
fn cleared_cart_reloads_empty() {
    let backend = MemoryStore::new();
    {
        let mut cart = CartStore::load(backend.clone());
        cart.add_to_cart(line(1, 1200, 1)).unwrap();
        cart.clear_cart().unwrap();
    }

    assert!(CartStore::load(backend.clone()).is_empty());
    assert!(backend.is_empty());
}

#[test]
fn rejected_update_does_not_touch_storage() {
    let backend = MemoryStore::new();
    let mut cart = CartStore::load(backend.clone());
    cart.add_to_cart(line(1, 1200, 2)).unwrap();
    let before = backend.get(CART_STORAGE_KEY).unwrap();

    assert!(matches!(
        cart.update_quantity(ProductId::new(1), 0),
        Err(CommerceError::InvalidQuantity(0))
    ));
    assert_eq!(backend.get(CART_STORAGE_KEY).unwrap(), before);
    assert_eq!(CartStore::load(backend).line(ProductId::new(1)).unwrap().quantity, 2);
}

#[test]
fn corrupt_storage_starts_empty_and_heals() {
    let backend = MemoryStore::with_entry(CART_STORAGE_KEY, "definitely not json");
    let mut cart = CartStore::load(backend.clone());
    assert!(cart.is_empty());
    assert!(cart.recovered_from_corruption());

    cart.add_to_cart(line(2, 500, 1)).unwrap();
    let reloaded = CartStore::load(backend);
    assert!(!reloaded.recovered_from_corruption());
    assert_eq!(reloaded.cart_count(), 1);
}

#[test]
fn summary_uses_cart_contents() {
    let mut cart = CartStore::load(MemoryStore::new());
    cart.add_to_cart(line(1, 1200, 3)).unwrap();
    cart.add_to_cart(line(2, 500, 1)).unwrap();

    let summary = cart
        .summary(DeliveryOption::HomeDelivery, &SummaryConfig::default())
        .unwrap();
    assert_eq!(summary.subtotal, cart.cart_total());
    assert_eq!(summary.total, naira(5100));
    assert_eq!(summary.item_count, cart.cart_count());
}

#[test]
fn catalog_product_goes_to_cart() {
    let food = Category::new_root(1, "Food & Groceries", "food-groceries");
    let mut honey = Product::new(8, "Pure Honey", 1, naira(4500), 3);
    honey.image_ref = "/honey.png".to_string();
    let sold_out = Product::new(9, "Palm Oil", 1, naira(3200), 0);
    let catalog = Catalog::new(vec![food], vec![honey, sold_out]);

    let mut cart = CartStore::load(MemoryStore::new());
    for product in catalog.products_in_category("food-groceries") {
        let _ = cart.add_product(product, 1);
    }

    assert_eq!(cart.line_count(), 1);
    assert_eq!(cart.lines()[0].image_ref, "/honey.png");
}
