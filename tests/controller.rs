// tests/controller.rs
//
// FilterController contract: idempotent mutators, reset/clear equivalences,
// defensive handling of arbitrary category strings.
//
use shopfront::catalog::Product;
use shopfront::filter::{CATEGORY_ALL, FilterController, FilterState};

fn fixture() -> Vec<Product> {
    vec![
        Product::new("400 Robux",     "$4.99",  &["robux"],            "robux 400"),
        Product::new("800 Robux",     "$9.99",  &["robux"],            "robux 800"),
        Product::new("$25 Gift Card", "$25.00", &["giftcard"],         "gift card code"),
        Product::new("Premium 450",   "$4.99",  &["premium", "robux"], "premium subscription robux"),
    ]
}

#[test]
fn set_category_is_idempotent() {
    let mut ctl = FilterController::new(fixture());

    ctl.set_category("robux");
    let once = ctl.pass().row_ix.clone();
    ctl.set_category("robux");
    assert_eq!(ctl.pass().row_ix, once);
}

#[test]
fn reset_equals_wildcard_plus_empty_term() {
    let mut a = FilterController::new(fixture());
    let mut b = FilterController::new(fixture());

    a.set_category("giftcard");
    a.set_term("card");
    a.reset();

    b.set_category("giftcard");
    b.set_term("card");
    b.set_category(CATEGORY_ALL);
    b.set_term("");

    assert_eq!(a.state(), b.state());
    assert_eq!(a.pass().row_ix, b.pass().row_ix);
    assert_eq!(a.state(), &FilterState::default());
    assert_eq!(a.pass().visible_count(), 4);
}

#[test]
fn clear_restores_the_category_only_set() {
    let mut ctl = FilterController::new(fixture());

    ctl.set_category("robux");
    let category_only = ctl.pass().row_ix.clone();

    ctl.set_term("zzz-no-match");
    assert!(ctl.pass().is_empty());

    ctl.clear();
    assert_eq!(ctl.state().term, "");
    assert_eq!(ctl.state().category, "robux", "clear must not touch the category");
    assert_eq!(ctl.pass().row_ix, category_only);
}

#[test]
fn unknown_categories_match_nothing() {
    let mut ctl = FilterController::new(fixture());

    for odd in ["does-not-exist", "", "ROBUX", "robux "] {
        ctl.set_category(odd);
        assert!(ctl.pass().is_empty(), "category {odd:?} should match nothing");
    }

    // and the controller is still usable afterwards
    ctl.set_category(CATEGORY_ALL);
    assert_eq!(ctl.pass().visible_count(), 4);
}

#[test]
fn term_is_trimmed_and_lowercased_on_entry() {
    let mut ctl = FilterController::new(fixture());

    ctl.set_term("  RoBuX  ");
    assert_eq!(ctl.state().term, "robux");
    assert_eq!(ctl.pass().visible_count(), 3);
}

#[test]
fn multi_tag_products_match_each_of_their_tags() {
    let mut ctl = FilterController::new(fixture());

    ctl.set_category("premium");
    assert_eq!(ctl.pass().visible_count(), 1);

    ctl.set_category("robux");
    let titles: Vec<&str> = ctl.visible().iter().map(|p| p.title.as_str()).collect();
    assert!(titles.contains(&"Premium 450"));
}

#[test]
fn visible_preserves_catalog_order() {
    let mut ctl = FilterController::new(fixture());
    ctl.set_term("robux");

    let titles: Vec<&str> = ctl.visible().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["400 Robux", "800 Robux", "Premium 450"]);
}
