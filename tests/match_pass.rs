// tests/match_pass.rs
//
// Match-pass properties: partition, wildcard, empty term, case folding,
// and the concrete catalog scenarios.
//
use shopfront::catalog::{self, Product};
use shopfront::filter::{CATEGORY_ALL, FilterController, FilterState, match_pass};

fn fixture() -> Vec<Product> {
    vec![
        Product::new("Adventure Gamepass", "$7.99",  &["gamepass"], "gamepass adventure"),
        Product::new("Battle Gamepass",    "$9.99",  &["gamepass"], "gamepass battle"),
        Product::new("$10 Gift Card",      "$10.00", &["giftcard"], "gift card code"),
        Product::new("$25 Gift Card",      "$25.00", &["giftcard"], "gift card code"),
        Product::new("$50 Gift Card",      "$50.00", &["giftcard"], "gift card code"),
    ]
}

#[test]
fn pass_partitions_items_exactly() {
    let products = fixture();
    let combos = [
        (CATEGORY_ALL, ""),
        ("gamepass", ""),
        ("giftcard", "50"),
        ("giftcard", "zzz-no-match"),
        ("unknown", "card"),
    ];

    for (category, term) in combos {
        let state = FilterState { category: category.into(), term: term.into() };
        let pass = match_pass(&products, &state);

        assert_eq!(pass.keep.len(), products.len());
        let kept = pass.keep.iter().filter(|&&k| k).count();
        assert_eq!(kept, pass.visible_count(), "count must equal kept verdicts");
        assert!(pass.row_ix.iter().all(|&ix| pass.keep[ix]), "row_ix must point at kept items");
    }
}

#[test]
fn wildcard_matches_every_item() {
    let mut ctl = FilterController::new(fixture());
    ctl.set_category(CATEGORY_ALL);
    assert_eq!(ctl.pass().visible_count(), 5);
}

#[test]
fn empty_term_matches_every_item() {
    let mut ctl = FilterController::new(fixture());
    ctl.set_term("");
    assert_eq!(ctl.pass().visible_count(), 5);
}

#[test]
fn search_is_case_insensitive() {
    // Spec example, on the real catalog: ROBUX and robux are the same query
    let mut upper = FilterController::new(catalog::builtin());
    let mut lower = FilterController::new(catalog::builtin());
    upper.set_term("ROBUX");
    lower.set_term("robux");

    assert!(!upper.pass().is_empty());
    assert_eq!(upper.pass().row_ix, lower.pass().row_ix);
}

#[test]
fn category_scenario_two_of_five() {
    let mut ctl = FilterController::new(fixture());
    ctl.set_category("gamepass");

    assert_eq!(ctl.pass().visible_count(), 2);
    assert!(!ctl.pass().is_empty(), "no-products message must stay hidden");
    let titles: Vec<&str> = ctl.visible().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Adventure Gamepass", "Battle Gamepass"]);
}

#[test]
fn search_scenario_term_50() {
    let mut ctl = FilterController::new(fixture());
    ctl.set_term("50");

    assert_eq!(ctl.pass().visible_count(), 1);
    assert_eq!(ctl.visible()[0].title, "$50 Gift Card");
}

#[test]
fn search_scenario_no_match_shows_empty() {
    let mut ctl = FilterController::new(fixture());
    ctl.set_category("giftcard");
    ctl.set_term("zzz-no-match");

    assert_eq!(ctl.pass().visible_count(), 0);
    assert!(ctl.pass().is_empty(), "zero results must raise the no-products condition");
}

#[test]
fn search_also_covers_secondary_text() {
    // "adventure" is in one title; "battle" is in a title and a search blob;
    // "code" only lives in search_text.
    let mut ctl = FilterController::new(fixture());
    ctl.set_term("code");
    assert_eq!(ctl.pass().visible_count(), 3);
}

#[test]
fn category_and_term_combine_with_and() {
    let mut ctl = FilterController::new(fixture());
    ctl.set_category("giftcard");
    ctl.set_term("25");
    assert_eq!(ctl.pass().visible_count(), 1);

    // Same term under the other category: nothing
    ctl.set_category("gamepass");
    assert!(ctl.pass().is_empty());
}
