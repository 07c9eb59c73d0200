// src/filter.rs
//
// The filter controller: a flat (category, term) state plus the match pass
// that re-partitions the catalog into visible/hidden on every mutation.
//
// - FilterState: the two fields, owned by the controller (no module-level
//   state, so several independent controllers can coexist in tests).
// - MatchPass: one full evaluation — per-item verdicts and the kept row
//   indices, in catalog order.
// - FilterController: the mutators; each one recomputes the pass.

use crate::catalog::Product;

/// Wildcard category: matches every item.
pub const CATEGORY_ALL: &str = "all";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    /// Active tag, or `CATEGORY_ALL`. Any string is accepted; an unknown
    /// tag simply matches nothing.
    pub category: String,
    /// Normalized (trimmed, lowercased) search term. Empty = no search.
    pub term: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self { category: s!(CATEGORY_ALL), term: s!() }
    }
}

impl FilterState {
    pub fn is_wildcard(&self) -> bool {
        self.category == CATEGORY_ALL
    }
}

/// Result of evaluating the predicate against every product.
#[derive(Clone, Debug, Default)]
pub struct MatchPass {
    /// Per-item verdict, index-aligned with the catalog.
    pub keep: Vec<bool>,
    /// Positions of kept items, in catalog order.
    pub row_ix: Vec<usize>,
}

impl MatchPass {
    pub fn visible_count(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    pub fn is_visible(&self, ix: usize) -> bool {
        self.keep.get(ix).copied().unwrap_or(false)
    }
}

/// Evaluate the predicate for one product.
///
/// matches_filter: wildcard, or exact membership of the active tag.
/// matches_search: empty term, or case-insensitive substring of the title
/// or of the secondary search text.
fn matches(product: &Product, state: &FilterState) -> bool {
    let matches_filter = state.is_wildcard() || product.has_category(&state.category);

    let matches_search = state.term.is_empty()
        || product.title.to_lowercase().contains(&state.term)
        || product.search_text.to_lowercase().contains(&state.term);

    matches_filter && matches_search
}

/// Run the full match pass: a linear scan, one verdict per product.
pub fn match_pass(products: &[Product], state: &FilterState) -> MatchPass {
    let mut keep = Vec::with_capacity(products.len());
    let mut row_ix = Vec::new();

    for (ix, p) in products.iter().enumerate() {
        let kept = matches(p, state);
        keep.push(kept);
        if kept {
            row_ix.push(ix);
        }
    }

    MatchPass { keep, row_ix }
}

/// Owns the fixed product list and the filter state; recomputes the pass on
/// every mutation. The GUI and CLI both drive the catalog through this.
pub struct FilterController {
    products: Vec<Product>,
    state: FilterState,
    pass: MatchPass,
}

impl FilterController {
    pub fn new(products: Vec<Product>) -> Self {
        let state = FilterState::default();
        let pass = match_pass(&products, &state);
        Self { products, state, pass }
    }

    pub fn products(&self) -> &[Product] { &self.products }
    pub fn state(&self) -> &FilterState { &self.state }
    pub fn pass(&self) -> &MatchPass { &self.pass }

    pub fn product(&self, ix: usize) -> Option<&Product> {
        self.products.get(ix)
    }

    /// Materialize the currently visible products (for display/export).
    pub fn visible(&self) -> Vec<&Product> {
        self.pass.row_ix.iter().filter_map(|&ix| self.products.get(ix)).collect()
    }

    /// Set the active category. Any string is accepted verbatim; unknown
    /// tags match nothing.
    pub fn set_category(&mut self, category: &str) {
        self.state.category = s!(category);
        self.recompute();
    }

    /// Normalize (trim + lowercase) and store the search term.
    pub fn set_term(&mut self, term: &str) {
        self.state.term = term.trim().to_lowercase();
        self.recompute();
    }

    /// Drop the search term, keep the category filter.
    pub fn clear(&mut self) {
        self.state.term = s!();
        self.recompute();
    }

    /// Back to defaults: wildcard category, empty term.
    pub fn reset(&mut self) {
        self.state = FilterState::default();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.pass = match_pass(&self.products, &self.state);
        logd!(
            "Filter: category=\"{}\" term=\"{}\" visible={}/{}",
            self.state.category,
            self.state.term,
            self.pass.visible_count(),
            self.products.len()
        );
    }
}
