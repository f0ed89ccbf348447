use crate::tracker::TrackerState;
use crate::types::{Product, ProductId};

pub const EMPTY_PLACEHOLDER: &str = "No products are being tracked yet. Add one above!";
pub const FAILED_PLACEHOLDER: &str = "Failed to load products.";

pub fn format_price(price: f64) -> String {
    format!("₹{:.2}", price)
}

/// What the product list region shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Loading,
    Failed,
    Empty,
    Cards(Vec<CardView>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: ProductId,
    pub dom_id: String,
    pub href: String,
    pub title: String,
    pub price_label: String,
    pub site: Option<String>,
    pub sid: Option<String>,
    pub checked_label: Option<String>,
    /// The backend's price check only accepts numeric ids.
    pub can_check_price: bool,
    pub deleting: bool,
}

impl CardView {
    fn new(product: &Product, state: &TrackerState) -> Self {
        Self {
            id: product.id.clone(),
            dom_id: format!("product-{}", product.id),
            href: product.url.clone(),
            title: product.url.clone(),
            price_label: format!("Target Price: {}", format_price(product.target_price)),
            site: product.site.clone(),
            sid: product.sid.clone(),
            checked_label: state
                .checked_prices
                .get(&product.id)
                .map(|price| format!("Current Price: {}", format_price(*price))),
            can_check_price: matches!(product.id, ProductId::Numeric(_)),
            deleting: state.store.is_deleting(&product.id),
        }
    }
}

impl ListView {
    pub fn from_state(state: &TrackerState) -> Self {
        if state.loading {
            ListView::Loading
        } else if state.load_failed {
            ListView::Failed
        } else if state.store.is_empty() {
            ListView::Empty
        } else {
            ListView::Cards(
                state
                    .store
                    .products()
                    .iter()
                    .map(|product| CardView::new(product, state))
                    .collect(),
            )
        }
    }
}
