use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProductId {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Numeric(id) => write!(f, "{}", id),
            ProductId::Text(id) => f.write_str(id),
        }
    }
}

/// A tracked product as returned by `GET /all`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "WireProduct")]
pub struct Product {
    pub id: ProductId,
    pub sid: Option<String>,
    pub site: Option<String>,
    pub url: String,
    pub target_price: f64,
}

// Records are normalized here so nothing past deserialization has to care
// which schema the backend spoke.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireProduct {
    Current(CurrentProduct),
    Legacy(LegacyProduct),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CurrentProduct {
    id: i64,
    sid: Option<String>,
    site: Option<String>,
    url: String,
    target_price: f64,
}

/// Early backend builds keyed products by store id only.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyProduct {
    sid: String,
    url: String,
    target_price: f64,
}

impl From<WireProduct> for Product {
    fn from(wire: WireProduct) -> Self {
        match wire {
            WireProduct::Current(p) => Product {
                id: ProductId::Numeric(p.id),
                sid: p.sid,
                site: p.site,
                url: p.url,
                target_price: p.target_price,
            },
            WireProduct::Legacy(p) => Product {
                id: ProductId::Text(p.sid.clone()),
                sid: Some(p.sid),
                site: None,
                url: p.url,
                target_price: p.target_price,
            },
        }
    }
}

/// Body of `POST /add`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub url: String,
    pub target_price: f64,
    pub user_email: String,
}

/// Raw values read from the add-product form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub url: String,
    pub target_price: String,
    pub user_email: String,
}

impl ProductForm {
    /// Non-numeric prices become NaN and are sent as-is (JSON `null`).
    pub fn into_new_product(self) -> NewProduct {
        let target_price = self.target_price.trim().parse().unwrap_or(f64::NAN);
        NewProduct {
            url: self.url,
            target_price,
            user_email: self.user_email,
        }
    }
}
