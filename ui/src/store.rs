//! The client-side copy of the tracked product list.
//!
//! Every view of the list is derived from `ProductStore`, so reloads and
//! deletions always agree on which products exist. Loads are stamped with a
//! generation: only the newest load may replace the list, and products
//! deleted while it was in flight stay deleted when it lands.

use crate::types::{Product, ProductId};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

impl fmt::Display for LoadTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Default)]
pub struct ProductStore {
    products: Vec<Product>,
    generation: u64,
    tombstones: HashSet<ProductId>,
    deleting: HashSet<ProductId>,
}

impl ProductStore {
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.products.iter().any(|p| &p.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.tombstones.clear();
        LoadTicket(self.generation)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Replaces the list with a server response, keeping server order.
    /// Returns false if a newer load has started since `ticket` was issued.
    pub fn finish_load(&mut self, ticket: LoadTicket, mut products: Vec<Product>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        products.retain(|p| !self.tombstones.contains(&p.id));
        self.products = products;
        true
    }

    pub fn clear(&mut self) {
        self.products.clear();
    }

    /// Drops a deleted product. The tombstone is kept even when the product
    /// is not listed, since an in-flight load may still bring it back.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        self.tombstones.insert(id.clone());
        let before = self.products.len();
        self.products.retain(|p| &p.id != id);
        self.products.len() != before
    }

    /// Marks a delete as in flight. False if one is already pending for `id`.
    pub fn begin_delete(&mut self, id: ProductId) -> bool {
        self.deleting.insert(id)
    }

    pub fn end_delete(&mut self, id: &ProductId) {
        self.deleting.remove(id);
    }

    pub fn is_deleting(&self, id: &ProductId) -> bool {
        self.deleting.contains(id)
    }
}
