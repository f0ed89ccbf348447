//! Controller for the product tracker page.
//!
//! `Tracker` owns the page state and runs the create / delete / reload flows
//! against a `ProductApi`. It never touches the DOM: components read
//! `TrackerState` and get told to re-render through the change callback.

use crate::api::ProductApi;
use crate::error::ApiError;
use crate::notice::{NoticeKind, Notices};
use crate::store::ProductStore;
use crate::types::{ProductForm, ProductId};
use crate::view::format_price;
use std::cell::{Ref, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

pub const LOAD_FAILED_NOTICE: &str = "Error: Could not load tracked products. Is the backend running?";
pub const ADDED_NOTICE: &str = "Product added successfully!";
pub const DELETED_NOTICE: &str = "Product deleted successfully.";
pub const CONFIRM_DELETE_PROMPT: &str = "Are you sure you want to stop tracking this product?";

#[derive(Debug, Default)]
pub struct TrackerState {
    pub store: ProductStore,
    pub loading: bool,
    pub load_failed: bool,
    pub submitting: bool,
    /// Bumped after every successful add; the form clears itself on change.
    pub form_generation: u32,
    pub checked_prices: HashMap<ProductId, f64>,
    pub notices: Notices,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Declined,
    AlreadyPending,
    Deleted,
    Failed,
}

pub struct Tracker<A> {
    api: Rc<A>,
    state: Rc<RefCell<TrackerState>>,
    on_change: Rc<dyn Fn()>,
}

impl<A> Clone for Tracker<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            state: self.state.clone(),
            on_change: self.on_change.clone(),
        }
    }
}

impl<A> Tracker<A> {
    pub fn new(api: A, on_change: impl Fn() + 'static) -> Self {
        Self {
            api: Rc::new(api),
            state: Rc::new(RefCell::new(TrackerState::default())),
            on_change: Rc::new(on_change),
        }
    }

    pub fn state(&self) -> Ref<'_, TrackerState> {
        self.state.borrow()
    }

    pub fn dismiss(&self, notice: u32) {
        self.update(|s| s.notices.dismiss(notice));
    }

    fn update<R>(&self, f: impl FnOnce(&mut TrackerState) -> R) -> R {
        let result = f(&mut *self.state.borrow_mut());
        (self.on_change)();
        result
    }

    fn notify(&self, kind: NoticeKind, message: impl Into<String>) {
        self.update(|s| {
            s.notices.push(kind, message);
        });
    }

    /// Runs `release` when the returned guard drops, on every exit path.
    fn on_exit(&self, release: impl FnOnce(&mut TrackerState) + 'static) -> ExitGuard {
        ExitGuard {
            state: self.state.clone(),
            on_change: self.on_change.clone(),
            release: Some(Box::new(release)),
        }
    }
}

impl<A: ProductApi> Tracker<A> {
    /// Fetches the full list and makes it the only render source.
    pub async fn load_products(&self) {
        let ticket = self.update(|s| {
            s.loading = true;
            s.load_failed = false;
            s.store.begin_load()
        });
        let _loading = self.on_exit(move |s| {
            if s.store.is_current(ticket) {
                s.loading = false;
            }
        });

        match self.api.list().await {
            Ok(products) => {
                let count = products.len();
                let applied = self.update(|s| {
                    let applied = s.store.finish_load(ticket, products);
                    if applied {
                        let TrackerState { store, checked_prices, .. } = s;
                        checked_prices.retain(|id, _| store.contains(id));
                    }
                    applied
                });
                if applied {
                    log::info!("Loaded {} tracked products", count);
                } else {
                    log::debug!("Discarded stale product list {}", ticket);
                }
            }
            Err(err) => {
                log::error!("Failed to load products: {}", err);
                let current = self.update(|s| {
                    let current = s.store.is_current(ticket);
                    if current {
                        s.load_failed = true;
                        s.store.clear();
                        s.checked_prices.clear();
                    }
                    current
                });
                if current {
                    self.notify(NoticeKind::Error, LOAD_FAILED_NOTICE);
                }
            }
        }
    }

    /// Submits a new product and reloads the list on success. Returns whether
    /// the backend accepted it.
    pub async fn add_product(&self, form: ProductForm) -> bool {
        let product = form.into_new_product();

        let added = {
            self.update(|s| s.submitting = true);
            let _busy = self.on_exit(|s| s.submitting = false);

            match self.api.add(&product).await {
                Ok(()) => {
                    log::info!("Now tracking {}", product.url);
                    self.update(|s| {
                        s.form_generation = s.form_generation.wrapping_add(1);
                        s.notices.push(NoticeKind::Success, ADDED_NOTICE);
                    });
                    true
                }
                Err(err) => {
                    log::warn!("Add rejected for {}: {}", product.url, err);
                    self.notify_failure(&err);
                    false
                }
            }
        };

        if added {
            self.load_products().await;
        }
        added
    }

    /// Stops tracking `id` once `confirm` agrees. The product is dropped from
    /// the store directly; no reload follows.
    pub async fn delete_product(&self, id: ProductId, confirm: impl FnOnce() -> bool) -> DeleteOutcome {
        if self.state().store.is_deleting(&id) {
            log::debug!("Delete of {} already in flight", id);
            return DeleteOutcome::AlreadyPending;
        }
        if !confirm() {
            return DeleteOutcome::Declined;
        }
        if !self.update(|s| s.store.begin_delete(id.clone())) {
            return DeleteOutcome::AlreadyPending;
        }

        let result = self.api.delete(&id).await;
        self.update(|s| s.store.end_delete(&id));

        match result {
            Ok(()) => {
                log::info!("Stopped tracking {}", id);
                self.update(|s| {
                    if !s.store.remove(&id) {
                        log::debug!("Product {} was no longer listed", id);
                    }
                    s.checked_prices.remove(&id);
                    s.notices.push(NoticeKind::Success, DELETED_NOTICE);
                });
                DeleteOutcome::Deleted
            }
            Err(err) => {
                log::warn!("Delete of {} failed: {}", id, err);
                self.notify_failure(&err);
                DeleteOutcome::Failed
            }
        }
    }

    /// Asks the backend to scrape the current price of one product now.
    pub async fn check_price(&self, id: ProductId) -> Option<f64> {
        match self.api.check_price(&id).await {
            Ok(price) => {
                log::info!("Current price of {} is {}", id, price);
                self.update(|s| {
                    // The product may have been deleted or dropped by a reload meanwhile.
                    if s.store.contains(&id) {
                        s.checked_prices.insert(id, price);
                    }
                    s.notices
                        .push(NoticeKind::Success, format!("Current price: {}", format_price(price)));
                });
                Some(price)
            }
            Err(err) => {
                log::warn!("Price check for {} failed: {}", id, err);
                self.notify_failure(&err);
                None
            }
        }
    }

    fn notify_failure(&self, err: &ApiError) {
        self.notify(NoticeKind::Error, format!("Error: {}", err));
    }
}

struct ExitGuard {
    state: Rc<RefCell<TrackerState>>,
    on_change: Rc<dyn Fn()>,
    release: Option<Box<dyn FnOnce(&mut TrackerState)>>,
}

impl Drop for ExitGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release(&mut *self.state.borrow_mut());
            (self.on_change)();
        }
    }
}

#[cfg(test)]
impl<A> Tracker<A> {
    fn api(&self) -> &A {
        &self.api
    }

    fn shared_state(&self) -> Rc<RefCell<TrackerState>> {
        self.state.clone()
    }
}
