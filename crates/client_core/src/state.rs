//! Observable view state shared between the fetch client and a renderer.

use shared::domain::{Category, Dish};
use tokio::sync::watch;

/// The record a renderer observes: fetched collections in server order,
/// per-operation loading flags, and the last surfaced error message.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub categories: Vec<Category>,
    pub dishes: Vec<Dish>,
    pub is_loading_categories: bool,
    pub is_loading_dishes: bool,
    pub error: Option<String>,
}

/// The single interpretation a renderer should draw for a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    LoadingCategories,
    LoadingDishes,
    Error(String),
    Ready,
}

impl ViewState {
    /// Priority order: loading categories, then loading dishes, then a
    /// surfaced error, then data.
    pub fn phase(&self) -> Phase {
        if self.is_loading_categories {
            Phase::LoadingCategories
        } else if self.is_loading_dishes {
            Phase::LoadingDishes
        } else if let Some(error) = &self.error {
            Phase::Error(error.clone())
        } else {
            Phase::Ready
        }
    }
}

/// State container with a subscribe/notify contract. Mutations go through
/// the store exclusively; every change publishes a fresh snapshot, and a
/// renderer drains its receiver on whatever context it draws from.
pub struct ViewStateStore {
    tx: watch::Sender<ViewState>,
}

impl Default for ViewStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewStateStore {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(ViewState::default());
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> ViewState {
        self.tx.borrow().clone()
    }

    pub(crate) fn update(&self, mutate: impl FnOnce(&mut ViewState)) {
        self.tx.send_modify(mutate);
    }
}
