use std::sync::Arc;

use reqwest::{header::CONTENT_TYPE, Client};
use serde::de::DeserializeOwned;
use shared::{
    domain::{Category, Dish, MenuId},
    error::{FetchKind, MenuApiError},
    protocol::{CategoryRecord, DishListRequest, DishRecord, MenuEnvelope},
};
use tokio::{sync::watch, task::JoinHandle};
use tracing::{info, warn};

pub mod config;
pub mod state;

pub use config::{load_settings, Settings, DEFAULT_BASE_URL};
pub use state::{Phase, ViewState, ViewStateStore};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Fetch-decode client for the menu API. Operations never return data to
/// the caller; completion is signaled only through the observable state.
pub struct MenuClient {
    http: Client,
    settings: Settings,
    store: ViewStateStore,
}

impl MenuClient {
    pub fn new(settings: Settings) -> Arc<Self> {
        Arc::new(Self {
            http: Client::new(),
            settings,
            store: ViewStateStore::new(),
        })
    }

    /// Latest snapshot of the shared view state.
    pub fn snapshot(&self) -> ViewState {
        self.store.snapshot()
    }

    /// Change notifications for a renderer. The receiver yields a fresh
    /// snapshot per mutation; the renderer drains it on its own context.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.store.subscribe()
    }

    /// Starts the category fetch. The loading flag is raised before the
    /// request task is spawned; the outcome only ever lands in the store.
    pub fn fetch_categories(self: &Arc<Self>) -> JoinHandle<()> {
        self.store
            .update(|state| state.is_loading_categories = true);
        let client = Arc::clone(self);
        tokio::spawn(async move {
            let outcome = client.load_categories().await;
            client.store.update(|state| {
                state.is_loading_categories = false;
                match outcome {
                    Ok(categories) => {
                        info!(count = categories.len(), "menu: categories loaded");
                        state.categories = categories;
                        state.error = None;
                    }
                    Err(err) => {
                        warn!("menu: category fetch failed: {err}");
                        state.error = Some(err.to_string());
                    }
                }
            });
        })
    }

    /// Starts a dish fetch for one category key.
    ///
    /// Overlapping calls race: whichever request completes last overwrites
    /// `dishes` and `is_loading_dishes`, regardless of issue order. Callers
    /// that care must let the previous fetch settle before starting the
    /// next.
    pub fn fetch_dishes(self: &Arc<Self>, menu_id: MenuId) -> JoinHandle<()> {
        self.store.update(|state| state.is_loading_dishes = true);
        let client = Arc::clone(self);
        tokio::spawn(async move {
            let outcome = client.load_dishes(&menu_id).await;
            client.store.update(|state| {
                state.is_loading_dishes = false;
                match outcome {
                    Ok(dishes) => {
                        info!(menu_id = %menu_id, count = dishes.len(), "menu: dishes loaded");
                        state.dishes = dishes;
                        state.error = None;
                    }
                    Err(err) => {
                        warn!(menu_id = %menu_id, "menu: dish fetch failed: {err}");
                        state.error = Some(err.to_string());
                    }
                }
            });
        })
    }

    async fn load_categories(&self) -> Result<Vec<Category>, MenuApiError> {
        let kind = FetchKind::Categories;
        let response = self
            .http
            .post(self.settings.menu_url())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .send()
            .await
            .map_err(|err| transport(kind, err))?;
        let body = response.bytes().await.map_err(|err| transport(kind, err))?;
        let envelope: MenuEnvelope<CategoryRecord> = parse_envelope(&body, kind)?;
        Ok(envelope.menu_list.into_iter().map(Category::from).collect())
    }

    async fn load_dishes(&self, menu_id: &MenuId) -> Result<Vec<Dish>, MenuApiError> {
        if menu_id.as_str().trim().is_empty() {
            return Err(MenuApiError::Validation(
                "menuID must not be empty".to_string(),
            ));
        }

        let kind = FetchKind::Dishes;
        let request = DishListRequest {
            menu_id: menu_id.as_str().to_string(),
        };
        let response = self
            .http
            .post(self.settings.sub_menu_url())
            .form(&request)
            .send()
            .await
            .map_err(|err| transport(kind, err))?;
        let body = response.bytes().await.map_err(|err| transport(kind, err))?;
        let envelope: MenuEnvelope<DishRecord> = parse_envelope(&body, kind)?;
        Ok(envelope.menu_list.into_iter().map(Dish::from).collect())
    }
}

fn transport(kind: FetchKind, err: reqwest::Error) -> MenuApiError {
    MenuApiError::Transport {
        kind,
        detail: err.to_string(),
    }
}

fn parse_envelope<T: DeserializeOwned>(
    body: &[u8],
    kind: FetchKind,
) -> Result<MenuEnvelope<T>, MenuApiError> {
    if body.is_empty() {
        return Err(MenuApiError::EmptyResponse { kind });
    }
    let envelope: MenuEnvelope<T> =
        serde_json::from_slice(body).map_err(|err| MenuApiError::Decode {
            kind,
            detail: err.to_string(),
        })?;
    if !envelope.status {
        return Err(MenuApiError::Status { kind });
    }
    Ok(envelope)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
