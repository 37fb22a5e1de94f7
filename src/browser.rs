use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::client::MealApi;
use crate::error::FetchError;
use crate::model::{MealDetail, MealSummary};

/// A fetch completion, queued for the single state writer.
#[derive(Debug)]
pub enum Update {
    /// Category listing finished.
    Meals(Result<Vec<MealSummary>, FetchError>),
    /// Detail lookup finished for `id`.
    Detail {
        id: String,
        result: Result<MealDetail, FetchError>,
    },
}

/// Holds the current listing and the current selection.
///
/// Fetches run as independent spawned tasks; their completions travel
/// through an update queue and are applied one at a time by whoever drives
/// [`tick`](MealBrowser::tick), so the two mutable fields only ever have a
/// single writer. A detail completion is applied only if its id still
/// matches the most recently requested one; late results for superseded
/// requests are discarded.
pub struct MealBrowser {
    api: Arc<dyn MealApi>,
    updates_tx: UnboundedSender<Update>,
    updates_rx: UnboundedReceiver<Update>,
    meals: Vec<MealSummary>,
    selected: Option<MealDetail>,
    last_error: Option<FetchError>,
    requested_detail: Option<String>,
}

impl MealBrowser {
    pub fn new(api: Arc<dyn MealApi>) -> Self {
        let (updates_tx, updates_rx) = mpsc::unbounded_channel();
        Self {
            api,
            updates_tx,
            updates_rx,
            meals: Vec::new(),
            selected: None,
            last_error: None,
            requested_detail: None,
        }
    }

    /// Start fetching the listing for a category.
    ///
    /// The result arrives through the update queue; a failed fetch leaves
    /// the listing empty and records the error.
    pub fn load_meals(&self, category: &str) {
        let api = Arc::clone(&self.api);
        let tx = self.updates_tx.clone();
        let category = category.to_owned();
        tokio::spawn(async move {
            let result = api.meals_by_category(&category).await;
            // A closed queue means the browser is gone; drop the result.
            let _ = tx.send(Update::Meals(result));
        });
    }

    /// Start fetching the detail record for a meal id.
    ///
    /// Issuing a new request supersedes any still in flight; the older
    /// completion will be discarded when it arrives.
    pub fn load_detail(&mut self, id: &str) {
        self.requested_detail = Some(id.to_owned());
        let api = Arc::clone(&self.api);
        let tx = self.updates_tx.clone();
        let id = id.to_owned();
        tokio::spawn(async move {
            let result = api.meal_detail(&id).await;
            let _ = tx.send(Update::Detail { id, result });
        });
    }

    /// Wait for the next completion and apply it. Returns false if the
    /// queue has closed.
    pub async fn tick(&mut self) -> bool {
        match self.updates_rx.recv().await {
            Some(update) => {
                self.apply(update);
                true
            }
            None => false,
        }
    }

    /// Apply one completion to the browser state.
    pub fn apply(&mut self, update: Update) {
        match update {
            Update::Meals(Ok(meals)) => {
                debug!("listing loaded with {} meals", meals.len());
                self.meals = meals;
                self.last_error = None;
            }
            Update::Meals(Err(error)) => {
                warn!("listing fetch failed: {error}");
                self.meals.clear();
                self.last_error = Some(error);
            }
            Update::Detail { id, result } => {
                if self.requested_detail.as_deref() != Some(id.as_str()) {
                    debug!("discarding stale detail result for meal {id}");
                    return;
                }
                match result {
                    Ok(detail) => {
                        debug!("detail loaded for meal {id}");
                        self.selected = Some(detail);
                        self.last_error = None;
                    }
                    Err(error) => {
                        warn!("detail fetch failed for meal {id}: {error}");
                        self.selected = None;
                        self.last_error = Some(error);
                    }
                }
            }
        }
    }

    /// The current listing, sorted by display name.
    pub fn meals(&self) -> &[MealSummary] {
        &self.meals
    }

    /// The currently selected detail record, if one has loaded.
    pub fn selected_detail(&self) -> Option<&MealDetail> {
        self.selected.as_ref()
    }

    /// The error recorded by the most recent completion, if it failed.
    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }
}
