use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde_json::json;

use fridgeplan_inventory::{InventoryStore, default_fridge_order};
use fridgeplan_mealplan::MealCalendar;
use fridgeplan_recipe::RecipeCatalog;
use fridgeplan_shared::{CategoryConfig, StorageError, storage};
use fridgeplan_shopping::{AlwaysHaveList, GroceryList, default_section_order};

mod calendar;
mod fridge;
mod grocery;
mod health;
mod recipes;
mod staples;

/// All mutable application state.
///
/// Kept behind one mutex (see [`AppState`]) so that every handler performs
/// its whole logical operation - reads, mutation, persistence - as one
/// uninterrupted step, and no request observes an intermediate state.
pub struct AppData {
    pub inventory: InventoryStore,
    pub grocery: GroceryList,
    pub calendar: MealCalendar,
    pub always_have: AlwaysHaveList,
    pub fridge_order: Vec<CategoryConfig>,
    pub section_order: Vec<CategoryConfig>,
}

/// Locations of the JSON state files under the configured data directory.
pub struct DataFiles {
    dir: PathBuf,
}

impl DataFiles {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn inventory(&self) -> PathBuf {
        self.dir.join("fridge.json")
    }

    pub fn grocery(&self) -> PathBuf {
        self.dir.join("grocery.json")
    }

    pub fn calendar(&self) -> PathBuf {
        self.dir.join("calendar.json")
    }

    pub fn always_have(&self) -> PathBuf {
        self.dir.join("always_have.json")
    }

    pub fn fridge_order(&self) -> PathBuf {
        self.dir.join("fridge_categories.json")
    }

    pub fn section_order(&self) -> PathBuf {
        self.dir.join("store_sections.json")
    }

    pub fn all(&self) -> [PathBuf; 6] {
        [
            self.inventory(),
            self.grocery(),
            self.calendar(),
            self.always_have(),
            self.fridge_order(),
            self.section_order(),
        ]
    }
}

#[derive(Clone)]
pub struct AppState {
    data: Arc<Mutex<AppData>>,
    files: Arc<DataFiles>,
    catalog: Arc<RecipeCatalog>,
}

impl AppState {
    /// Load all persisted collections from the data directory. Missing or
    /// empty files yield empty collections; missing display orders fall
    /// back to the defaults.
    pub fn load(data_dir: &Path, catalog: RecipeCatalog) -> Result<Self, StorageError> {
        let files = DataFiles::new(data_dir);

        let inventory: InventoryStore = storage::load_json(&files.inventory())?;
        let grocery: GroceryList = storage::load_json(&files.grocery())?;
        let calendar = storage::load_json::<MealCalendar>(&files.calendar())?.normalized();
        let always_have: AlwaysHaveList = storage::load_json(&files.always_have())?;

        let mut fridge_order: Vec<CategoryConfig> = storage::load_json(&files.fridge_order())?;
        if fridge_order.is_empty() {
            fridge_order = default_fridge_order();
        }
        let mut section_order: Vec<CategoryConfig> = storage::load_json(&files.section_order())?;
        if section_order.is_empty() {
            section_order = default_section_order();
        }

        Ok(Self {
            data: Arc::new(Mutex::new(AppData {
                inventory,
                grocery,
                calendar,
                always_have,
                fridge_order,
                section_order,
            })),
            files: Arc::new(files),
            catalog: Arc::new(catalog),
        })
    }

    /// Acquire the state lock. A poisoned lock is recovered by taking the
    /// inner value: last write wins, which is the store's consistency level.
    pub fn lock(&self) -> MutexGuard<'_, AppData> {
        self.data
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn catalog(&self) -> &RecipeCatalog {
        &self.catalog
    }

    pub fn persist_inventory(&self, data: &AppData) -> Result<(), StorageError> {
        storage::save_json(&self.files.inventory(), &data.inventory)
    }

    pub fn persist_grocery(&self, data: &AppData) -> Result<(), StorageError> {
        storage::save_json(&self.files.grocery(), &data.grocery)
    }

    pub fn persist_calendar(&self, data: &AppData) -> Result<(), StorageError> {
        storage::save_json(&self.files.calendar(), &data.calendar)
    }

    pub fn persist_always_have(&self, data: &AppData) -> Result<(), StorageError> {
        storage::save_json(&self.files.always_have(), &data.always_have)
    }

    pub fn persist_fridge_order(&self, data: &AppData) -> Result<(), StorageError> {
        storage::save_json(&self.files.fridge_order(), &data.fridge_order)
    }

    pub fn persist_section_order(&self, data: &AppData) -> Result<(), StorageError> {
        storage::save_json(&self.files.section_order(), &data.section_order)
    }
}

pub async fn fallback() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" })))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        // Fridge
        .route("/fridge", get(fridge::list).post(fridge::add))
        .route("/fridge/clear", post(fridge::clear))
        .route(
            "/fridge/categories",
            get(fridge::categories).put(fridge::set_categories),
        )
        .route(
            "/fridge/{name}",
            put(fridge::set_quantity).delete(fridge::remove),
        )
        // Recipes
        .route("/recipes", get(recipes::list))
        .route("/recipes/availability", get(recipes::availability))
        .route("/recipes/{name}", get(recipes::detail))
        .route("/recipes/{name}/missing", get(recipes::missing))
        .route("/recipes/{name}/cook", post(recipes::cook))
        .route("/ingredients", get(recipes::ingredient_names))
        // Grocery list
        .route("/grocery", get(grocery::list).post(grocery::add))
        .route("/grocery/grouped", get(grocery::grouped))
        .route("/grocery/missing", post(grocery::add_recipe_missing))
        .route("/grocery/clear", post(grocery::clear))
        .route("/grocery/send-to-fridge", post(grocery::send_to_fridge))
        .route("/grocery/export", get(grocery::export))
        .route("/grocery/links", get(grocery::links))
        .route(
            "/grocery/sections",
            get(grocery::sections).put(grocery::set_sections),
        )
        .route(
            "/grocery/{id}",
            put(grocery::set_quantity).delete(grocery::remove),
        )
        .route("/grocery/{id}/increase", post(grocery::increase))
        .route("/grocery/{id}/decrease", post(grocery::decrease))
        // Calendar
        .route("/calendar", get(calendar::get_calendar))
        .route("/calendar/clear", post(calendar::clear))
        .route("/calendar/missing", get(calendar::missing))
        .route("/calendar/grocery", post(calendar::add_to_grocery))
        .route("/calendar/{day}/{slot}", put(calendar::set_slot))
        // Always-have staples
        .route("/always-have", get(staples::list).post(staples::add))
        .route("/always-have/clear", post(staples::clear))
        .route("/always-have/{id}", delete(staples::remove))
        .fallback(fallback)
        .with_state(state)
}
