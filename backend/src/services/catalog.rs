//! Read access to the local car catalog.
//!
//! The catalog is reference data: it is loaded from the seed set the first
//! time it is read while empty, and never modified afterwards.

use std::sync::atomic::{AtomicUsize, Ordering};

use sea_orm::{DatabaseConnection, DbErr};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::database::{queries, seed};

/// One car model paired with its make's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarEntry {
    #[serde(rename = "CarModel")]
    pub car_model: String,
    #[serde(rename = "CarMake")]
    pub car_make: String,
}

pub struct CatalogService {
    db: DatabaseConnection,
    seed_lock: Mutex<()>,
    seed_runs: AtomicUsize,
}

impl CatalogService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            seed_lock: Mutex::new(()),
            seed_runs: AtomicUsize::new(0),
        }
    }

    pub async fn list_cars(&self) -> Result<Vec<CarEntry>, DbErr> {
        self.ensure_seeded().await?;

        let rows = queries::list_car_models_with_makes(&self.db).await?;
        Ok(rows
            .into_iter()
            .map(|(model, make)| CarEntry {
                car_model: model.name,
                car_make: make.name,
            })
            .collect())
    }

    /// How many times the seed set has been loaded by this service.
    pub fn seed_runs(&self) -> usize {
        self.seed_runs.load(Ordering::SeqCst)
    }

    async fn ensure_seeded(&self) -> Result<(), DbErr> {
        if queries::has_car_makes(&self.db).await? {
            return Ok(());
        }

        let _guard = self.seed_lock.lock().await;
        // another request may have seeded while we waited
        if queries::has_car_makes(&self.db).await? {
            return Ok(());
        }

        seed::populate(&self.db).await?;
        self.seed_runs.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{connect, models::car_model::CarType};

    #[tokio::test]
    async fn empty_catalog_is_seeded_once() {
        let db = connect("sqlite::memory:").await.unwrap();
        let catalog = CatalogService::new(db);

        let (first, second) = tokio::join!(catalog.list_cars(), catalog.list_cars());
        let first = first.unwrap();
        assert!(!first.is_empty());
        assert_eq!(first, second.unwrap());

        catalog.list_cars().await.unwrap();
        assert_eq!(catalog.seed_runs(), 1);
    }

    #[tokio::test]
    async fn existing_catalog_is_not_reseeded() {
        let db = connect("sqlite::memory:").await.unwrap();
        let make = queries::insert_car_make(&db, "Honda", "").await.unwrap();
        queries::insert_car_model(&db, make.id, "Civic", CarType::Hatchback, 2019)
            .await
            .unwrap();

        let catalog = CatalogService::new(db);
        let cars = catalog.list_cars().await.unwrap();

        assert_eq!(
            cars,
            vec![CarEntry {
                car_model: "Civic".into(),
                car_make: "Honda".into(),
            }]
        );
        assert_eq!(catalog.seed_runs(), 0);
    }

    #[test]
    fn entries_use_frontend_field_names() {
        let entry = CarEntry {
            car_model: "Camry".into(),
            car_make: "Toyota".into(),
        };
        assert_eq!(
            serde_json::to_value(entry).unwrap(),
            serde_json::json!({"CarModel": "Camry", "CarMake": "Toyota"})
        );
    }
}
