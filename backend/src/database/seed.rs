//! Reference catalog loaded into an empty database.

use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};
use tracing::{debug, info};

use super::{models::car_model::CarType, queries};

struct SeedMake {
    name: &'static str,
    description: &'static str,
    models: &'static [(&'static str, CarType, i32)],
}

const CATALOG: &[SeedMake] = &[
    SeedMake {
        name: "Nissan",
        description: "Great cars. Japanese technology",
        models: &[
            ("Pathfinder", CarType::Suv, 2023),
            ("Qashqai", CarType::Suv, 2023),
            ("XTRAIL", CarType::Suv, 2023),
        ],
    },
    SeedMake {
        name: "Mercedes",
        description: "Great cars. German technology",
        models: &[
            ("A-Class", CarType::Suv, 2023),
            ("C-Class", CarType::Suv, 2023),
            ("E-Class", CarType::Suv, 2023),
        ],
    },
    SeedMake {
        name: "Audi",
        description: "Great cars. German technology",
        models: &[
            ("A4", CarType::Suv, 2023),
            ("A5", CarType::Suv, 2023),
            ("A6", CarType::Suv, 2023),
        ],
    },
    SeedMake {
        name: "Kia",
        description: "Great cars. Korean technology",
        models: &[
            ("Sorrento", CarType::Suv, 2023),
            ("Carnival", CarType::Suv, 2023),
            ("Cerato", CarType::Sedan, 2023),
        ],
    },
    SeedMake {
        name: "Toyota",
        description: "Great cars. Japanese technology",
        models: &[
            ("Corolla", CarType::Sedan, 2023),
            ("Camry", CarType::Sedan, 2023),
            ("Kluger", CarType::Suv, 2023),
        ],
    },
];

/// Inserts the reference catalog in one transaction and returns the number
/// of car models written.
pub async fn populate(db: &DatabaseConnection) -> Result<usize, DbErr> {
    let txn = db.begin().await?;
    let mut inserted = 0;

    for make in CATALOG {
        let row = queries::insert_car_make(&txn, make.name, make.description).await?;
        for (name, car_type, year) in make.models {
            queries::insert_car_model(&txn, row.id, name, *car_type, *year).await?;
            debug!("Seeded {} {name} ({}, {year})", make.name, car_type.label());
            inserted += 1;
        }
    }

    txn.commit().await?;
    info!("Seeded car catalog with {inserted} models");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{connect, queries::list_car_models_with_makes};

    #[tokio::test]
    async fn populates_every_make() {
        let db = connect("sqlite::memory:").await.unwrap();
        let inserted = populate(&db).await.unwrap();

        assert_eq!(inserted, 15);
        let rows = list_car_models_with_makes(&db).await.unwrap();
        assert_eq!(rows.len(), 15);
        assert_eq!(rows[0].0.name, "Pathfinder");
        assert_eq!(rows[0].1.name, "Nissan");
        assert_eq!(rows[14].1.name, "Toyota");
    }
}
