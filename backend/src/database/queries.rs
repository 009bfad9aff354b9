//! Database query functions (Data Access Objects).
//!
//! This module centralizes all direct database operations, providing reusable
//! functions for the catalog and the credential store. Functions are generic
//! over the connection so they run inside transactions too.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use super::models::{
    car_make, car_model,
    car_model::CarType,
    prelude::{CarMake, CarModel, User},
    user,
};

pub async fn has_car_makes<C: ConnectionTrait>(db: &C) -> Result<bool, DbErr> {
    Ok(CarMake::find().count(db).await? > 0)
}

pub async fn insert_car_make<C: ConnectionTrait>(
    db: &C,
    name: &str,
    description: &str,
) -> Result<car_make::Model, DbErr> {
    car_make::ActiveModel {
        name: Set(name.to_string()),
        description: Set(description.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_car_model<C: ConnectionTrait>(
    db: &C,
    car_make_id: i32,
    name: &str,
    car_type: CarType,
    year: i32,
) -> Result<car_model::Model, DbErr> {
    let mut model = <car_model::ActiveModel as sea_orm::ActiveModelBehavior>::new();
    model.car_make_id = Set(car_make_id);
    model.name = Set(name.to_string());
    model.car_type = Set(car_type);
    model.year = Set(year);
    model.insert(db).await
}

/// Every car model with its make, in insertion order.
pub async fn list_car_models_with_makes<C: ConnectionTrait>(
    db: &C,
) -> Result<Vec<(car_model::Model, car_make::Model)>, DbErr> {
    let rows = CarModel::find()
        .find_also_related(CarMake)
        .order_by_asc(car_model::Column::Id)
        .all(db)
        .await?;

    // the foreign key guarantees a make; skip rather than fail on orphans
    Ok(rows
        .into_iter()
        .filter_map(|(model, make)| make.map(|make| (model, make)))
        .collect())
}

pub async fn find_user_by_username<C: ConnectionTrait>(
    db: &C,
    username: &str,
) -> Result<Option<user::Model>, DbErr> {
    User::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await
}

pub async fn count_users_named<C: ConnectionTrait>(db: &C, username: &str) -> Result<u64, DbErr> {
    User::find()
        .filter(user::Column::Username.eq(username))
        .count(db)
        .await
}

pub async fn insert_user<C: ConnectionTrait>(
    db: &C,
    user: user::ActiveModel,
) -> Result<user::Model, DbErr> {
    user.insert(db).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connect;

    #[tokio::test]
    async fn joins_models_with_makes_in_insertion_order() {
        let db = connect("sqlite::memory:").await.unwrap();
        assert!(!has_car_makes(&db).await.unwrap());

        let audi = insert_car_make(&db, "Audi", "German luxury").await.unwrap();
        let kia = insert_car_make(&db, "Kia", "Korean value").await.unwrap();
        insert_car_model(&db, kia.id, "Sorrento", CarType::Suv, 2023).await.unwrap();
        insert_car_model(&db, audi.id, "A4", CarType::Sedan, 2021).await.unwrap();

        assert!(has_car_makes(&db).await.unwrap());
        let rows = list_car_models_with_makes(&db).await.unwrap();
        let pairs: Vec<_> = rows
            .iter()
            .map(|(model, make)| (model.name.as_str(), make.name.as_str()))
            .collect();
        assert_eq!(pairs, vec![("Sorrento", "Kia"), ("A4", "Audi")]);
    }

    #[tokio::test]
    async fn rejects_years_outside_range() {
        let db = connect("sqlite::memory:").await.unwrap();
        let make = insert_car_make(&db, "Toyota", "").await.unwrap();

        let err = insert_car_model(&db, make.id, "Corolla", CarType::Sedan, 2014)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("2014"));
        assert!(insert_car_model(&db, make.id, "Corolla", CarType::Sedan, 2024)
            .await
            .is_err());
        assert!(insert_car_model(&db, make.id, "Corolla", CarType::Sedan, 2015)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn deleting_a_make_removes_its_models() {
        let db = connect("sqlite::memory:").await.unwrap();
        let kia = insert_car_make(&db, "Kia", "Korean value").await.unwrap();
        let audi = insert_car_make(&db, "Audi", "German luxury").await.unwrap();
        insert_car_model(&db, kia.id, "Rio", CarType::Sedan, 2020).await.unwrap();
        insert_car_model(&db, kia.id, "Sportage", CarType::Suv, 2022).await.unwrap();
        insert_car_model(&db, audi.id, "Q5", CarType::Suv, 2021).await.unwrap();

        CarMake::delete_by_id(kia.id).exec(&db).await.unwrap();

        let rows = list_car_models_with_makes(&db).await.unwrap();
        assert_eq!(CarModel::find().count(&db).await.unwrap(), 1);
        assert_eq!(rows[0].0.name, "Q5");
    }

    #[test]
    fn new_car_models_default_to_suv_2023() {
        let model = <car_model::ActiveModel as sea_orm::ActiveModelBehavior>::new();
        assert_eq!(model.car_type, Set(CarType::Suv));
        assert_eq!(model.year, Set(2023));
    }
}
