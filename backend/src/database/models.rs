//! Rust structs that represent database table mappings.
//!
//! SeaORM entities for the local tables: the car catalog (`car_make`,
//! `car_model`) and the credential store (`users`). Dealers and reviews are
//! owned by the upstream data service and have no table here.

pub mod car_make {
    use sea_orm::entity::prelude::*;
    use serde::Serialize;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
    #[sea_orm(table_name = "car_make")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(column_type = "String(StringLen::N(100))")]
        pub name: String,
        #[sea_orm(column_type = "Text")]
        pub description: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::car_model::Entity")]
        CarModel,
    }

    impl Related<super::car_model::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::CarModel.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod car_model {
    use sea_orm::entity::prelude::*;
    use sea_orm::ActiveValue::{Set, Unchanged};
    use serde::{Deserialize, Serialize};

    pub const MIN_YEAR: i32 = 2015;
    pub const MAX_YEAR: i32 = 2023;
    pub const DEFAULT_YEAR: i32 = 2023;

    #[derive(
        Debug,
        Clone,
        Copy,
        Default,
        PartialEq,
        Eq,
        EnumIter,
        DeriveActiveEnum,
        Serialize,
        Deserialize,
    )]
    #[sea_orm(rs_type = "String", db_type = "String(StringLen::N(15))")]
    #[serde(rename_all = "UPPERCASE")]
    pub enum CarType {
        #[sea_orm(string_value = "SEDAN")]
        Sedan,
        #[default]
        #[sea_orm(string_value = "SUV")]
        Suv,
        #[sea_orm(string_value = "WAGON")]
        Wagon,
        #[sea_orm(string_value = "COUPE")]
        Coupe,
        #[sea_orm(string_value = "CONVERTIBLE")]
        Convertible,
        #[sea_orm(string_value = "HATCHBACK")]
        Hatchback,
        #[sea_orm(string_value = "PICKUP")]
        Pickup,
        #[sea_orm(string_value = "VAN")]
        Van,
        #[sea_orm(string_value = "MINIVAN")]
        Minivan,
        #[sea_orm(string_value = "SPORTS")]
        Sports,
        #[sea_orm(string_value = "HYBRID")]
        Hybrid,
        #[sea_orm(string_value = "ELECTRIC")]
        Electric,
        #[sea_orm(string_value = "CROSSOVER")]
        Crossover,
        #[sea_orm(string_value = "LUXURY")]
        Luxury,
        #[sea_orm(string_value = "OFFROAD")]
        Offroad,
        #[sea_orm(string_value = "MOTORCYCLE")]
        Motorcycle,
        #[sea_orm(string_value = "TRUCK")]
        Truck,
    }

    impl CarType {
        /// Human-readable label for the category.
        pub fn label(&self) -> &'static str {
            match self {
                CarType::Sedan => "Sedan",
                CarType::Suv => "SUV",
                CarType::Wagon => "Wagon",
                CarType::Coupe => "Coupe",
                CarType::Convertible => "Convertible",
                CarType::Hatchback => "Hatchback",
                CarType::Pickup => "Pickup Truck",
                CarType::Van => "Van",
                CarType::Minivan => "Minivan",
                CarType::Sports => "Sports Car",
                CarType::Hybrid => "Hybrid",
                CarType::Electric => "Electric",
                CarType::Crossover => "Crossover",
                CarType::Luxury => "Luxury Car",
                CarType::Offroad => "Off-Road Vehicle",
                CarType::Motorcycle => "Motorcycle",
                CarType::Truck => "Truck",
            }
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
    #[sea_orm(table_name = "car_model")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub car_make_id: i32,
        #[sea_orm(column_type = "String(StringLen::N(100))")]
        pub name: String,
        #[sea_orm(column_name = "type")]
        pub car_type: CarType,
        pub year: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::car_make::Entity",
            from = "Column::CarMakeId",
            to = "super::car_make::Column::Id",
            on_delete = "Cascade"
        )]
        CarMake,
    }

    impl Related<super::car_make::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::CarMake.def()
        }
    }

    pub fn validate_year(year: i32) -> Result<(), DbErr> {
        if (MIN_YEAR..=MAX_YEAR).contains(&year) {
            Ok(())
        } else {
            Err(DbErr::Custom(format!(
                "car model year {year} outside {MIN_YEAR}..={MAX_YEAR}"
            )))
        }
    }

    #[async_trait::async_trait]
    impl ActiveModelBehavior for ActiveModel {
        fn new() -> Self {
            Self {
                car_type: Set(CarType::default()),
                year: Set(DEFAULT_YEAR),
                ..ActiveModelTrait::default()
            }
        }

        async fn before_save<C>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
        where
            C: ConnectionTrait,
        {
            if let Set(year) | Unchanged(year) = &self.year {
                validate_year(*year)?;
            }
            Ok(self)
        }
    }
}

pub mod user {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "users")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique, column_type = "String(StringLen::N(150))")]
        pub username: String,
        pub password_hash: String,
        pub salt: String,
        pub first_name: String,
        pub last_name: String,
        pub email: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod prelude {
    pub use super::car_make::Entity as CarMake;
    pub use super::car_model::Entity as CarModel;
    pub use super::user::Entity as User;
}
