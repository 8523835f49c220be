//! Response shapes. `PlantView` is the wire contract for a plant, kept apart from the row type.

use crate::plant::Plant;
use axum::{http::StatusCode, Json};
use serde::Serialize;

/// JSON representation of a plant: `{id, name, image, price, is_in_stock}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlantView {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub price: f64,
    pub is_in_stock: bool,
}

impl From<Plant> for PlantView {
    fn from(plant: Plant) -> Self {
        PlantView {
            id: plant.id,
            name: plant.name,
            image: plant.image,
            price: plant.price,
            is_in_stock: plant.is_in_stock,
        }
    }
}

pub fn created(plant: Plant) -> (StatusCode, Json<PlantView>) {
    (StatusCode::CREATED, Json(plant.into()))
}

pub fn ok(plant: Plant) -> (StatusCode, Json<PlantView>) {
    (StatusCode::OK, Json(plant.into()))
}

pub fn ok_many(plants: Vec<Plant>) -> (StatusCode, Json<Vec<PlantView>>) {
    (StatusCode::OK, Json(plants.into_iter().map(PlantView::from).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_serializes_exact_field_set() {
        let plant = Plant {
            id: 3,
            name: "Fern".into(),
            image: "fern.jpg".into(),
            price: 12.5,
            is_in_stock: true,
        };
        let json = serde_json::to_value(PlantView::from(plant)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "name": "Fern",
                "image": "fern.jpg",
                "price": 12.5,
                "is_in_stock": true
            })
        );
    }
}
