//! Plant record and the request payloads that create or change one.

use serde::Deserialize;

/// A stored plant. Mirrors one row of the `plants` table.
#[derive(Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Plant {
    pub id: i64,
    pub name: String,
    /// URL or path of the plant's picture.
    pub image: String,
    pub price: f64,
    pub is_in_stock: bool,
}

impl Plant {
    /// Overwrite the fields present in `changes`; everything else keeps its value.
    pub fn apply(&mut self, changes: &PlantChanges) {
        if let Some(name) = &changes.name {
            self.name = name.clone();
        }
        if let Some(image) = &changes.image {
            self.image = image.clone();
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(is_in_stock) = changes.is_in_stock {
            self.is_in_stock = is_in_stock;
        }
    }
}

/// Body of `POST /plants`. All four attributes are required.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewPlant {
    pub name: String,
    pub image: String,
    pub price: f64,
    pub is_in_stock: bool,
}

impl NewPlant {
    pub fn into_plant(self, id: i64) -> Plant {
        Plant {
            id,
            name: self.name,
            image: self.image,
            price: self.price,
            is_in_stock: self.is_in_stock,
        }
    }
}

/// Body of `PATCH /plants/:id`. Absent fields are left untouched.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct PlantChanges {
    pub name: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub is_in_stock: Option<bool>,
}

impl PlantChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.image.is_none() && self.price.is_none() && self.is_in_stock.is_none()
    }
}
