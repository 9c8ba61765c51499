use serde::{Deserialize, Serialize};

use crate::domain::entities::menus::{InsertMenuEntity, MenuEntity};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuModel {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category_id: i32,
    pub image_url: String,
    pub rating: i32,
    pub is_available: bool,
}

impl From<MenuEntity> for MenuModel {
    fn from(value: MenuEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            price: value.price,
            description: value.description,
            category_id: value.category_id,
            image_url: value.image_url,
            rating: value.rating,
            is_available: value.is_available,
        }
    }
}

/// Admin payload for creating or replacing a menu item.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertMenuModel {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    pub category_id: i32,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub rating: i32,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

impl UpsertMenuModel {
    /// Returns the first problem with the payload, if any.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Menu name is required".to_string());
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err("Menu price must be greater than 0".to_string());
        }
        if !(0..=5).contains(&self.rating) {
            return Err("Menu rating must be between 0 and 5".to_string());
        }
        Ok(())
    }

    pub fn to_entity(&self) -> InsertMenuEntity {
        InsertMenuEntity {
            name: self.name.trim().to_string(),
            price: self.price,
            description: self.description.clone(),
            category_id: self.category_id,
            image_url: self.image_url.clone(),
            rating: self.rating,
            is_available: self.is_available,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct MenuFilter {
    pub category: Option<String>,
}
