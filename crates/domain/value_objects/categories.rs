use serde::{Deserialize, Serialize};

use crate::domain::entities::categories::{CategoryEntity, InsertCategoryEntity};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryModel {
    pub id: i32,
    pub category_name: String,
    pub description: String,
}

impl From<CategoryEntity> for CategoryModel {
    fn from(value: CategoryEntity) -> Self {
        Self {
            id: value.id,
            category_name: value.category_name,
            description: value.description,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpsertCategoryModel {
    pub category_name: String,
    #[serde(default)]
    pub description: String,
}

impl UpsertCategoryModel {
    pub fn validate(&self) -> Result<(), String> {
        if self.category_name.trim().is_empty() {
            return Err("Category name is required".to_string());
        }
        Ok(())
    }

    pub fn to_entity(&self) -> InsertCategoryEntity {
        InsertCategoryEntity {
            category_name: self.category_name.trim().to_string(),
            description: self.description.clone(),
        }
    }
}
