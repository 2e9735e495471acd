use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ServiceCategory {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub icon_class: String,
    pub display_order: i32,
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreateServiceCategoryRequest {
    pub name: String,
    pub slug: Option<String>,
    pub description: String,
    pub icon_class: String,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateServiceCategoryRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub icon_class: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}
