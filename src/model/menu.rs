//! Menu catalog types as served by `GET /api/menu`.
//!
//! Each entry carries an English and an Arabic name and description; use
//! [`MenuItem::name_in`] / [`MenuItem::description_in`] to pick one.

use super::ParseModelError;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for menu items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub String);

impl From<&str> for MenuItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for MenuItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display language for bilingual menu text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Arabic,
}

/// Menu sections, declared in the order they are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    SpecialtyCoffee,
    TraditionalCoffee,
    ColdBeverages,
    Pastries,
    Breakfast,
    Snacks,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::SpecialtyCoffee,
        Category::TraditionalCoffee,
        Category::ColdBeverages,
        Category::Pastries,
        Category::Breakfast,
        Category::Snacks,
    ];

    /// The wire tag, e.g. `cold_beverages`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SpecialtyCoffee => "specialty_coffee",
            Category::TraditionalCoffee => "traditional_coffee",
            Category::ColdBeverages => "cold_beverages",
            Category::Pastries => "pastries",
            Category::Breakfast => "breakfast",
            Category::Snacks => "snacks",
        }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Category::SpecialtyCoffee, Locale::English) => "Specialty Coffee",
            (Category::SpecialtyCoffee, Locale::Arabic) => "قهوة مختصة",
            (Category::TraditionalCoffee, Locale::English) => "Traditional Coffee",
            (Category::TraditionalCoffee, Locale::Arabic) => "قهوة تقليدية",
            (Category::ColdBeverages, Locale::English) => "Cold Beverages",
            (Category::ColdBeverages, Locale::Arabic) => "مشروبات باردة",
            (Category::Pastries, Locale::English) => "Pastries",
            (Category::Pastries, Locale::Arabic) => "معجنات",
            (Category::Breakfast, Locale::English) => "Breakfast",
            (Category::Breakfast, Locale::Arabic) => "إفطار",
            (Category::Snacks, Locale::English) => "Snacks",
            (Category::Snacks, Locale::Arabic) => "وجبات خفيفة",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| ParseModelError::UnknownCategory(s.to_string()))
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub name_ar: String,
    pub description: String,
    pub description_ar: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: Category,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "available_by_default")]
    pub available: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

fn available_by_default() -> bool {
    true
}

impl MenuItem {
    pub fn name_in(&self, locale: Locale) -> &str {
        match locale {
            Locale::English => &self.name,
            Locale::Arabic => &self.name_ar,
        }
    }

    pub fn description_in(&self, locale: Locale) -> &str {
        match locale {
            Locale::English => &self.description,
            Locale::Arabic => &self.description_ar,
        }
    }
}

/// Payload for `POST /api/menu` and `PUT /api/menu/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub name_ar: String,
    pub description: String,
    pub description_ar: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: Category,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "available_by_default")]
    pub available: bool,
}
