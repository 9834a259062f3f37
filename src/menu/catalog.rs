use crate::model::{Category, MenuItem, MenuItemId};
use std::str::FromStr;

/// Which part of the menu to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == *category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = crate::model::ParseModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" => Ok(CategoryFilter::All),
            other => other.parse().map(CategoryFilter::Only),
        }
    }
}

/// A fetched menu, in the order the service returned it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: &MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn filter(&self, filter: CategoryFilter) -> impl Iterator<Item = &MenuItem> + '_ {
        self.items.iter().filter(move |item| filter.matches(item))
    }

    /// Items grouped by category in menu order. Empty categories are skipped.
    pub fn by_category(&self) -> Vec<(Category, Vec<&MenuItem>)> {
        Category::ALL
            .into_iter()
            .filter_map(|category| {
                let items: Vec<_> = self.filter(CategoryFilter::Only(category)).collect();
                (!items.is_empty()).then_some((category, items))
            })
            .collect()
    }
}
