//! Catalog service trait and in-memory implementation.

use std::sync::Arc;

use async_trait::async_trait;
use common::TeaId;
use domain::{CatalogItem, Category, Money};
use tokio::sync::RwLock;

use crate::error::ServiceResult;

/// Read access to the tea catalog.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Lists teas ordered by name, optionally restricted to one category.
    async fn list_items(&self, category: Option<Category>) -> ServiceResult<Vec<CatalogItem>>;

    /// Looks up a single tea.
    async fn get_item(&self, tea_id: &TeaId) -> ServiceResult<Option<CatalogItem>>;
}

/// In-memory catalog kept sorted by name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    items: Arc<RwLock<Vec<CatalogItem>>>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding `items`.
    pub fn with_items(items: impl IntoIterator<Item = CatalogItem>) -> Self {
        let mut items: Vec<_> = items.into_iter().collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    /// The house selection of Ceylon teas.
    pub fn ceylon() -> ServiceResult<Self> {
        let seed = [
            (
                "ceylon-orange-pekoe",
                "Ceylon Orange Pekoe",
                Category::Black,
                450,
                "Premium black tea from the highlands of Sri Lanka",
            ),
            (
                "earl-grey-ceylon",
                "Earl Grey Ceylon",
                Category::Black,
                520,
                "Classic Earl Grey with Ceylon black tea base",
            ),
            (
                "breakfast-blend",
                "Breakfast Blend",
                Category::Black,
                390,
                "Strong morning blend perfect with milk",
            ),
            (
                "ceylon-green",
                "Ceylon Green Tea",
                Category::Green,
                380,
                "Fresh green tea with a light, refreshing taste",
            ),
            (
                "jasmine-green",
                "Jasmine Green Tea",
                Category::Green,
                420,
                "Green tea scented with jasmine flowers",
            ),
            (
                "silver-tips",
                "Silver Tips White Tea",
                Category::White,
                850,
                "Delicate white tea with subtle flavor",
            ),
            (
                "ceylon-oolong",
                "Ceylon Oolong",
                Category::Oolong,
                650,
                "Semi-fermented tea with complex flavor profile",
            ),
            (
                "chamomile",
                "Chamomile Herbal",
                Category::Herbal,
                320,
                "Caffeine-free chamomile flowers for relaxation",
            ),
            (
                "peppermint",
                "Peppermint Herbal",
                Category::Herbal,
                290,
                "Refreshing peppermint herbal tea",
            ),
            (
                "lemon-ginger",
                "Lemon Ginger Herbal",
                Category::Herbal,
                350,
                "Zesty lemon and warming ginger herbal blend",
            ),
            (
                "vanilla-ceylon",
                "Vanilla Ceylon Black",
                Category::Flavored,
                480,
                "Ceylon black tea with natural vanilla flavoring",
            ),
            (
                "cinnamon-spice",
                "Cinnamon Spice Tea",
                Category::Flavored,
                410,
                "Spiced tea blend with cinnamon and other warming spices",
            ),
        ];

        let items = seed
            .into_iter()
            .map(|(id, name, category, rupees, description)| {
                CatalogItem::new(id, name, category, Money::from_rupees(rupees))
                    .map(|item| item.with_description(description))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::with_items(items))
    }

    /// Adds or replaces a tea.
    pub async fn upsert(&self, item: CatalogItem) {
        let mut items = self.items.write().await;
        items.retain(|existing| existing.id != item.id);
        let position = items.partition_point(|existing| existing.name < item.name);
        items.insert(position, item);
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl CatalogProvider for InMemoryCatalog {
    #[tracing::instrument(skip(self))]
    async fn list_items(&self, category: Option<Category>) -> ServiceResult<Vec<CatalogItem>> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .filter(|item| category.is_none_or(|c| item.category == c))
            .cloned()
            .collect())
    }

    async fn get_item(&self, tea_id: &TeaId) -> ServiceResult<Option<CatalogItem>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| &item.id == tea_id).cloned())
    }
}
