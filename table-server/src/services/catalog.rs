//! Menu Catalog Service
//!
//! The ordering engine treats the menu as an external, read-only
//! collaborator: it looks items up by id and never mutates them. A failed
//! lookup degrades to [`ResolvedItem::Unknown`] (name = raw id, price 0)
//! instead of propagating an error into cart or ledger math.

use shared::models::{MenuItem, ResolvedItem};

/// Read-only menu catalog collaborator
pub trait MenuCatalog: Send + Sync {
    /// All items currently on the menu
    fn items(&self) -> Vec<MenuItem>;

    /// Look up one item by id, degrading to the unknown-item sentinel
    fn find(&self, id: &str) -> ResolvedItem {
        self.items()
            .into_iter()
            .find(|item| item.id == id)
            .map(ResolvedItem::Known)
            .unwrap_or_else(|| ResolvedItem::Unknown { id: id.to_string() })
    }
}

impl std::fmt::Debug for dyn MenuCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuCatalog").finish_non_exhaustive()
    }
}

/// 店舗カテゴリ（ダミーメニュー用）
const DUMMY_CATEGORIES: [&str; 3] = ["酒肴", "串焼き", "揚げ物"];

/// Generated stand-in catalog until the real menu API is wired up
///
/// Items are generated once at startup: ids `m01..`, every 5th item
/// complimentary, categories cycling through the fixed set. Recommendation
/// and quick-order weights are randomized per boot.
pub struct DummyCatalog {
    items: Vec<MenuItem>,
}

impl DummyCatalog {
    /// Generate a dummy menu with `count` items
    pub fn new(count: u32) -> Self {
        use rand::Rng;
        let mut rng = rand::thread_rng();

        let items = (1..=count)
            .map(|i| MenuItem {
                id: format!("m{:02}", i),
                name: format!("居酒屋メニュー {}", i),
                price: if i % 5 == 0 { 0 } else { 500 + i64::from(i) * 50 },
                image_url: String::new(),
                category: DUMMY_CATEGORIES[(i % 3) as usize].to_string(),
                recommend: rng.gen_range(0..100),
                quick_order: rng.gen_range(0..10),
                sold_out: false,
            })
            .collect();

        Self { items }
    }
}

impl Default for DummyCatalog {
    fn default() -> Self {
        Self::new(12)
    }
}

impl MenuCatalog for DummyCatalog {
    fn items(&self) -> Vec<MenuItem> {
        self.items.clone()
    }
}

/// Filter items by keyword (case-insensitive name match) and category
///
/// Empty keyword or category means "no constraint".
pub fn filter_items(items: &[MenuItem], keyword: &str, category: &str) -> Vec<MenuItem> {
    let keyword = keyword.trim().to_lowercase();
    items
        .iter()
        .filter(|item| {
            let matches_category = category.is_empty() || item.category == category;
            let matches_keyword =
                keyword.is_empty() || item.name.to_lowercase().contains(&keyword);
            matches_category && matches_keyword
        })
        .cloned()
        .collect()
}

/// Unique categories in first-seen order
pub fn categories(items: &[MenuItem]) -> Vec<String> {
    let mut seen = Vec::new();
    for item in items {
        if !item.category.is_empty() && !seen.contains(&item.category) {
            seen.push(item.category.clone());
        }
    }
    seen
}
