//! Menu Item Model
//!
//! Menu items come from the catalog collaborator and are read-only to the
//! ordering engine: it only ever looks them up by id.

use serde::{Deserialize, Serialize};

/// Menu item entity (メニュー項目)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// Unit price in yen. 0 means complimentary (サービス品).
    pub price: i64,
    #[serde(default)]
    pub image_url: String,
    pub category: String,
    /// Recommendation weight (0-99), used by the frontend for sorting
    #[serde(default)]
    pub recommend: u8,
    /// Quick-order weight (0-9)
    #[serde(default)]
    pub quick_order: u8,
    #[serde(default)]
    pub sold_out: bool,
}

/// Result of a catalog lookup
///
/// A missing or unavailable catalog entry degrades to [`ResolvedItem::Unknown`]
/// (name = raw id, price 0) so cart and order math stays well-defined. This is
/// the single fallback path — callers never invent their own defaults.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedItem {
    Known(MenuItem),
    Unknown { id: String },
}

impl ResolvedItem {
    /// Display name: the item name, or the raw id for unknown items
    pub fn name(&self) -> &str {
        match self {
            Self::Known(item) => &item.name,
            Self::Unknown { id } => id,
        }
    }

    /// Unit price: the catalog price, or 0 for unknown items
    pub fn price(&self) -> i64 {
        match self {
            Self::Known(item) => item.price,
            Self::Unknown { .. } => 0,
        }
    }

    /// The catalog price, if the item is known
    pub fn price_opt(&self) -> Option<i64> {
        match self {
            Self::Known(item) => Some(item.price),
            Self::Unknown { .. } => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, price: i64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            price,
            image_url: String::new(),
            category: "酒肴".to_string(),
            recommend: 0,
            quick_order: 0,
            sold_out: false,
        }
    }

    #[test]
    fn test_resolved_known() {
        let resolved = ResolvedItem::Known(item("m01", "冷奴", 380));
        assert_eq!(resolved.name(), "冷奴");
        assert_eq!(resolved.price(), 380);
        assert_eq!(resolved.price_opt(), Some(380));
        assert!(resolved.is_known());
    }

    #[test]
    fn test_resolved_unknown_degrades_to_zero() {
        let resolved = ResolvedItem::Unknown {
            id: "m99".to_string(),
        };
        assert_eq!(resolved.name(), "m99");
        assert_eq!(resolved.price(), 0);
        assert_eq!(resolved.price_opt(), None);
        assert!(!resolved.is_known());
    }

    #[test]
    fn test_menu_item_serde_defaults() {
        let json = r#"{"id":"m01","name":"冷奴","price":380,"category":"酒肴"}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.image_url, "");
        assert_eq!(item.recommend, 0);
        assert!(!item.sold_out);
    }
}
