use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// 銷售帳本中的一列。數量與價格保留原始字串，重新序列化時不改變格式。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SalesEntry {
    pub date: String,
    pub item_sku: String,
    pub item_name: String,
    pub quantity_sold: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub quantity_on_hand: u32,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl InventoryItem {
    pub fn new(quantity_on_hand: u32, unit: impl Into<String>) -> Self {
        Self {
            quantity_on_hand,
            unit: unit.into(),
            image_url: None,
        }
    }
}

/// Inventory keyed by item name, kept in fixture order.
///
/// Serializes as a JSON object whose keys follow insertion order, which is
/// the order the prompt shows the items in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryLevels {
    items: Vec<(String, InventoryItem)>,
}

impl InventoryLevels {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入或覆蓋；覆蓋時保留原本的位置
    pub fn insert(&mut self, name: impl Into<String>, item: InventoryItem) {
        let name = name.into();
        match self.items.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = item,
            None => self.items.push((name, item)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&InventoryItem> {
        self.items
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, item)| item)
    }

    /// Returns false when the item is unknown.
    pub fn set_quantity(&mut self, name: &str, quantity: u32) -> bool {
        match self.items.iter_mut().find(|(existing, _)| existing == name) {
            Some((_, item)) => {
                item.quantity_on_hand = quantity;
                true
            }
            None => false,
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.items.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &InventoryItem)> {
        self.items.iter().map(|(name, item)| (name.as_str(), item))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Same map with the image references stripped, as sent to the model.
    pub fn without_images(&self) -> Self {
        Self {
            items: self
                .items
                .iter()
                .map(|(name, item)| {
                    (
                        name.clone(),
                        InventoryItem {
                            image_url: None,
                            ..item.clone()
                        },
                    )
                })
                .collect(),
        }
    }
}

impl Serialize for InventoryLevels {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.items.len()))?;
        for (name, item) in &self.items {
            map.serialize_entry(name, item)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for InventoryLevels {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LevelsVisitor;

        impl<'de> Visitor<'de> for LevelsVisitor {
            type Value = InventoryLevels;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of item name to inventory item")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut levels = InventoryLevels::new();
                while let Some((name, item)) = access.next_entry::<String, InventoryItem>()? {
                    levels.insert(name, item);
                }
                Ok(levels)
            }
        }

        deserializer.deserialize_map(LevelsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_keep_fixture_order() {
        let json = r#"{"Zucchini Bread":{"quantity_on_hand":3,"unit":"loaves"},"Almond Milk":{"quantity_on_hand":9,"unit":"gallons"}}"#;
        let levels: InventoryLevels = serde_json::from_str(json).unwrap();

        assert_eq!(levels.keys(), vec!["Zucchini Bread", "Almond Milk"]);
        assert_eq!(serde_json::to_string(&levels).unwrap(), json);
    }

    #[test]
    fn test_insert_existing_key_keeps_position() {
        let mut levels = InventoryLevels::new();
        levels.insert("Oat Milk", InventoryItem::new(15, "gallons"));
        levels.insert("Croissants", InventoryItem::new(24, "pieces"));
        levels.insert("Oat Milk", InventoryItem::new(4, "gallons"));

        assert_eq!(levels.len(), 2);
        assert_eq!(levels.keys()[0], "Oat Milk");
        assert_eq!(levels.get("Oat Milk").unwrap().quantity_on_hand, 4);
    }

    #[test]
    fn test_set_quantity_unknown_item() {
        let mut levels = InventoryLevels::new();
        levels.insert("Croissants", InventoryItem::new(24, "pieces"));

        assert!(levels.set_quantity("Croissants", 0));
        assert!(!levels.set_quantity("Bagels", 10));
        assert_eq!(levels.get("Croissants").unwrap().quantity_on_hand, 0);
    }

    #[test]
    fn test_without_images_drops_image_field() {
        let mut levels = InventoryLevels::new();
        let mut item = InventoryItem::new(2, "liters");
        item.image_url = Some("https://example.com/img".to_string());
        levels.insert("Lavender Syrup", item);

        let json = serde_json::to_string(&levels.without_images()).unwrap();
        assert_eq!(json, r#"{"Lavender Syrup":{"quantity_on_hand":2,"unit":"liters"}}"#);
    }
}
