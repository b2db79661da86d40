use super::PromptSource;
use crate::app::ModuleKind;
use crate::core::ledger::{parse_ledger, serialize_ledger};
use crate::core::sales_generator::{generate_recent_sales, generate_sales};
use crate::domain::model::{InventoryLevels, SalesEntry};
use crate::domain::responses::SmartInventoryResponse;
use crate::fixtures::{mock_data, prompts};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use rand::Rng;
use regex::Regex;
use std::sync::OnceLock;

/// 重新產生銷售資料時的預設筆數
pub const DEFAULT_GENERATED_SALES: usize = 75;

fn leading_integer_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*([+-]?\d+)").expect("integer pattern is valid"))
}

/// 取開頭的整數部分，例如 "12abc" 為 12、"3.7" 為 3；負數或溢位回傳 None
fn leading_quantity(input: &str) -> Option<u32> {
    let digits = leading_integer_regex().captures(input)?.get(1)?.as_str();
    let value = digits.parse::<i64>().ok()?;
    u32::try_from(value).ok()
}

/// Live inventory levels and sales ledger feeding the smart-order prompt.
#[derive(Debug, Clone)]
pub struct SmartInventoryModule {
    inventory: InventoryLevels,
    sales_history: Vec<SalesEntry>,
}

impl SmartInventoryModule {
    /// Starts from the fixture inventory and the fixture ledger.
    pub fn from_fixtures() -> Result<Self> {
        Ok(Self {
            inventory: mock_data::inventory_levels()?,
            sales_history: parse_ledger(mock_data::SALES_DATA_CSV),
        })
    }

    pub fn with_data(inventory: InventoryLevels, sales_history: Vec<SalesEntry>) -> Self {
        Self {
            inventory,
            sales_history,
        }
    }

    pub fn inventory(&self) -> &InventoryLevels {
        &self.inventory
    }

    pub fn sales_history(&self) -> &[SalesEntry] {
        &self.sales_history
    }

    /// Applies a quantity typed by the user.
    ///
    /// The leading integer of the input is stored when it is non-negative
    /// (`"12abc"` stores 12), a blank entry resets the item to 0, anything
    /// else is ignored. Returns whether the level changed.
    pub fn update_quantity(&mut self, item_name: &str, input: &str) -> bool {
        let input = input.trim();
        let quantity = if input.is_empty() {
            0
        } else {
            match leading_quantity(input) {
                Some(quantity) => quantity,
                None => {
                    tracing::warn!("⚠️ Ignoring invalid quantity '{}' for {}", input, item_name);
                    return false;
                }
            }
        };

        let updated = self.inventory.set_quantity(item_name, quantity);
        if !updated {
            tracing::warn!("⚠️ Unknown inventory item: {}", item_name);
        }
        updated
    }

    /// Replaces the ledger with `count` random sales of the current items.
    pub fn regenerate_sales(&mut self, count: usize) {
        self.sales_history = generate_recent_sales(&self.inventory.keys(), count);
        tracing::info!("🎲 Generated {} synthetic sales", self.sales_history.len());
    }

    pub fn regenerate_sales_with<R: Rng + ?Sized>(&mut self, count: usize, now: DateTime<Utc>, rng: &mut R) {
        self.sales_history = generate_sales(&self.inventory.keys(), count, now, rng);
    }
}

impl PromptSource for SmartInventoryModule {
    type Output = SmartInventoryResponse;

    const KIND: ModuleKind = ModuleKind::SmartInventory;

    fn compose_prompt(&self) -> Result<String> {
        let inventory_json = serde_json::to_string(&self.inventory.without_images())?;
        let sales_csv = serialize_ledger(&self.sales_history)?;

        Ok(prompts::SMART_INVENTORY_PROMPT.render(&[
            ("sales_data_csv", sales_csv.as_str()),
            ("weather_forecast_json", mock_data::WEATHER_FORECAST_JSON),
            ("local_events_text", mock_data::LOCAL_EVENTS_TEXT),
            ("inventory_levels_json", inventory_json.as_str()),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modules::test_support::ScriptedGenerator;
    use crate::app::modules::ModuleController;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_prompt_uses_live_inventory_and_ledger() {
        let mut module = SmartInventoryModule::from_fixtures().unwrap();
        assert!(module.update_quantity("Oat Milk", "3"));

        let prompt = module.compose_prompt().unwrap();

        assert!(prompt.contains(r#""Oat Milk":{"quantity_on_hand":3,"unit":"gallons"}"#));
        assert!(prompt.contains("date,item_sku,item_name,quantity_sold,price\n2023-07-28,CB001,Cold Brew,50,4.50"));
        assert!(prompt.contains("Heatwave"));
        assert!(prompt.contains("City Marathon"));
        assert!(!prompt.contains("unsplash"));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn test_update_quantity_rules() {
        let mut module = SmartInventoryModule::from_fixtures().unwrap();

        assert!(module.update_quantity("Croissants", ""));
        assert_eq!(module.inventory().get("Croissants").unwrap().quantity_on_hand, 0);

        assert!(!module.update_quantity("Croissants", "-4"));
        assert!(!module.update_quantity("Croissants", "lots"));
        assert_eq!(module.inventory().get("Croissants").unwrap().quantity_on_hand, 0);

        assert!(!module.update_quantity("Bagels", "10"));
    }

    #[test]
    fn test_update_quantity_takes_leading_digits() {
        let mut module = SmartInventoryModule::from_fixtures().unwrap();

        assert!(module.update_quantity("Croissants", "12abc"));
        assert_eq!(module.inventory().get("Croissants").unwrap().quantity_on_hand, 12);

        assert!(module.update_quantity("Croissants", "3.7"));
        assert_eq!(module.inventory().get("Croissants").unwrap().quantity_on_hand, 3);

        assert!(module.update_quantity("Croissants", "+5 boxes"));
        assert_eq!(module.inventory().get("Croissants").unwrap().quantity_on_hand, 5);

        assert!(!module.update_quantity("Croissants", "abc12"));
        assert!(!module.update_quantity("Croissants", "-2x"));
        assert!(!module.update_quantity("Croissants", "99999999999"));
        assert_eq!(module.inventory().get("Croissants").unwrap().quantity_on_hand, 5);
    }

    #[test]
    fn test_regenerated_sales_follow_inventory_keys() {
        let mut module = SmartInventoryModule::from_fixtures().unwrap();
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        module.regenerate_sales_with(DEFAULT_GENERATED_SALES, now, &mut rng);

        let keys = module.inventory().keys();
        assert_eq!(module.sales_history().len(), DEFAULT_GENERATED_SALES);
        assert!(module.sales_history().iter().all(|s| keys.contains(&s.item_name)));

        let prompt = module.compose_prompt().unwrap();
        assert!(!prompt.contains("CB001"));
    }

    #[test]
    fn test_empty_ledger_still_sends_header() {
        let module = SmartInventoryModule::with_data(InventoryLevels::new(), Vec::new());
        let prompt = module.compose_prompt().unwrap();

        assert!(prompt.contains("Sales History (date,item_sku,item_name,quantity_sold,price\n)"));
        assert!(prompt.contains("Current Inventory Levels ({})"));
    }

    #[tokio::test]
    async fn test_trigger_stores_smart_orders() {
        let generator = ScriptedGenerator::replying(
            r#"{"projectedMonthlySavings": 900, "smartOrders": [{"product": "Lavender Syrup", "change": "+50%", "reason": "Only 2 liters left."}]}"#,
        );
        let mut controller = ModuleController::new(SmartInventoryModule::from_fixtures().unwrap());

        let state = controller.trigger(&generator).await;

        let data = state.data().unwrap();
        assert_eq!(data.projected_monthly_savings, Some(900.0));
        assert_eq!(data.smart_orders[0].product.as_deref(), Some("Lavender Syrup"));
    }
}
