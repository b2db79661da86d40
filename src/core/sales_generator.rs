use crate::domain::model::SalesEntry;
use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

/// 模擬銷售資料的時間範圍（天）
pub const SALES_WINDOW_DAYS: i64 = 90;

const DEFAULT_PRICE: &str = "2.50";

const PRICE_TABLE: &[(&str, &str)] = &[
    ("Cold Brew Concentrate", "4.50"),
    ("Espresso Beans", "3.00"),
    ("Milk (Dairy)", "0.50"),
    ("Oat Milk", "0.75"),
    ("Croissants", "3.50"),
    ("Lavender Syrup", "0.50"),
    ("Avocado Toast", "7.00"),
];

pub fn unit_price(item_name: &str) -> &'static str {
    PRICE_TABLE
        .iter()
        .find(|(name, _)| *name == item_name)
        .map(|(_, price)| *price)
        .unwrap_or(DEFAULT_PRICE)
}

/// `ESP` + zero-padded sequence index, e.g. `ESP007`.
fn synthesize_sku(item_name: &str, index: usize) -> String {
    let prefix: String = item_name.chars().take(3).collect::<String>().to_uppercase();
    format!("{}{:03}", prefix, index)
}

/// Random sales over the trailing window ending at `now`, newest first.
pub fn generate_sales<R: Rng + ?Sized>(
    item_names: &[String],
    count: usize,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<SalesEntry> {
    if item_names.is_empty() {
        return Vec::new();
    }

    let window_ms = Duration::days(SALES_WINDOW_DAYS).num_milliseconds();
    let mut sales: Vec<SalesEntry> = (0..count)
        .filter_map(|index| {
            let item_name = item_names.choose(&mut *rng)?;
            let quantity: u32 = rng.gen_range(1..=5);
            let offset = Duration::milliseconds(rng.gen_range(0..=window_ms));
            let date = (now - offset).format("%Y-%m-%d").to_string();

            Some(SalesEntry {
                date,
                item_sku: synthesize_sku(item_name, index),
                item_name: item_name.clone(),
                quantity_sold: quantity.to_string(),
                price: unit_price(item_name).to_string(),
            })
        })
        .collect();

    // ISO 日期字串可直接以字典序比較
    sales.sort_by(|a, b| b.date.cmp(&a.date));
    tracing::debug!("Generated {} synthetic sales", sales.len());
    sales
}

pub fn generate_recent_sales(item_names: &[String], count: usize) -> Vec<SalesEntry> {
    generate_sales(item_names, count, Utc::now(), &mut rand::thread_rng())
}
