//! Static demo fixtures standing in for live data sources.

use crate::domain::model::InventoryLevels;
use crate::utils::error::Result;

/// Trailing sales ledger for the flagship store; the ellipsis line is dropped by the parser.
pub const SALES_DATA_CSV: &str = r##"date,item_sku,item_name,quantity_sold,price
2023-07-28,CB001,Cold Brew,50,4.50
2023-07-28,ESP001,Espresso,30,3.00
2023-07-29,CB001,Cold Brew,55,4.50
2023-07-29,LM002,Lavender Latte,20,5.00
... (90 days of data) ...
2023-10-25,CB001,Cold Brew,60,4.50
2023-10-25,AVT001,Avocado Toast,25,7.00"##;

pub const WEATHER_FORECAST_JSON: &str = r##"{"forecast":[{"date":"2023-10-26","max_temp_f":75,"min_temp_f":60,"precipitation_chance":0.1,"condition":"Sunny"},{"date":"2023-10-27","max_temp_f":78,"min_temp_f":62,"precipitation_chance":0.1,"condition":"Mostly Sunny"},{"date":"2023-10-28","max_temp_f":85,"min_temp_f":65,"precipitation_chance":0.05,"condition":"Hot and Sunny"},{"date":"2023-10-29","max_temp_f":90,"min_temp_f":70,"precipitation_chance":0.0,"condition":"Heatwave"},{"date":"2023-10-30","max_temp_f":88,"min_temp_f":68,"precipitation_chance":0.1,"condition":"Sunny"},{"date":"2023-10-31","max_temp_f":70,"min_temp_f":55,"precipitation_chance":0.4,"condition":"Cloudy, chance of rain"},{"date":"2023-11-01","max_temp_f":65,"min_temp_f":50,"precipitation_chance":0.6,"condition":"Rain"}]}"##;

pub const LOCAL_EVENTS_TEXT: &str = r##"City Marathon on Saturday, Oct 28. Street closures near 5th Ave. Expected large crowds.
Food Festival downtown Sunday, Oct 29.
Art Gallery opening Friday, Oct 27 evening."##;

pub const INVENTORY_LEVELS_JSON: &str = r##"{"Cold Brew Concentrate":{"quantity_on_hand":20,"unit":"liters"},"Espresso Beans":{"quantity_on_hand":50,"unit":"kg"},"Milk (Dairy)":{"quantity_on_hand":30,"unit":"gallons"},"Oat Milk":{"quantity_on_hand":15,"unit":"gallons"},"Croissants":{"quantity_on_hand":24,"unit":"pieces"},"Lavender Syrup":{"quantity_on_hand":2,"unit":"liters"}}"##;

pub const CUSTOMER_PROFILES_JSON: &str = r##"[{"id":1,"name":"Sarah J.","segment":"Weekday Regular","visit_history":"28 visits in last 90 days, mostly M-F 8-9AM.","last_purchases":["Large Latte","Oat Milk","Croissant"]},{"id":2,"name":"David L.","segment":"Lapsed Vegan","last_visit_days_ago":45,"last_purchases":["Vegan Breakfast Wrap","Iced Americano","Almond Milk"]},{"id":3,"name":"Maria K.","segment":"In-Store Retail Buyer","visit_history":"Purchases whole coffee beans every 2 weeks.","last_purchases":["250g House Blend Beans","Espresso","Chemex Filters"]}]"##;

pub const COMPETITOR_REVIEWS_TEXT: &str = r##"Google Review for 'The Daily Grind': "The new Lavender Latte is amazing! 5 stars!"
Yelp for 'Brew & Bites': "Service was slow, but their seasonal pumpkin spice is good."
Google Review for 'The Daily Grind': "Overpriced for what it is. My cold brew was watery.""##;

pub const SOCIAL_MEDIA_TEXT: &str = r##"TikTok by @foodieNYC: "omg the new lavender latte at The Daily Grind is everything #coffeenyc #lavenderlatte"
Instagram post by @coffeelover123: "trying the olive oil coffee trend, not sure how I feel... #oliveoilcoffee #nyccoffee"
Tweet by @LocalExplorer: "Anyone know a good quiet coffee shop downtown for work? Tired of the usual spots.""##;

pub const FOOD_BLOG_TEXT: &str = r##"Article from 'NYC Coffee Chronicle': "The artisanal coffee scene in Manhattan is booming. Shops are experimenting with unique flavors like cardamom and rose..."
Blog post 'Downtown Brews': "We visited three new coffee spots this week. 'The Daily Grind' stands out with its innovative menu, though 'Brew & Bites' has a cozier atmosphere."
Review on 'CaffeineFiend': "Forget Starbucks, the real coffee gems are local. This week's highlight: Coffee Tasting Flights are becoming a thing!""##;

pub const STAFF_SOP_EXCERPT: &str = r##"
Standard Operating Procedures - Catalyst Coffee Co.

Section 3: Customer Service
...
3.4 Customer Complaints:
  a. Listen actively and empathetically to the customer's concern.
  b. Apologize for the issue, even if it's not directly the company's fault.
  c. Offer a solution: remake the drink, offer a refund, or provide a voucher for a future visit.
  d. If the customer is still unsatisfied, escalate to the shift manager.
  e. Log all significant complaints in the daily shift report.
...
Section 5: Beverage Preparation
...
5.1 Espresso Machine Operation:
  a. Purge group head before each shot.
  b. Grind beans fresh per order. Target dose: 18-20g.
  c. Tamp evenly with consistent pressure.
  d. Extraction time should be between 25-30 seconds for a double shot.
  e. Clean portafilter and group head thoroughly after each use.
...
"##;

pub const PRODUCT_GUIDE_EXCERPT: &str = r##"
Catalyst Coffee Co. - Product Guide

Ethiopian Yirgacheffe (Single Origin)
  - Tasting Notes: Bright citrus, floral, black tea. Delicate body.
  - Roast Level: Light-Medium
  - Best For: Pour over, Aeropress. Excellent as a black coffee.
  - Story: Sourced from smallholder farmers in the Yirgacheffe region, known for its high altitude and unique coffee varietals. Washed process.
  - Upselling Tip: "If you enjoy a lighter, more tea-like coffee, our Ethiopian Yirgacheffe is a fantastic choice. It has beautiful lemon and floral notes."

House Blend (Signature)
  - Tasting Notes: Chocolate, caramel, toasted nuts. Balanced and smooth.
  - Roast Level: Medium
  - Best For: Espresso, drip coffee, lattes. Versatile.
  - Story: A carefully selected blend of beans from Central and South America, designed for consistency and broad appeal.
  - Upselling Tip: "Our House Blend is a classic for a reason! It's perfect for your daily latte or a smooth black coffee."
"##;

/// 所有品項目前共用同一張示意圖
pub const INVENTORY_IMAGE_URL: &str = "https://source.unsplash.com/300x200/?coldbrew";

/// Fixture inventory with image references attached, in fixture order.
pub fn inventory_levels() -> Result<InventoryLevels> {
    let mut levels: InventoryLevels = serde_json::from_str(INVENTORY_LEVELS_JSON)?;
    for name in levels.keys() {
        if let Some(item) = levels.get(&name).cloned() {
            levels.insert(
                name,
                crate::domain::model::InventoryItem {
                    image_url: Some(INVENTORY_IMAGE_URL.to_string()),
                    ..item
                },
            );
        }
    }
    Ok(levels)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaffQueryExample {
    pub id: &'static str,
    pub query: &'static str,
}

pub const STAFF_QUERY_EXAMPLES: [StaffQueryExample; 4] = [
    StaffQueryExample {
        id: "q1",
        query: "What's the process for handling a customer complaint about a cold coffee?",
    },
    StaffQueryExample {
        id: "q2",
        query: "Tell me about our new single-origin Ethiopian Yirgacheffe beans.",
    },
    StaffQueryExample {
        id: "q3",
        query: "How do I properly clean the espresso machine group head?",
    },
    StaffQueryExample {
        id: "q4",
        query: "What are the tasting notes for the House Blend?",
    },
];

pub fn staff_query_example(id: &str) -> Option<&'static StaffQueryExample> {
    STAFF_QUERY_EXAMPLES.iter().find(|example| example.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerformanceIssueExample {
    pub id: &'static str,
    pub store_display_name: &'static str,
    pub store_internal_id: &'static str,
    pub concern_display_name: &'static str,
    pub concern_internal_id: &'static str,
}

pub const PERFORMANCE_ISSUE_EXAMPLES: [PerformanceIssueExample; 2] = [
    PerformanceIssueExample {
        id: "issue1",
        store_display_name: "Flagship Store - 5th Avenue",
        store_internal_id: "flagship_5th_ave",
        concern_display_name: "Declining Pastry Sales",
        concern_internal_id: "pastry_sales_decline",
    },
    PerformanceIssueExample {
        id: "issue2",
        store_display_name: "Flagship Store - 5th Avenue",
        store_internal_id: "flagship_5th_ave",
        concern_display_name: "Low Retail Coffee Bean Sales",
        concern_internal_id: "coffee_bean_sales_low",
    },
];

pub fn performance_issue(id: &str) -> Option<&'static PerformanceIssueExample> {
    PERFORMANCE_ISSUE_EXAMPLES.iter().find(|issue| issue.id == id)
}

/// Supporting data for one store/concern pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreIssueData {
    pub sales_data_extract_csv: &'static str,
    pub customer_feedback_summary: &'static str,
    pub competitor_activity: &'static str,
}

const PASTRY_SALES_DECLINE: StoreIssueData = StoreIssueData {
    sales_data_extract_csv: r##"date,category,item,quantity_sold,revenue
2023-10-01,Pastries,Croissant,15,52.50
2023-10-01,Pastries,Almond Croissant,10,45.00
... (30 days, showing declining trend for pastries) ...
2023-10-30,Pastries,Croissant,8,28.00
2023-10-30,Pastries,Almond Croissant,5,22.50"##,
    customer_feedback_summary: r##"Recent feedback mentions pastries sometimes "not fresh" or "a bit dry". Some positive comments on coffee quality. A few mentions of "The Daily Grind's new bakery section is amazing.""##,
    competitor_activity: r##"The Daily Grind (2 blocks away) launched an expanded in-house bakery section three weeks ago with a grand opening promotion. They are heavily advertising "freshly baked hourly"."##,
};

const COFFEE_BEAN_SALES_LOW: StoreIssueData = StoreIssueData {
    sales_data_extract_csv: r##"date,category,item,quantity_sold,revenue
2023-10-01,Retail Beans,House Blend 250g,5,60.00
2023-10-01,Retail Beans,Ethiopian Yirgacheffe 250g,2,32.00
... (30 days, low and stagnant retail bean sales) ...
2023-10-30,Retail Beans,House Blend 250g,4,48.00
2023-10-30,Retail Beans,Ethiopian Yirgacheffe 250g,1,16.00"##,
    customer_feedback_summary: r##"Very few comments on retail beans. One customer asked if we offer grinding services. Most feedback is about beverages."##,
    competitor_activity: r##"Brew & Bites (competitor) offers a "subscribe and save" model for coffee beans with local delivery. They also promote "custom grind for your brew method"."##,
};

/// `downtown_main_st` is a known store with no fixture data yet.
pub fn store_issue_data(store_id: &str, concern_id: &str) -> Option<&'static StoreIssueData> {
    match (store_id, concern_id) {
        ("flagship_5th_ave", "pastry_sales_decline") => Some(&PASTRY_SALES_DECLINE),
        ("flagship_5th_ave", "coffee_bean_sales_low") => Some(&COFFEE_BEAN_SALES_LOW),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ledger::parse_ledger;

    #[test]
    fn test_inventory_fixture_order_and_images() {
        let levels = inventory_levels().unwrap();

        assert_eq!(
            levels.keys(),
            vec![
                "Cold Brew Concentrate",
                "Espresso Beans",
                "Milk (Dairy)",
                "Oat Milk",
                "Croissants",
                "Lavender Syrup"
            ]
        );
        assert_eq!(levels.get("Lavender Syrup").unwrap().quantity_on_hand, 2);
        assert!(levels.iter().all(|(_, item)| item.image_url.as_deref() == Some(INVENTORY_IMAGE_URL)));
    }

    #[test]
    fn test_sales_fixture_parses() {
        let rows = parse_ledger(SALES_DATA_CSV);
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].item_name, "Cold Brew");
        assert_eq!(rows[5].item_name, "Avocado Toast");
    }

    #[test]
    fn test_json_fixtures_are_valid() {
        let weather: serde_json::Value = serde_json::from_str(WEATHER_FORECAST_JSON).unwrap();
        assert_eq!(weather["forecast"].as_array().unwrap().len(), 7);

        let profiles: serde_json::Value = serde_json::from_str(CUSTOMER_PROFILES_JSON).unwrap();
        assert_eq!(profiles.as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_every_issue_has_store_data() {
        for issue in PERFORMANCE_ISSUE_EXAMPLES {
            assert!(store_issue_data(issue.store_internal_id, issue.concern_internal_id).is_some());
        }
        assert!(store_issue_data("downtown_main_st", "pastry_sales_decline").is_none());
    }

    #[test]
    fn test_example_lookups() {
        assert_eq!(staff_query_example("q3").unwrap().query, "How do I properly clean the espresso machine group head?");
        assert!(staff_query_example("q9").is_none());
        assert_eq!(performance_issue("issue2").unwrap().concern_internal_id, "coffee_bean_sales_low");
        assert!(performance_issue("").is_none());
    }
}
