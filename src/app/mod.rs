// Application layer: the five analytics modules and what the shell needs to
// switch between and display them.

pub mod modules;
pub mod render;
pub mod state;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    SmartInventory,
    CustomerAI,
    MarketPulse,
    EmployeeCoPilot,
    StorePerformanceDiagnoser,
}

impl ModuleKind {
    pub const ALL: [ModuleKind; 5] = [
        ModuleKind::SmartInventory,
        ModuleKind::CustomerAI,
        ModuleKind::MarketPulse,
        ModuleKind::EmployeeCoPilot,
        ModuleKind::StorePerformanceDiagnoser,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::SmartInventory => "Smart Inventory",
            Self::CustomerAI => "Customer AI",
            Self::MarketPulse => "Market Pulse",
            Self::EmployeeCoPilot => "Employee Co-Pilot",
            Self::StorePerformanceDiagnoser => "Store Performance Diagnoser",
        }
    }

    /// 載入中顯示的提示文字
    pub fn loading_text(&self) -> &'static str {
        match self {
            Self::SmartInventory => "Analyzing inventory and sales data...",
            Self::CustomerAI => "Crafting personalized customer engagements...",
            Self::MarketPulse => "Synthesizing market intelligence...",
            Self::EmployeeCoPilot => "Searching the knowledge base...",
            Self::StorePerformanceDiagnoser => "Diagnosing store performance...",
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_module_has_distinct_label() {
        let labels: HashSet<_> = ModuleKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(labels.len(), ModuleKind::ALL.len());
        assert_eq!(ModuleKind::CustomerAI.to_string(), "Customer AI");
    }
}
