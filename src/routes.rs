//! Named routes of the hosting application that the pages link to.

use common::{RouteError, RouteTable};
use serde::Deserialize;
use tracing::{debug, info};

pub const FINANCIAL_HEALTH: &str = "financial_health.main";
pub const QUIZ: &str = "quiz.main";
pub const DASHBOARD: &str = "dashboard.index";
pub const BUDGET: &str = "budget.main";
pub const BILL: &str = "bill.main";
pub const EMERGENCY_FUND: &str = "emergency_fund.main";
pub const NET_WORTH: &str = "net_worth.main";
pub const LEARNING_HUB: &str = "learning_hub.main";
pub const NEWS: &str = "news.news_list";
pub const TAXATION: &str = "taxation.calculate_tax";

/// Default mount point of every route the home page references.
pub const DEFAULT_ROUTES: [(&str, &str); 10] = [
    (FINANCIAL_HEALTH, "/financial-health/"),
    (QUIZ, "/quiz/"),
    (DASHBOARD, "/dashboard/"),
    (BUDGET, "/budget/"),
    (BILL, "/bill/"),
    (EMERGENCY_FUND, "/EMERGENCYFUND/"),
    (NET_WORTH, "/net-worth/"),
    (LEARNING_HUB, "/learning-hub/"),
    (NEWS, "/news/"),
    (TAXATION, "/taxation/calculate"),
];

/// A configured mount point for a named route.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouteOverride {
    pub name: String,
    pub path: String,
}

/// Builds the route table from the defaults, then applies configured overrides.
///
/// Overrides may also register routes the defaults do not know about.
pub fn build_route_table(overrides: &[RouteOverride]) -> Result<RouteTable, RouteError> {
    let mut table = RouteTable::new();
    for (name, pattern) in DEFAULT_ROUTES {
        table.insert(name, pattern)?;
    }
    for route in overrides {
        debug!("Overriding route {} -> {}", route.name, route.path);
        table.insert(route.name.clone(), &route.path)?;
    }
    info!("Route table ready with {} routes", table.len());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::UrlFor;

    #[test]
    fn test_every_default_route_resolves() {
        let table = build_route_table(&[]).unwrap();
        assert_eq!(table.len(), 10);
        for (name, pattern) in DEFAULT_ROUTES {
            assert_eq!(table.url_for(name, &[]).unwrap(), pattern);
        }
    }

    #[test]
    fn test_override_replaces_default() {
        let overrides = [RouteOverride {
            name: NEWS.to_string(),
            path: "/articles/".to_string(),
        }];
        let table = build_route_table(&overrides).unwrap();
        assert_eq!(table.url_for(NEWS, &[]).unwrap(), "/articles/");
        assert_eq!(table.len(), 10);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let overrides = [RouteOverride {
            name: BILL.to_string(),
            path: "bills".to_string(),
        }];
        assert!(build_route_table(&overrides).is_err());
    }
}
