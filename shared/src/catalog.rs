//! Static service catalog.
//!
//! The catalog ships with the app as embedded JSON and is parsed on demand.
//! Nothing here is editable at runtime.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

const BUILTIN_SERVICES: &str = include_str!("../data/services.json");

/// Service grouping used by the catalog and revenue views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ServiceCategory {
    Membership,
    PersonalTraining,
    GroupClass,
    Wellness,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 4] = [
        ServiceCategory::Membership,
        ServiceCategory::PersonalTraining,
        ServiceCategory::GroupClass,
        ServiceCategory::Wellness,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ServiceCategory::Membership => "Memberships",
            ServiceCategory::PersonalTraining => "Personal Training",
            ServiceCategory::GroupClass => "Group Classes",
            ServiceCategory::Wellness => "Wellness",
        }
    }
}

/// A purchasable service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub category: ServiceCategory,
    /// Price in dollars
    pub price: f64,
    /// Session length; `None` for memberships
    pub duration_minutes: Option<u32>,
    pub description: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate service id: {0}")]
    DuplicateServiceId(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCatalog {
    services: Vec<Service>,
}

impl ServiceCatalog {
    /// Catalog bundled with the application
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_SERVICES)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let services: Vec<Service> = serde_json::from_str(json)?;
        Self::from_services(services)
    }

    pub fn from_services(services: Vec<Service>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for service in &services {
            if !seen.insert(service.id.as_str()) {
                return Err(CatalogError::DuplicateServiceId(service.id.clone()));
            }
        }

        debug!(count = services.len(), "Service catalog loaded");
        Ok(Self { services })
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn find(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|service| service.id == id)
    }

    pub fn by_category(&self, category: ServiceCategory) -> Vec<&Service> {
        self.services
            .iter()
            .filter(|service| service.category == category)
            .collect()
    }

    /// Categories that have at least one service, in declaration order
    pub fn categories(&self) -> Vec<ServiceCategory> {
        ServiceCategory::ALL
            .into_iter()
            .filter(|category| self.services.iter().any(|s| s.category == *category))
            .collect()
    }

    /// Cheapest and most expensive price, if the catalog is not empty
    pub fn price_range(&self) -> Option<(f64, f64)> {
        let mut prices = self.services.iter().map(|service| service.price);
        let first = prices.next()?;
        Some(prices.fold((first, first), |(low, high), price| (low.min(price), high.max(price))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = ServiceCatalog::builtin().unwrap();

        assert!(!catalog.services().is_empty());
        assert_eq!(catalog.categories(), ServiceCategory::ALL.to_vec());
        let memberships = catalog.by_category(ServiceCategory::Membership);
        assert!(memberships.iter().all(|s| s.duration_minutes.is_none()));
    }

    #[test]
    fn test_find_service() {
        let catalog = ServiceCatalog::builtin().unwrap();

        let spin = catalog.find("service::spin").unwrap();
        assert_eq!(spin.category, ServiceCategory::GroupClass);
        assert_eq!(spin.duration_minutes, Some(50));
        assert!(catalog.find("service::unknown").is_none());
    }

    #[test]
    fn test_duplicate_service_ids_rejected() {
        let json = r#"[
            {"id": "x", "name": "One", "category": "Wellness", "price": 10.0, "duration_minutes": 30, "description": ""},
            {"id": "x", "name": "Two", "category": "Wellness", "price": 20.0, "duration_minutes": 30, "description": ""}
        ]"#;

        match ServiceCatalog::from_json(json) {
            Err(CatalogError::DuplicateServiceId(id)) => assert_eq!(id, "x"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = ServiceCatalog::from_json(r#"[{"id": "x"}]"#);
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_categories_only_lists_present() {
        let catalog = ServiceCatalog::from_json(
            r#"[{"id": "y", "name": "Yoga", "category": "GroupClass", "price": 18.0, "duration_minutes": 60, "description": ""}]"#,
        )
        .unwrap();

        assert_eq!(catalog.categories(), vec![ServiceCategory::GroupClass]);
        assert_eq!(catalog.price_range(), Some((18.0, 18.0)));
    }

    #[test]
    fn test_price_range() {
        let catalog = ServiceCatalog::builtin().unwrap();
        assert_eq!(catalog.price_range(), Some((15.0, 550.0)));

        let empty = ServiceCatalog::from_services(Vec::new()).unwrap();
        assert_eq!(empty.price_range(), None);
        assert!(empty.categories().is_empty());
    }
}
