use crate::domain::model::Package;

/// Ordered, in-memory collection of packages. Owns its records
/// exclusively; lives for the process lifetime, nothing is persisted.
#[derive(Debug, Default)]
pub struct PackageRegistry {
    packages: Vec<Package>,
}

impl PackageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a package. Validation already happened in the
    /// constructor, so this always succeeds. Duplicate tracking IDs
    /// are allowed.
    pub fn add(&mut self, package: Package) {
        tracing::debug!("Registering package {}", package.tracking_id());
        self.packages.push(package);
    }

    /// Current order: insertion order until a sort reorders it.
    pub fn list_all(&self) -> &[Package] {
        &self.packages
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Reorders in place by non-decreasing weight. The sort is stable:
    /// packages of equal weight keep their relative input order.
    pub fn sort_by_weight(&mut self) {
        // Weights are validated finite and positive, total_cmp keeps
        // the comparison total anyway.
        self.packages
            .sort_by(|a, b| a.weight().total_cmp(&b.weight()));
    }

    /// Binary search by tracking ID over a working index sorted
    /// lexicographically. The stored order is left untouched. With
    /// duplicate IDs, which match is returned is unspecified.
    pub fn find_by_tracking_id(&self, tracking_id: &str) -> Option<&Package> {
        let mut index: Vec<&Package> = self.packages.iter().collect();
        index.sort_by(|a, b| a.tracking_id().cmp(b.tracking_id()));

        index
            .binary_search_by(|pkg| pkg.tracking_id().cmp(tracking_id))
            .ok()
            .map(|pos| index[pos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ServiceTier;

    fn pkg(id: &str, weight: f64) -> Package {
        Package::new(id, "12 Elm St", weight, ServiceTier::Standard).unwrap()
    }

    fn ids(registry: &PackageRegistry) -> Vec<&str> {
        registry.list_all().iter().map(|p| p.tracking_id()).collect()
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut registry = PackageRegistry::new();
        registry.add(pkg("PKG00003", 3.0));
        registry.add(pkg("PKG00001", 1.0));
        registry.add(pkg("PKG00002", 2.0));
        assert_eq!(registry.len(), 3);
        assert_eq!(ids(&registry), vec!["PKG00003", "PKG00001", "PKG00002"]);
    }

    #[test]
    fn test_sort_by_weight_non_decreasing() {
        let mut registry = PackageRegistry::new();
        registry.add(pkg("PKG00001", 9.5));
        registry.add(pkg("PKG00002", 0.5));
        registry.add(pkg("PKG00003", 4.0));
        registry.sort_by_weight();

        let weights: Vec<f64> = registry.list_all().iter().map(|p| p.weight()).collect();
        for pair in weights.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        assert_eq!(ids(&registry), vec!["PKG00002", "PKG00003", "PKG00001"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_weights() {
        // Equal-weight packages must keep their relative input order.
        let mut registry = PackageRegistry::new();
        registry.add(pkg("PKG00009", 2.0));
        registry.add(pkg("PKG00001", 2.0));
        registry.add(pkg("PKG00005", 1.0));
        registry.add(pkg("PKG00004", 2.0));
        registry.sort_by_weight();
        assert_eq!(
            ids(&registry),
            vec!["PKG00005", "PKG00009", "PKG00001", "PKG00004"]
        );
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut registry = PackageRegistry::new();
        registry.add(pkg("PKG00002", 2.0));
        registry.add(pkg("PKG00001", 1.0));
        registry.sort_by_weight();
        let once = ids(&registry)
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>();
        registry.sort_by_weight();
        assert_eq!(ids(&registry), once);
    }

    #[test]
    fn test_sort_empty_and_single() {
        let mut registry = PackageRegistry::new();
        registry.sort_by_weight();
        assert!(registry.is_empty());

        registry.add(pkg("PKG00001", 1.0));
        registry.sort_by_weight();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_find_returns_matching_record() {
        let mut registry = PackageRegistry::new();
        registry.add(pkg("PKG00003", 3.0));
        registry.add(pkg("PKG00001", 1.0));
        registry.add(pkg("PKG00002", 2.0));

        let found = registry.find_by_tracking_id("PKG00001").unwrap();
        assert_eq!(found.tracking_id(), "PKG00001");
        assert_eq!(found.weight(), 1.0);
    }

    #[test]
    fn test_find_misses() {
        let registry = PackageRegistry::new();
        assert!(registry.find_by_tracking_id("PKG99999").is_none());

        let mut registry = PackageRegistry::new();
        registry.add(pkg("PKG00001", 1.0));
        assert!(registry.find_by_tracking_id("PKG99999").is_none());
    }

    #[test]
    fn test_find_does_not_disturb_stored_order() {
        let mut registry = PackageRegistry::new();
        registry.add(pkg("PKG00003", 3.0));
        registry.add(pkg("PKG00001", 1.0));
        registry.add(pkg("PKG00002", 2.0));

        registry.find_by_tracking_id("PKG00002");
        assert_eq!(ids(&registry), vec!["PKG00003", "PKG00001", "PKG00002"]);

        registry.sort_by_weight();
        registry.find_by_tracking_id("PKG00003");
        assert_eq!(ids(&registry), vec!["PKG00001", "PKG00002", "PKG00003"]);
    }

    #[test]
    fn test_find_with_duplicate_ids_returns_some_match() {
        let mut registry = PackageRegistry::new();
        registry.add(pkg("PKG00001", 1.0));
        registry.add(pkg("PKG00001", 2.0));

        let found = registry.find_by_tracking_id("PKG00001").unwrap();
        assert_eq!(found.tracking_id(), "PKG00001");
    }
}
