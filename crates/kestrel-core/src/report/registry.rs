use super::{AverageReport, Report};
use std::collections::HashMap;

type ReportFactory = fn() -> Box<dyn Report>;

/// Name-to-report lookup
///
/// Adding a report variant means registering one more factory; lookup logic
/// never changes. An unknown name yields `None`, not a default report.
pub struct ReportRegistry {
    reports: HashMap<&'static str, ReportFactory>,
}

impl ReportRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            reports: HashMap::new(),
        }
    }

    /// Register a report variant under a name
    pub fn register(&mut self, name: &'static str, factory: ReportFactory) {
        self.reports.insert(name, factory);
    }

    /// Look up a report by name
    pub fn get(&self, name: &str) -> Option<Box<dyn Report>> {
        self.reports.get(name).map(|factory| factory())
    }

    /// Registered report names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.reports.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for ReportRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register("average", || Box::new(AverageReport));
        registry
    }
}
