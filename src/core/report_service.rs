use crate::domain::model::Order;
use crate::domain::ports::ReportGenerator;
use crate::utils::error::Result;

/// Knows nothing about formats; whatever generator it was built with does the work.
pub struct ReportService<G: ReportGenerator> {
    generator: G,
}

impl<G: ReportGenerator> ReportService<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn generate_report(&self, orders: &[Order]) -> Result<String> {
        self.generator.generate_report(orders)
    }
}
