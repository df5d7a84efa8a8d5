use crate::domain::model::Order;
use crate::domain::ports::ReportGenerator;
use crate::utils::error::{DemoError, Result};

pub const CSV_HEADER: [&str; 4] = ["OrderId", "Customer", "Product", "Amount"];

/// One header row, then one row per order. Every row ends with `\n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvReportGenerator;

impl ReportGenerator for CsvReportGenerator {
    fn generate_report(&self, orders: &[Order]) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(CSV_HEADER)?;
        for order in orders {
            let id = order.id.to_string();
            let amount = order.amount.to_string();
            writer.write_record([
                id.as_str(),
                order.customer.as_str(),
                order.product.as_str(),
                amount.as_str(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| DemoError::IoError(e.into_error()))?;
        tracing::debug!("Generated CSV report for {} orders ({} bytes)", orders.len(), bytes.len());

        String::from_utf8(bytes).map_err(|e| DemoError::ProcessingError {
            message: format!("CSV report is not valid UTF-8: {}", e),
        })
    }
}
