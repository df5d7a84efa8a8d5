use crate::domain::model::Order;
use crate::domain::ports::ReportGenerator;
use crate::utils::error::Result;

/// Pretty-printed array of order objects. Amounts are written as bare numbers
/// with their decimal scale intact, which `serde_json` would not do for us.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReportGenerator;

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, orders: &[Order]) -> Result<String> {
        let objects = orders
            .iter()
            .map(|order| -> Result<String> {
                Ok(format!(
                    "  {{\n    \"ID\": {},\n    \"Customer\": {},\n    \"Product\": {},\n    \"Amount\": {}\n  }}",
                    order.id,
                    serde_json::to_string(&order.customer)?,
                    serde_json::to_string(&order.product)?,
                    order.amount,
                ))
            })
            .collect::<Result<Vec<String>>>()?;

        let mut report = String::from("[\n");
        if !objects.is_empty() {
            report.push_str(&objects.join(",\n"));
            report.push('\n');
        }
        report.push(']');

        tracing::debug!("Generated JSON report for {} orders", orders.len());
        Ok(report)
    }
}
