use crate::domain::model::Order;
use crate::domain::ports::ReportGenerator;
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct XmlReportGenerator;

impl ReportGenerator for XmlReportGenerator {
    fn generate_report(&self, orders: &[Order]) -> Result<String> {
        let mut report = String::from("<Orders>\n");

        for order in orders {
            report.push_str(&format!("  <Order ID=\"{}\">\n", order.id));
            report.push_str(&format!("    <Customer>{}</Customer>\n", escape_xml(&order.customer)));
            report.push_str(&format!("    <Product>{}</Product>\n", escape_xml(&order.product)));
            report.push_str(&format!("    <Amount>{}</Amount>\n", order.amount));
            report.push_str("  </Order>\n");
        }

        report.push_str("</Orders>");
        tracing::debug!("Generated XML report for {} orders", orders.len());
        Ok(report)
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
