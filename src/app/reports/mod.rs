pub mod csv_report;
pub mod json_report;
pub mod xml_report;

pub use csv_report::CsvReportGenerator;
pub use json_report::JsonReportGenerator;
pub use xml_report::XmlReportGenerator;

use crate::domain::model::ReportFormat;
use crate::domain::ports::ReportGenerator;

impl ReportFormat {
    pub fn generator(&self) -> Box<dyn ReportGenerator> {
        match self {
            ReportFormat::Csv => Box::new(CsvReportGenerator),
            ReportFormat::Xml => Box::new(XmlReportGenerator),
            ReportFormat::Json => Box::new(JsonReportGenerator),
        }
    }
}
