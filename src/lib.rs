pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::demos::{DipDemo, IspDemo, LspDemo, OcpDemo, SrpDemo};
pub use config::{CliConfig, DemoConfig};
pub use self::core::{report_service::ReportService, runner::DemoRunner};
pub use domain::model::{BankAccount, DemoKind, Order, ReportFormat};
pub use domain::ports::{ConfigProvider, Demo, ReportGenerator};
pub use utils::error::{DemoError, Result};
