pub mod data_manager;
pub mod report_service;
pub mod runner;
pub mod shape_manager;
pub mod statement;

pub use crate::domain::model::{BankAccount, DemoKind, Order, ReportFormat};
pub use crate::domain::ports::{ConfigProvider, DataHarbor, Demo, ReportGenerator, Shape};
pub use crate::utils::error::Result;
