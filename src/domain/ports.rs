use crate::domain::model::{DemoKind, Order, ReportFormat};
use crate::utils::error::Result;
use rust_decimal::Decimal;
use std::io::Write;

pub trait ConfigProvider {
    fn orders(&self) -> &[Order];
    fn report_formats(&self) -> &[ReportFormat];
    fn discount_rate(&self) -> Decimal;
    fn account_number(&self) -> u64;
    fn deposit_amount(&self) -> Decimal;
    fn withdraw_amount(&self) -> Decimal;
}

/// Renders an ordered list of orders as one text blob, preserving input order.
pub trait ReportGenerator {
    fn generate_report(&self, orders: &[Order]) -> Result<String>;
}

impl<G: ReportGenerator + ?Sized> ReportGenerator for Box<G> {
    fn generate_report(&self, orders: &[Order]) -> Result<String> {
        (**self).generate_report(orders)
    }
}

/// Dimensions are `i32`; measurements are `i64` so squaring a side never overflows.
pub trait Shape {
    fn area(&self) -> i64;
    /// Returns -1 when the shape's dimensions cannot describe a real shape.
    fn perimeter(&self) -> i64;
    fn color(&self) -> &str;
    fn details(&self) -> String;

    fn color_line(&self) -> String {
        format!("Color: {}", self.color())
    }
}

pub trait Device {
    fn power_on(&self) -> String;
    fn power_off(&self) -> String;
}

pub trait Connectable {
    fn connect_to_internet(&self) -> String;
}

pub trait Displayable {
    fn display(&self, content: &str) -> String;
}

pub trait Camera {
    fn take_photo(&self) -> String;
    fn record_video(&self) -> String;
}

pub trait MusicPlayback {
    fn play_music(&self) -> String;
    fn pause_music(&self) -> String;
    fn stop_music(&self) -> String;
}

/// Somewhere notes can be saved to and read back from.
pub trait DataHarbor {
    /// Returns the acknowledgement the backend prints for the save.
    fn save(&self, data: &str) -> String;
    fn retrieve(&self, id: u32) -> String;
}

pub trait Demo {
    fn kind(&self) -> DemoKind;
    fn run(&self, out: &mut dyn Write) -> Result<()>;
}
