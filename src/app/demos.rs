//! One driver per principle. Each builds its sample objects and writes the
//! walkthrough to the given output.

use crate::app::devices::{DigitalCamera, MusicPlayer, SmartTv, Smartphone};
use crate::app::shapes::{Rectangle, Square, Triangle};
use crate::app::storage::{CloudStorage, Database};
use crate::config::DemoConfig;
use crate::core::data_manager::DataManager;
use crate::core::report_service::ReportService;
use crate::core::shape_manager::ShapeManager;
use crate::core::statement::StatementPrinter;
use crate::domain::model::{BankAccount, DemoKind, Order, ReportFormat};
use crate::domain::ports::{
    Camera, ConfigProvider, Connectable, Demo, Device, Displayable, MusicPlayback, Shape,
};
use crate::utils::error::Result;
use rust_decimal::Decimal;
use std::io::Write;

impl DemoKind {
    pub fn build(&self, config: &dyn ConfigProvider) -> Box<dyn Demo> {
        match self {
            DemoKind::Srp => Box::new(SrpDemo::from_config(config)),
            DemoKind::Ocp => Box::new(OcpDemo::from_config(config)),
            DemoKind::Lsp => Box::new(LspDemo::default()),
            DemoKind::Isp => Box::new(IspDemo),
            DemoKind::Dip => Box::new(DipDemo::default()),
        }
    }
}

pub struct SrpDemo {
    pub account_number: u64,
    pub deposit: Decimal,
    pub withdraw: Decimal,
}

impl SrpDemo {
    pub fn from_config(config: &dyn ConfigProvider) -> Self {
        Self {
            account_number: config.account_number(),
            deposit: config.deposit_amount(),
            withdraw: config.withdraw_amount(),
        }
    }
}

impl Default for SrpDemo {
    fn default() -> Self {
        Self::from_config(&DemoConfig::default())
    }
}

impl Demo for SrpDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Srp
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let mut account = BankAccount::new(self.account_number);
        account.deposit(self.deposit)?;
        account.withdraw(self.withdraw)?;
        tracing::debug!("Account {} closing balance {}", account.account_number(), account.balance());

        StatementPrinter.print(&account, out)
    }
}

pub struct OcpDemo {
    pub orders: Vec<Order>,
    pub formats: Vec<ReportFormat>,
    pub discount_rate: Decimal,
}

impl OcpDemo {
    pub fn from_config(config: &dyn ConfigProvider) -> Self {
        Self {
            orders: config.orders().to_vec(),
            formats: config.report_formats().to_vec(),
            discount_rate: config.discount_rate(),
        }
    }
}

impl Default for OcpDemo {
    fn default() -> Self {
        Self::from_config(&DemoConfig::default())
    }
}

impl Demo for OcpDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Ocp
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        for (index, format) in self.formats.iter().enumerate() {
            if index > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{} Report:", format.title())?;

            let service = ReportService::new(format.generator());
            writeln!(out, "{}", service.generate_report(&self.orders)?)?;
        }

        writeln!(out)?;
        writeln!(out, "Discount:")?;
        for order in &self.orders {
            writeln!(
                out,
                "For {} is : {} On {}.",
                order.customer,
                order.calculate_discount(self.discount_rate),
                order.product
            )?;
        }
        Ok(())
    }
}

pub struct LspDemo {
    pub shapes: Vec<Box<dyn Shape>>,
}

impl Default for LspDemo {
    fn default() -> Self {
        Self {
            shapes: vec![
                Box::new(Rectangle::new(5, 3, "LAL")),
                Box::new(Square::new(4, "KALA")),
                Box::new(Triangle::new(6, 8, "NIL")),
            ],
        }
    }
}

impl Demo for LspDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Lsp
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let manager = ShapeManager;

        for shape in &self.shapes {
            writeln!(out, "{}", manager.calculate_area(shape.as_ref()))?;
        }
        for shape in &self.shapes {
            writeln!(out, "{}", manager.calculate_perimeter(shape.as_ref()))?;
        }
        for shape in &self.shapes {
            writeln!(out, "{}", manager.display_shape_details(shape.as_ref()))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IspDemo;

impl IspDemo {
    fn section(out: &mut dyn Write, title: &str, lines: &[String]) -> Result<()> {
        writeln!(out, "Using {}:", title)?;
        for line in lines {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

impl Demo for IspDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Isp
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let phone = Smartphone;
        Self::section(
            out,
            "Smartphone",
            &[
                phone.power_on(),
                phone.connect_to_internet(),
                phone.display("Smartphone home screen"),
                phone.take_photo(),
                phone.record_video(),
                phone.play_music(),
                phone.pause_music(),
                phone.stop_music(),
                phone.power_off(),
            ],
        )?;
        writeln!(out)?;

        let camera = DigitalCamera;
        Self::section(
            out,
            "Digital Camera",
            &[
                camera.power_on(),
                camera.take_photo(),
                camera.record_video(),
                camera.display("Captured image"),
                camera.power_off(),
            ],
        )?;
        writeln!(out)?;

        let player = MusicPlayer;
        Self::section(
            out,
            "Music Player",
            &[
                player.power_on(),
                player.play_music(),
                player.pause_music(),
                player.stop_music(),
                player.power_off(),
            ],
        )?;
        writeln!(out)?;

        let tv = SmartTv;
        Self::section(
            out,
            "Smart TV",
            &[
                tv.power_on(),
                tv.connect_to_internet(),
                tv.display("Smart TV main menu"),
                tv.play_music(),
                tv.pause_music(),
                tv.stop_music(),
                tv.power_off(),
            ],
        )
    }
}

pub struct DipDemo {
    pub database_note: String,
    pub cloud_note: String,
}

impl Default for DipDemo {
    fn default() -> Self {
        Self {
            database_note: "O my Lord! I am indeed needy of whatever good You may send to me..[Surah Qassas; 28:24]"
                .to_string(),
            cloud_note: "So, surely with hardship comes ease (Quran 94:5)".to_string(),
        }
    }
}

impl Demo for DipDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Dip
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let database_manager = DataManager::new(Database);
        writeln!(out, "{}", database_manager.send_data(&self.database_note))?;

        let cloud_manager = DataManager::new(CloudStorage);
        writeln!(out, "{}", cloud_manager.send_data(&self.cloud_note))?;

        writeln!(out, "{}", cloud_manager.get_data(94))?;
        writeln!(out, "{}", database_manager.get_data(28))?;
        Ok(())
    }
}
