use crate::utils::error::{DemoError, Result};
use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub customer: String,
    pub product: String,
    pub amount: Decimal,
}

impl Order {
    pub fn new(id: u32, customer: impl Into<String>, product: impl Into<String>, amount: Decimal) -> Self {
        Self {
            id,
            customer: customer.into(),
            product: product.into(),
            amount,
        }
    }

    /// Exact decimal product, so the scale of both operands is kept (480.50 * 0.10 = 48.0500).
    pub fn calculate_discount(&self, rate: Decimal) -> Decimal {
        self.amount * rate
    }
}

/// Performs transactions and keeps their log. Rendering the log is someone else's job.
#[derive(Debug, Clone)]
pub struct BankAccount {
    account_number: u64,
    balance: Decimal,
    transactions: Vec<String>,
}

impl BankAccount {
    pub fn new(account_number: u64) -> Self {
        Self {
            account_number,
            balance: Decimal::ZERO,
            transactions: Vec::new(),
        }
    }

    pub fn account_number(&self) -> u64 {
        self.account_number
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn transactions(&self) -> &[String] {
        &self.transactions
    }

    /// Fails without touching the balance or the log when the result would
    /// not fit in a `Decimal`.
    pub fn deposit(&mut self, amount: Decimal) -> Result<()> {
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| self.overflow("deposit", amount))?;
        self.balance = balance;
        self.transactions
            .push(format!("Deposited ${}. New Balance: ${}", amount, self.balance));
        Ok(())
    }

    /// No overdraft check; the balance may go negative.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<()> {
        let balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| self.overflow("withdrawal", amount))?;
        self.balance = balance;
        self.transactions
            .push(format!("Withdrew ${}. New Balance: ${}", amount, self.balance));
        Ok(())
    }

    fn overflow(&self, operation: &str, amount: Decimal) -> DemoError {
        DemoError::ProcessingError {
            message: format!(
                "{} of {} overflows balance {} on account {}",
                operation, amount, self.balance, self.account_number
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Csv,
    Xml,
    Json,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 3] = [ReportFormat::Csv, ReportFormat::Xml, ReportFormat::Json];

    pub fn title(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "CSV",
            ReportFormat::Xml => "XML",
            ReportFormat::Json => "JSON",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DemoKind {
    Srp,
    Ocp,
    Lsp,
    Isp,
    Dip,
}

impl DemoKind {
    pub const ALL: [DemoKind; 5] = [
        DemoKind::Srp,
        DemoKind::Ocp,
        DemoKind::Lsp,
        DemoKind::Isp,
        DemoKind::Dip,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            DemoKind::Srp => "Single Responsibility Principle",
            DemoKind::Ocp => "Open-Closed Principle",
            DemoKind::Lsp => "Liskov Substitution Principle",
            DemoKind::Isp => "Interface Segregation Principle",
            DemoKind::Dip => "Dependency Inversion Principle",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deposit_then_withdraw_logs_in_order() {
        let mut account = BankAccount::new(708090100);
        account.deposit(dec!(100000)).unwrap();
        account.withdraw(dec!(99999)).unwrap();

        assert_eq!(account.balance(), dec!(1));
        assert_eq!(
            account.transactions(),
            [
                "Deposited $100000. New Balance: $100000",
                "Withdrew $99999. New Balance: $1",
            ]
        );
    }

    #[test]
    fn test_withdraw_allows_negative_balance() {
        let mut account = BankAccount::new(1);
        account.withdraw(dec!(5.25)).unwrap();
        assert_eq!(account.balance(), dec!(-5.25));
    }

    #[test]
    fn test_overflowing_transactions_are_rejected() {
        let mut account = BankAccount::new(7);
        account.deposit(Decimal::MAX).unwrap();

        let err = account.withdraw(dec!(-1)).unwrap_err();
        assert!(matches!(err, DemoError::ProcessingError { .. }));
        assert!(account.deposit(dec!(1)).is_err());

        assert_eq!(account.balance(), Decimal::MAX);
        assert_eq!(account.transactions().len(), 1);

        let mut account = BankAccount::new(8);
        account.withdraw(Decimal::MAX).unwrap();
        assert!(account.withdraw(dec!(1)).is_err());
        assert_eq!(account.balance(), Decimal::MIN);
    }

    #[test]
    fn test_discount_keeps_decimal_scale() {
        let order = Order::new(121314, "Rayhan Chowdhury", "C# BOOK", dec!(480.50));
        let discount = order.calculate_discount(dec!(0.10));

        assert_eq!(discount, dec!(48.05));
        assert_eq!(discount.to_string(), "48.0500");
    }

    #[test]
    fn test_report_format_deserializes_lowercase() {
        let format: ReportFormat = serde_json::from_str("\"xml\"").unwrap();
        assert_eq!(format, ReportFormat::Xml);
    }
}
