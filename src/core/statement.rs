use crate::domain::model::BankAccount;
use crate::utils::error::Result;
use std::io::Write;

/// Owns the statement layout so `BankAccount` never has to.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatementPrinter;

impl StatementPrinter {
    pub fn print(&self, account: &BankAccount, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Statement for Account: {}", account.account_number())?;
        for transaction in account.transactions() {
            writeln!(out, "{}", transaction)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_print_statement() {
        let mut account = BankAccount::new(708090100);
        account.deposit(dec!(100000)).unwrap();
        account.withdraw(dec!(99999)).unwrap();

        let mut out = Vec::new();
        StatementPrinter.print(&account, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Statement for Account: 708090100\n\
             Deposited $100000. New Balance: $100000\n\
             Withdrew $99999. New Balance: $1\n"
        );
    }

    #[test]
    fn test_print_statement_without_transactions() {
        let mut out = Vec::new();
        StatementPrinter.print(&BankAccount::new(42), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Statement for Account: 42\n");
    }
}
