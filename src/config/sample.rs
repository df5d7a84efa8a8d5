use crate::domain::model::Order;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const SAMPLE_ACCOUNT_NUMBER: u64 = 708090100;

pub fn sample_deposit() -> Decimal {
    dec!(100000)
}

pub fn sample_withdrawal() -> Decimal {
    dec!(99999)
}

pub fn sample_discount_rate() -> Decimal {
    dec!(0.10)
}

pub fn sample_orders() -> Vec<Order> {
    vec![
        Order::new(121314, "Rayhan Chowdhury", "C# BOOK", dec!(480.50)),
        Order::new(919293, "Sohel Chowdhury", "English BOOK", dec!(550.50)),
        Order::new(343536, "Rasel Chowdhury", "Arabic BOOK", dec!(750.50)),
        Order::new(143, "YOU", "Flowers", dec!(1000.00)),
    ]
}
