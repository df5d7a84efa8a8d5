pub mod demos;
pub mod devices;
pub mod reports;
pub mod shapes;
pub mod storage;
