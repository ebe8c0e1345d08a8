pub mod catalog;
pub mod charge_service;

pub use charge_service::ChargeService;
