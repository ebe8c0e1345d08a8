pub mod ledger;

pub use ledger::{LedgerClient, TransferApi};
