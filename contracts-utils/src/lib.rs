//! Common utilities used outside of the ledger itself, e.g. for the demo
//! binary & testing

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod crypto;
pub mod mock_erc20;
