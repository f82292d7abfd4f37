//! The dashboard panels, one per grid cell.
pub mod history;
pub mod market_overview;
pub mod order_book;
pub mod portfolio;
pub mod trade_form;
pub mod wallet_info;
