//! Shared components: Pico.css building blocks plus the wallet notices that
//! sit outside the dashboard grid.
pub mod header;
pub mod install_notice;
pub mod pico;
pub mod toast;
pub mod wallet_debug;
pub mod wallet_detector;
