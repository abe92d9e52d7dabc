//! Display formatting for terminal output

pub mod format;
pub mod list;

pub use format::{format_date, format_price};
pub use list::{format_list_details, format_overview, share_url};
