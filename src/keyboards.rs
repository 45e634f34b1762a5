//! Inline keyboards

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

/// Create a callback button whose label doubles as its callback data
fn btn(order_type: &str) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(order_type.to_string(), order_type.to_string())
}

/// Order-type picker shown by /start
///
/// The callback data of each button is the order-type name, matched
/// against the template catalog when pressed.
pub fn order_types() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![btn("LIMIT"), btn("MARKET")],
        vec![btn("STOP_LIMIT"), btn("STOP_MARKET")],
        vec![btn("CANCEL_ORDER")],
    ])
}
