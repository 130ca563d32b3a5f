pub mod calculator_panel;
pub mod links_popup;
pub mod login_card;
pub mod notification_center;
pub mod tab_bar;
