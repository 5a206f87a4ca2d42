pub mod footer;
pub mod icon;
pub mod nav;
pub mod ui;
