pub mod gateway;
pub mod menu;
pub mod offer;
