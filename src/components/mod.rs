pub mod about;
pub mod hero;
pub mod logo;
pub mod template;
pub mod toast;
pub mod tradeForm;
pub mod work;
