pub mod documentation;
pub mod home;
