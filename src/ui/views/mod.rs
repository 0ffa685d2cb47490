pub mod drill;
pub mod home;
