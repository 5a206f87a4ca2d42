pub mod home;
pub mod legal;
pub mod tools;
