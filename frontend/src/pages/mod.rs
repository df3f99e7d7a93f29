pub mod admin;
pub mod dashboard;
pub mod favorites;
pub mod forgot_password;
pub mod home;
pub mod login;
pub mod properties;
pub mod property_detail;
pub mod property_form;
pub mod register;
