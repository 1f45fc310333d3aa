pub mod admin;
pub mod auth;
pub mod blood_request;
pub mod board;
pub mod dashboard;
pub mod donation;
pub mod donor;
pub mod inventory;
pub mod users;
