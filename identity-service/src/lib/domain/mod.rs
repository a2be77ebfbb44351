pub mod access;
pub mod credential;
