pub mod check;
pub mod docs;
pub mod profile;
pub mod validate;
