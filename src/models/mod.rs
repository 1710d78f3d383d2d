pub mod page;
pub mod statement;
pub mod upload;
