pub mod datetime;
pub mod rodeo;
