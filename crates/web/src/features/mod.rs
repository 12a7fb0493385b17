pub mod rodeos;
