pub mod abi;
pub mod actions;
pub mod app;
pub mod contracts;
pub mod deployment;
pub mod resources;
pub mod wallet;
