pub mod collector;
pub mod report;
pub mod resolver;
pub mod session;
