pub mod insights;
pub mod log;
pub mod session;
pub mod suggest;
pub mod workflow;
