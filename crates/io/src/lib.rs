// Report output

pub mod text;
pub mod xlsx;
