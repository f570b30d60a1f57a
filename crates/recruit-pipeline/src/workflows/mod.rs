pub mod intake;
pub mod pipeline;
