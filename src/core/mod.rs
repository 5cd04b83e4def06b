pub mod assemble;
pub mod classify;
pub mod compile;
pub mod normalize;
pub mod session;
