pub mod bootstrap;
pub mod link;
pub mod sync;
