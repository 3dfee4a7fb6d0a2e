pub mod arena;
pub mod levels;
pub mod merge;
pub mod spawn;
