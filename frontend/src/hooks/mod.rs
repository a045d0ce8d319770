pub mod use_spin_engine;

pub use use_spin_engine::*;
