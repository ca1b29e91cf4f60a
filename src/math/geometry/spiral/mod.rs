// src/math/geometry/spiral/mod.rs
pub mod config;
pub mod inscriber;

pub use self::config::SpiralConfig;
pub use self::inscriber::{
    SpiralInscriber, SpiralOutcome, SpiralState, StopReason, contract_vertex, draw_spiral,
};
