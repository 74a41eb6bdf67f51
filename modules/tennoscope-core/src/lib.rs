pub mod render;
pub mod worldstate;

pub use render::{render_plains, render_sortie};
pub use worldstate::{
    DayNightCycle, DecodeError, Faction, FactionCycle, Mission, Sortie, StateCycle,
    TemperatureCycle, WorldState,
};
