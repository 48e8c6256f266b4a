mod filter;
mod flat_map;
mod get;
mod map;
mod recover;
mod set;
