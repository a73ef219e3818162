pub mod pathfinding;
pub mod sorting;
