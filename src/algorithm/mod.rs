/// Randomized recursive backtracker carving
pub mod generator;
/// Maze aggregate tying grid, randomness and openings together
pub mod maze;
/// Injected uniform randomness
pub mod random;
/// Depth-first search state machine and step iterator
pub mod solver;
