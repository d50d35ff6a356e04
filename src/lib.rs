//! Chip-firing on the complete graph K3.
//!
//! Every [`Configuration`] places some number of chips on each of the
//! three vertices A, B, C. Firing a vertex sends one chip along each of
//! its edges. For a fixed chip total, [`FiringGraph::build`] enumerates
//! every configuration and records where each legal firing leads.
pub mod compositions;
pub mod configuration;
pub mod graph;
pub mod vertex;

pub use compositions::*;
pub use configuration::*;
pub use graph::*;
pub use vertex::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Chip counts on a vertex. Signed, since candidate successors
/// may transiently hold negative counts before they are discarded.
pub type Chips = i32;

// ============================================================================
// K3 TOPOLOGY
// ============================================================================
/// Number of vertices in K3.
pub const K3_VERTICES: usize = 3;
/// Degree of every vertex in K3. Firing costs this many chips.
pub const K3_DEGREE: Chips = 2;

// ============================================================================
// TESTING PARAMETERS
// ============================================================================
/// Upper bound on the chip total of an arbitrary Configuration.
pub const ARBITRARY_CHIP_LIMIT: Chips = 64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
