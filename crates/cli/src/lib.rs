// Process setup
pub mod logging;
pub mod version;

// Config directory and the seed file it points at
pub mod seed;
pub mod state;

pub use seed::{Seed, SeedError};
pub use state::{AppConfig, AppState, StateError};
pub use version::{build_info, BuildInfo};
