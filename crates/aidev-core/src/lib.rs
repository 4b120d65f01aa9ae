pub mod error;
pub mod installer;
pub mod io;
pub mod linker;
pub mod paths;
pub mod scaffold;
pub mod session;
pub mod settings;
pub mod sync;
pub mod token;

pub use error::{AidevError, Result};
pub use settings::Settings;
