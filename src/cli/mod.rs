pub mod args;
pub mod notices;
pub mod prompt;
pub mod request;
pub mod run;

pub use args::*;
pub use prompt::*;
pub use request::*;
pub use run::*;
