pub mod output;
pub mod press;
pub mod session;

pub use output::CliLogOutput;
pub use press::Press;
pub use session::SessionStore;
