pub mod errors;
pub mod schemes;

pub use errors::{BridgeError, ConfigError, NativeAppError};
pub use schemes::CONTENT_SCHEME;

pub type Result<T> = std::result::Result<T, NativeAppError>;
