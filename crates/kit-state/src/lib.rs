pub mod channel;
pub mod config;
pub mod error;
pub mod form;
pub mod host;
pub mod hover;
pub mod id;
pub mod overlay;
pub mod portal;
pub mod select;
pub mod sidebar;
pub mod timers;

pub use channel::*;
pub use config::*;
pub use error::*;
pub use form::*;
pub use host::*;
pub use hover::*;
pub use id::*;
pub use overlay::*;
pub use portal::*;
pub use select::*;
pub use sidebar::*;
pub use timers::*;
