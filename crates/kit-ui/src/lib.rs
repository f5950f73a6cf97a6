pub mod components;
pub mod hooks;
pub mod icons;
mod provider;

pub use components::*;
pub use hooks::*;
pub use icons::*;
pub use provider::*;

pub use kit_state;
