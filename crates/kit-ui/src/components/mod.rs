// Element factories: no state of their own
pub mod button;
pub mod card;
pub mod input;
pub mod label;
pub mod switch;

// Overlays driven by the open/close state machine
pub mod collapsible;
pub mod dialog;
pub mod portal;
pub mod sheet;

// Anchored popovers
pub mod dropdown_menu;
pub mod select;
pub mod tooltip;

// Depends on button, portal and the viewport listener
pub mod sidebar;

pub mod form;

pub use button::*;
pub use card::*;
pub use collapsible::*;
pub use dialog::*;
pub use dropdown_menu::*;
pub use form::*;
pub use input::*;
pub use label::*;
pub use portal::*;
pub use select::*;
pub use sheet::*;
pub use sidebar::*;
pub use switch::*;
pub use tooltip::*;
