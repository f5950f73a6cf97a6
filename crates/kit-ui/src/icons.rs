use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCheck, LdChevronDown, LdChevronRight, LdEye, LdEyeOff, LdPanelLeft, LdPanelRight, LdX,
};
use dioxus_free_icons::Icon as LucideIcon;

/// Icons the kit draws itself. Callers pass their own icon markup as children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    Check,
    ChevronDown,
    ChevronRight,
    Close,
    Eye,
    EyeOff,
    PanelLeft,
    PanelRight,
}

#[component]
pub fn Icon(
    name: IconName,
    #[props(default = 16)] size: u32,
    #[props(default)] class: String,
) -> Element {
    let class = if class.is_empty() {
        "icon".to_string()
    } else {
        format!("icon {class}")
    };

    match name {
        IconName::Check => rsx! { LucideIcon { icon: LdCheck, width: size, height: size, class } },
        IconName::ChevronDown => rsx! { LucideIcon { icon: LdChevronDown, width: size, height: size, class } },
        IconName::ChevronRight => rsx! { LucideIcon { icon: LdChevronRight, width: size, height: size, class } },
        IconName::Close => rsx! { LucideIcon { icon: LdX, width: size, height: size, class } },
        IconName::Eye => rsx! { LucideIcon { icon: LdEye, width: size, height: size, class } },
        IconName::EyeOff => rsx! { LucideIcon { icon: LdEyeOff, width: size, height: size, class } },
        IconName::PanelLeft => rsx! { LucideIcon { icon: LdPanelLeft, width: size, height: size, class } },
        IconName::PanelRight => rsx! { LucideIcon { icon: LdPanelRight, width: size, height: size, class } },
    }
}
