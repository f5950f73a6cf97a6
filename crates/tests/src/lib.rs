#[cfg(test)]
mod common;

#[cfg(test)]
mod element_tests;

#[cfg(test)]
mod overlay_render_tests;

#[cfg(test)]
mod popover_render_tests;

#[cfg(test)]
mod sidebar_render_tests;

#[cfg(test)]
mod form_render_tests;

#[cfg(test)]
mod page_lifecycle_tests;
