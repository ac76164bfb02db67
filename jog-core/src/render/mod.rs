mod color;
mod element;
mod renderer;
mod template;

#[cfg(test)]
mod tests;

pub use color::ColorSpec;
pub use element::{Element, StartupStyle};
pub use renderer::{OTHERS_PLACEHOLDER, Renderer};
pub use template::{Template, TemplatePart};
