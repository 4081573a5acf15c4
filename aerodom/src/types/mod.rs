mod attr;
mod style;

pub use attr::AttrValue;
pub use style::Style;
