
pub mod bbox;
pub mod interval;
pub mod numeric;
pub mod solids;

pub mod prelude;
