pub mod dts;
pub mod io_utils;
pub mod serde;
