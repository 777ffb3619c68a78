pub mod consts;
pub mod document;
pub mod error;
pub mod io;
pub mod ops;
pub mod raster;
pub mod script;
