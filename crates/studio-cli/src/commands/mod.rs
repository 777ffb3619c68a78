pub mod apply;
pub mod config;
pub mod filters;
pub mod info;
pub mod run;
