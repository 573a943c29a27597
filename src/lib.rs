//! Battle Arsenal - weapon type catalog and attack resolution rules

pub mod core;
pub mod weapons;
