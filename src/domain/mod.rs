//! Domain values exposed by the admin service layer.

pub mod tenant;
pub mod types;
