//! One module per derivation, mirroring the view kinds.

pub(crate) mod goals;
pub(crate) mod match_info;
pub(crate) mod periods;
pub(crate) mod score;
pub(crate) mod shots;
pub(crate) mod substitutions;
