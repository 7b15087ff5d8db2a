//! Page-level feature slices.
pub(crate) mod home;
pub(crate) mod sections;
