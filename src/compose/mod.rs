pub(crate) mod branding;
pub(crate) mod format;
pub(crate) mod generator;
