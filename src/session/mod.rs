pub(crate) mod generator;
pub(crate) mod request;
