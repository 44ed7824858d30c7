pub(crate) mod mux;
pub(crate) mod provider;
pub(crate) mod window;
