pub(crate) mod plan;
