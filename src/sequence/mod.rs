pub(crate) mod pipeline;
pub(crate) mod plan;
pub(crate) mod selection;
pub(crate) mod sink;
