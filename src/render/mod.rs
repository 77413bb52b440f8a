pub(crate) mod frame;
pub(crate) mod indicator;
pub(crate) mod raster;
pub(crate) mod renderer;
