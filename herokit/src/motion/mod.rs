pub(crate) mod indicator;
pub(crate) mod mapper;
pub(crate) mod reveal;
pub(crate) mod rotator;
pub(crate) mod scroll;
