pub(crate) mod frame;
pub(crate) mod markup;
pub(crate) mod mount;
