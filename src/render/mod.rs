pub(crate) mod background;
pub(crate) mod compositor;
pub(crate) mod encode;
pub(crate) mod names;
pub(crate) mod surface;
pub(crate) mod text;
