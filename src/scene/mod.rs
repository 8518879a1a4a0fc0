pub(crate) mod club_icon;
pub(crate) mod color;
pub(crate) mod crew;
pub(crate) mod preset;
pub(crate) mod template;
