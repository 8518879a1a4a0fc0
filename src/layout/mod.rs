//! Pure geometry: where every poster element goes. No drawing and no I/O.

pub(crate) mod positions;
pub(crate) mod seats;
