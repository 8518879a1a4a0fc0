use std::fmt;

use serde::Serialize;

use crate::foundation::core::Point;
use crate::layout::positions::NamePositioning;
use crate::scene::crew::{BoatClass, Crew};
use crate::scene::template::NameDisplayKind;

/// Badge shown next to a name by the labeled display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SeatLabel {
    Bow,
    Stroke,
    Cox,
    Number(u8),
}

impl fmt::Display for SeatLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bow => f.write_str("B"),
            Self::Stroke => f.write_str("S"),
            Self::Cox => f.write_str("C"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Side of the centerline a name is drawn on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Right of the centerline (+oar length).
    Starboard,
    /// Left of the centerline (-oar length).
    Port,
    Center,
}

/// One crew name and where it goes. `at` is the center of the name's label.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NamePlacement {
    /// Index into `Crew::crew_names`.
    pub index: usize,
    pub name: String,
    pub at: Point,
    pub side: Side,
    pub label: Option<SeatLabel>,
}

/// Visual row (1..=8) of an eight's rowing seat. Seat 1 sits in row 8, seat 8 in row 1.
/// The mapping is its own inverse.
pub fn eight_visual_position(seat: u8) -> u8 {
    9 - seat
}

fn side_x(pos: &NamePositioning, side: Side) -> f64 {
    match side {
        Side::Starboard => pos.center_x + pos.oar_length,
        Side::Port => pos.center_x - pos.oar_length,
        Side::Center => pos.center_x,
    }
}

struct Placer<'a> {
    crew: &'a Crew,
    pos: &'a NamePositioning,
    out: Vec<NamePlacement>,
}

impl Placer<'_> {
    fn push(&mut self, index: usize, side: Side, y: f64, label: Option<SeatLabel>) {
        let Some(name) = self.crew.name_at(index) else {
            return;
        };
        self.out.push(NamePlacement {
            index,
            name: name.to_owned(),
            at: Point::new(side_x(self.pos, side), y),
            side,
            label,
        });
    }
}

/// Map every non-blank crew name to its position for the given display style.
///
/// Missing or blank names are skipped. Unrecognized boat classes produce no placements. The
/// output order is the paint order.
pub fn place_names(
    crew: &Crew,
    pos: &NamePositioning,
    display: NameDisplayKind,
) -> Vec<NamePlacement> {
    let labeled = display == NameDisplayKind::Labeled;
    let mut p = Placer {
        crew,
        pos,
        out: Vec::new(),
    };

    let Some(class) = crew.boat_type.class() else {
        return p.out;
    };

    match class {
        BoatClass::Eight => {
            let cox_y = pos.base_y + 7.0 * pos.spacing_y + if labeled { 40.0 } else { 20.0 };
            if !labeled {
                p.push(0, Side::Center, cox_y, Some(SeatLabel::Cox));
            }
            for seat in 1..=8u8 {
                let visual = eight_visual_position(seat);
                let y = pos.base_y + f64::from(visual - 1) * pos.spacing_y;
                let side = if visual % 2 == 1 {
                    Side::Starboard
                } else {
                    Side::Port
                };
                let label = match visual {
                    8 => SeatLabel::Stroke,
                    1 => SeatLabel::Bow,
                    n => SeatLabel::Number(n),
                };
                p.push(usize::from(seat), side, y, Some(label));
            }
            if labeled {
                p.push(0, Side::Center, cox_y, Some(SeatLabel::Cox));
            }
        }
        BoatClass::CoxedFour | BoatClass::CoxlessFour | BoatClass::Quad => {
            let has_cox = class.has_cox();
            let cox_y = pos.base_y + 4.0 * pos.spacing_y + if labeled { 50.0 } else { 10.0 };
            if has_cox && !labeled {
                p.push(0, Side::Center, cox_y, Some(SeatLabel::Cox));
            }
            let start = usize::from(has_cox);
            for i in 0..4u8 {
                let side = if i % 2 == 0 {
                    Side::Starboard
                } else {
                    Side::Port
                };
                let label = match i + 1 {
                    1 => SeatLabel::Bow,
                    4 => SeatLabel::Stroke,
                    n => SeatLabel::Number(n),
                };
                let y = pos.base_y + f64::from(i) * pos.spacing_y;
                p.push(start + usize::from(i), side, y, Some(label));
            }
            if has_cox && labeled {
                p.push(0, Side::Center, cox_y, Some(SeatLabel::Cox));
            }
        }
        BoatClass::Double | BoatClass::Pair => {
            let step = if labeled { 32.0 } else { 60.0 };
            p.push(0, Side::Starboard, pos.base_y - 0.5 * step, Some(SeatLabel::Bow));
            p.push(1, Side::Port, pos.base_y + 0.5 * step, Some(SeatLabel::Stroke));
        }
        BoatClass::Single => {
            let y = pos.img_y + pos.img_height / 2.0 + 80.0;
            p.push(0, Side::Center, y, None);
        }
    }

    p.out
}

#[cfg(test)]
#[path = "../../tests/unit/layout/seats.rs"]
mod tests;
