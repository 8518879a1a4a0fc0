#![allow(dead_code)]

use crewcanvas::{BoatClass, BoatType, Crew, GeneratorConfig, PosterGenerator};

pub fn generator() -> PosterGenerator {
    PosterGenerator::new(&GeneratorConfig::default()).unwrap()
}

/// A fully rostered crew for `class`, cox first when the boat has one.
pub fn full_crew(class: BoatClass) -> Crew {
    let names = (0..class.roster_len()).map(|i| format!("Rower {i}"));
    Crew::new(
        format!("Crew {}", class.code()),
        "Riverside RC",
        "Autumn Head",
        BoatType::from_class(class),
        names,
    )
    .with_coach("Sam Coach")
}

pub fn pixel(frame: &crewcanvas::FrameRGBA, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * frame.width + x) * 4) as usize;
    [frame.data[i], frame.data[i + 1], frame.data[i + 2], frame.data[i + 3]]
}
