//! Discrete island stages derived from the orbit angle.
//!
//! The landing page shows a different info panel depending on which side of
//! the island faces the viewer. A stage is a pure function of the angle
//! normalized into `[0, 2π)`; angles between the windows have no stage.

use crate::constants::{
    STAGE_CONTACT_WINDOW, STAGE_INTRO_WINDOW, STAGE_PORTFOLIO_WINDOW, STAGE_RESUME_WINDOW, TAU,
};
use crate::route::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    Intro = 1,
    Resume = 2,
    Portfolio = 3,
    Contact = 4,
    /// Shown before the first drag; no angle window maps to it.
    Explore = 5,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Intro,
        Stage::Resume,
        Stage::Portfolio,
        Stage::Contact,
        Stage::Explore,
    ];

    #[inline]
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(n: u8) -> Option<Stage> {
        Stage::ALL.into_iter().find(|s| s.number() == n)
    }
}

/// Wrap any angle into `[0, 2π)`.
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if a >= TAU {
        0.0
    } else {
        a
    }
}

#[inline]
fn within(a: f32, (lo, hi): (f32, f32)) -> bool {
    a >= lo && a <= hi
}

/// Map a raw (unnormalized) angle to its stage, if any.
pub fn classify(angle: f32) -> Option<Stage> {
    let a = normalize_angle(angle);
    if within(a, STAGE_INTRO_WINDOW) {
        Some(Stage::Intro)
    } else if within(a, STAGE_CONTACT_WINDOW) {
        Some(Stage::Contact)
    } else if within(a, STAGE_PORTFOLIO_WINDOW) {
        Some(Stage::Portfolio)
    } else if within(a, STAGE_RESUME_WINDOW) {
        Some(Stage::Resume)
    } else {
        None
    }
}

/// Copy and call-to-action for the panel shown over the island.
#[derive(Clone, Debug, PartialEq)]
pub struct StagePanel {
    pub headline: &'static str,
    pub body: Option<&'static str>,
    pub cta: Option<(&'static str, Route)>,
}

pub fn panel_for(stage: Option<Stage>) -> Option<StagePanel> {
    let panel = match stage? {
        Stage::Explore => StagePanel {
            headline: "DRAG TO EXPLORE",
            body: None,
            cta: None,
        },
        Stage::Intro => StagePanel {
            headline: "Hi, welcome 👋",
            body: Some("A software engineer who likes building things that move."),
            cta: None,
        },
        Stage::Resume => StagePanel {
            headline: "Resume",
            body: Some(
                "My resume highlights my ambitions and skills, demonstrating my commitment to achieving continuous success.",
            ),
            cta: Some(("Read the resume", Route::About)),
        },
        Stage::Portfolio => StagePanel {
            headline: "Portfolio",
            body: Some("I have a diverse portfolio with extensive work across fields. Check it out!"),
            cta: Some(("See the portfolio", Route::Projects)),
        },
        Stage::Contact => StagePanel {
            headline: "Contact",
            body: Some("Need a project done or looking for a dev? I'm just a few keystrokes away."),
            cta: Some(("Let's talk", Route::Contact)),
        },
    };
    Some(panel)
}
