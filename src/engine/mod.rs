//! Engine facade: new rule, evaluate, describe, examples, challenges.

mod zendo;

pub use zendo::ZendoEngine;
