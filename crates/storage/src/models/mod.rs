mod contestant;
mod event;
mod result;
mod rodeo;

pub use contestant::{Contestant, NewContestant};
pub use event::{Event, NewEvent};
pub use result::{EventResult, NewEventResult};
pub use rodeo::Rodeo;
