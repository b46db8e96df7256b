pub use self::{
    action::ActionEvaluator, long_note::LongNoteEvaluator, pattern::PatternEvaluator,
    wrist::WristEvaluator,
};

mod action;
mod long_note;
mod pattern;
mod wrist;
