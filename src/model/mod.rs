pub use self::{
    keymode::{FingerState, Hand, Keymode, LaneAssignment},
    note::{Chart, Note},
};

mod keymode;
mod note;
