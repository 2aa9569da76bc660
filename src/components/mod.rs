pub mod alerts;
pub mod copy;
pub mod inputs;
pub mod instruction_drawer;
pub mod misc;
pub mod modal;
pub mod svg;
