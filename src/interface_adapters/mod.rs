// Interface adapters: input decoding, render translation and frame output.

pub mod frame_writer;
pub mod input;
pub mod protocol;
pub mod render;
