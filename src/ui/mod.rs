pub mod intro;
pub mod panels;
pub mod preview;
