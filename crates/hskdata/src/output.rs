//! Types modeling the output files and their derivation from the inputs.

pub mod grammarfile;
pub mod metafile;
pub mod radicalfile;
pub mod usage;
pub mod wordfile;
