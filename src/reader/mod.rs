mod paired;
mod single;

pub use paired::PairedFastqReader;
pub use single::FastqReader;
