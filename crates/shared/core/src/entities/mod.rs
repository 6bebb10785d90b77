mod regulation;

pub use regulation::Regulation;
