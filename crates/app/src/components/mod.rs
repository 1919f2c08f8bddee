mod badges;

pub use badges::*;
