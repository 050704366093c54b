mod recycle;

pub use recycle::recycle;
