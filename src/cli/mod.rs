pub mod daily;
pub mod doctor;
pub mod similarity;

pub use daily::daily;
pub use doctor::doctor;
pub use similarity::similarity;
