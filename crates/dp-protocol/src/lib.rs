pub mod action;
pub mod assist;
pub mod intent;
pub mod request;

pub use action::*;
pub use assist::*;
pub use intent::*;
pub use request::*;
