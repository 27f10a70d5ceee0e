mod healthz;
mod register;
mod status;

pub use healthz::*;
pub use register::*;
pub use status::*;
