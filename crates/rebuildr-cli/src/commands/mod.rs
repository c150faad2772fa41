mod check;
mod doctor;
mod init;
mod run;

pub use check::check;
pub use doctor::doctor;
pub use init::init;
pub use run::{parse_override, run};
