//! Application endpoints: the echo API and the joke routes.

pub mod echo;
pub mod jokes;
