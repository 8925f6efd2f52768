mod common;
mod model;
mod session;
