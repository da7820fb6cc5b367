#![allow(dead_code)]

pub mod external_server;
pub mod fixtures;
pub mod pl_server;
