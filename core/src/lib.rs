pub mod flooder;
pub mod network;
