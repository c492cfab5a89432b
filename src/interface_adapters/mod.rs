// Interface adapters: HTTP surface and outbound provider clients.

pub mod clients;
pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;
