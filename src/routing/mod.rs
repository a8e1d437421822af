// Routing module entry point
// Holds the fixture's fixed route table

mod table;

pub use table::{RoutePolicy, RouteTable};
