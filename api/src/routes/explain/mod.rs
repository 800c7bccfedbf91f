pub mod explain_route;
