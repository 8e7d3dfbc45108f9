//! Typed wrappers over [`WzsServiceClient::call`](crate::WzsServiceClient::call).
//!
//! One method per remote call, grouped like the service groups them. Each
//! wrapper fixes the controller, the remote method name and the result type;
//! nothing else happens between the caller and the wire.

mod calls;
mod care_planning;
mod communication;
mod doctors;
mod fall_incidents;
mod invoicing;
mod login;
mod medication;
mod notifications;
mod redirects;
mod registrations;
mod residents;
mod rooms;
mod users;
mod utilities;
mod waiting_list;
mod wounds;
