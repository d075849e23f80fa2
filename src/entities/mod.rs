//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene tutte le entità (models) che rappresentano i dati persistiti nel database.
//! Ogni entity corrisponde a una tabella nel database. Le relazioni sono sempre per id,
//! mai per riferimento ad altre entity.

pub mod achievement;
pub mod chat_message;
pub mod connection;
pub mod enums;
pub mod event;
pub mod job;
pub mod profile;
pub mod user;

// Re-exports per facilitare l'import
pub use achievement::Achievement;
pub use chat_message::{ChatMessage, conversation_id};
pub use connection::Connection;
pub use enums::{ConnectionStatus, MessageStatus, Role};
pub use event::Event;
pub use job::Job;
pub use profile::Profile;
pub use user::User;
