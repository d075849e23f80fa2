//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities):
//! sul filo i campi sono sempre in camelCase.

pub mod achievement;
pub mod chat_message;
pub mod connection;
pub mod dashboard;
pub mod event;
pub mod job;
pub mod profile;
pub mod query;
pub mod user;
pub mod ws_event;

// Re-exports per facilitare l'import
pub use achievement::{AchievementDTO, CreateAchievementDTO};
pub use chat_message::{
    ChatMessageDTO, CreateChatMessageDTO, MessageStatusUpdateDTO, SendMessageDTO, UnreadCountDTO,
};
pub use connection::{
    ConnectionDetailDTO, ConnectionStatusDTO, CreateConnectionDTO, SimpleConnectionDTO,
};
pub use dashboard::DashboardStatsDTO;
pub use event::{CreateEventDTO, EventDTO};
pub use job::{CreateJobDTO, JobDTO};
pub use profile::{CreateProfileDTO, ProfileDTO, UpdateProfileDTO, UserSummaryDTO};
pub use query::{ConnectionRequestQuery, VerifyUserQuery};
pub use user::{
    AuthResponseDTO, CreateUserDTO, LoginDTO, MessageResponseDTO, RegisterDTO, ResetPasswordDTO,
};
pub use ws_event::WsEventDTO;
