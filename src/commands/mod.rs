pub mod auth;
pub mod create;
pub mod delete;
pub mod participate;
pub mod publish;
pub mod submissions;
pub mod surveys;
pub mod whoami;
