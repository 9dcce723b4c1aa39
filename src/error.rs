// src/error.rs
//
// MediClinic Web - API error taxonomy
//

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport failure or undecodable body.
    #[error("сеть недоступна: {0}")]
    Network(#[from] gloo_net::Error),

    /// Non-OK response with a server-provided message.
    #[error("{0}")]
    Rejected(String),

    /// Non-OK response whose body carried no error message.
    #[error("сервер вернул статус {0}")]
    Status(u16),
}
