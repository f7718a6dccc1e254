// Optimization API: request validation, agent invocation under a deadline,
// response envelope, and PDF rendering of finished CVs.

pub mod handlers;
